use super::*;

/// Read access to a flat, schemaless document store.
///
/// Implementations return documents in the store's own iteration order;
/// callers rely on that order to break ties when sorting.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Every document of a collection.
    async fn list(&self, collection: &str) -> anyhow::Result<Vec<Document>>;
    /// A single document by id, or `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> anyhow::Result<Option<Document>>;
}

/// An entry type stored in one fixed collection.
pub trait Entry: serde::de::DeserializeOwned {
    const COLLECTION: &'static str;
    fn order(&self) -> i64;
}
