use super::*;
use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// In-process [`Store`] with a fixed snapshot of documents.
/// Counts every read so callers can assert on store traffic.
#[derive(Debug, Default)]
pub struct Memory {
    collections: HashMap<String, Vec<Document>>,
    reads: AtomicUsize,
}

impl Memory {
    pub fn with(mut self, collection: &str, documents: Vec<Document>) -> Self {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        self
    }
    /// Number of `list` and `get` calls served so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn list(&self, collection: &str) -> anyhow::Result<Vec<Document>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }
    async fn get(&self, collection: &str, id: &str) -> anyhow::Result<Option<Document>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }
}
