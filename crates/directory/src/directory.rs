use super::*;
use std::sync::Arc;

/// Read-only accessor over the menu and member collections.
///
/// Every list call scans the whole collection, filters in memory, then
/// stable-sorts by `order` so equal orders keep the store's fetch order.
/// Store failures are logged and read as empty.
#[derive(Clone)]
pub struct Directory {
    store: Arc<dyn Store>,
}

impl From<Arc<dyn Store>> for Directory {
    fn from(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl Directory {
    pub fn new<S>(store: S) -> Self
    where
        S: Store + 'static,
    {
        Self {
            store: Arc::new(store),
        }
    }

    pub async fn list_top_level_menus(&self) -> Vec<MenuEntry> {
        self.scan(MenuEntry::is_top_level).await
    }

    pub async fn list_child_menus(&self, parent: &str) -> Vec<MenuEntry> {
        if blank(parent) {
            return Vec::new();
        }
        self.scan(|menu: &MenuEntry| {
            if menu.is_orphan() {
                log::debug!("submenu {} has no parent", menu.id);
            }
            menu.is_child_of(parent)
        })
        .await
    }

    pub async fn get_menu(&self, id: &str) -> Option<MenuEntry> {
        if blank(id) {
            return None;
        }
        self.store
            .get(MenuEntry::COLLECTION, id)
            .await
            .inspect_err(|e| log::error!("failed to fetch menu {}: {:#}", id, e))
            .ok()
            .flatten()
            .and_then(decode)
    }

    pub async fn list_members(&self, menu: &str) -> Vec<MemberEntry> {
        if blank(menu) {
            return Vec::new();
        }
        self.scan(|member: &MemberEntry| member.belongs_to(menu)).await
    }

    pub async fn list_all_members(&self) -> Vec<MemberEntry> {
        self.scan(|_: &MemberEntry| true).await
    }

    async fn scan<T, F>(&self, keep: F) -> Vec<T>
    where
        T: Entry,
        F: Fn(&T) -> bool,
    {
        let documents = match self.store.list(T::COLLECTION).await {
            Ok(documents) => documents,
            Err(e) => {
                log::error!("failed to fetch {}: {:#}", T::COLLECTION, e);
                return Vec::new();
            }
        };
        let mut entries = documents
            .into_iter()
            .filter_map(decode::<T>)
            .filter(|entry| keep(entry))
            .collect::<Vec<T>>();
        entries.sort_by_key(T::order);
        entries
    }
}

fn blank(key: &str) -> bool {
    key.trim().is_empty()
}

fn decode<T>(document: Document) -> Option<T>
where
    T: Entry,
{
    let id = document.id.clone();
    document
        .decode()
        .inspect_err(|e| log::warn!("skipping malformed {} document {}: {}", T::COLLECTION, id, e))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Store whose every read fails.
    struct Down;

    #[async_trait::async_trait]
    impl Store for Down {
        async fn list(&self, _: &str) -> anyhow::Result<Vec<Document>> {
            anyhow::bail!("missing index")
        }
        async fn get(&self, _: &str, _: &str) -> anyhow::Result<Option<Document>> {
            anyhow::bail!("permission denied")
        }
    }

    fn member(id: &str, menu: &str, order: i64) -> Document {
        Document::new(id, json!({"name": id, "menuId": menu, "order": order}))
    }

    fn menu(id: &str, kind: &str, order: i64) -> Document {
        Document::new(id, json!({"title": id, "type": kind, "order": order}))
    }

    fn ids<T>(entries: &[T], id: fn(&T) -> &str) -> Vec<String> {
        entries.iter().map(|e| id(e).to_string()).collect()
    }

    #[tokio::test]
    async fn members_sort_stably_by_order() {
        let store = Memory::default().with(
            lnt_core::TEAM_MEMBERS,
            vec![
                member("three", "board", 3),
                member("first-one", "board", 1),
                member("two", "board", 2),
                member("second-one", "board", 1),
                member("elsewhere", "staff", 0),
            ],
        );
        let members = Directory::new(store).list_members("board").await;
        assert_eq!(
            ids(&members, |m| m.id.as_str()),
            ["first-one", "second-one", "two", "three"]
        );
    }

    #[tokio::test]
    async fn blank_keys_skip_the_store() {
        let store = Arc::new(Memory::default().with(lnt_core::TEAM_MEMBERS, vec![member("a", "", 0)]));
        let directory = Directory::from(store.clone() as Arc<dyn Store>);
        assert!(directory.list_members("").await.is_empty());
        assert!(directory.list_members("  ").await.is_empty());
        assert!(directory.list_child_menus("").await.is_empty());
        assert!(directory.get_menu("").await.is_none());
        assert_eq!(store.reads(), 0);
        directory.list_members("x").await;
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn top_level_menus_are_main_and_sorted() {
        let store = Memory::default().with(
            lnt_core::MENU_ITEMS,
            vec![menu("a", "submenu", 0), menu("b", "main", 5), menu("c", "main", 1)],
        );
        let menus = Directory::new(store).list_top_level_menus().await;
        assert_eq!(ids(&menus, |m| m.id.as_str()), ["c", "b"]);
    }

    #[tokio::test]
    async fn child_menus_match_parent() {
        let store = Memory::default().with(
            lnt_core::MENU_ITEMS,
            vec![
                Document::new("x", json!({"type": "submenu", "parentId": "about", "order": 2})),
                Document::new("y", json!({"type": "submenu", "parentId": "team"})),
                Document::new("z", json!({"type": "submenu", "parentId": "about", "order": 1})),
                Document::new("orphan", json!({"type": "submenu"})),
            ],
        );
        let children = Directory::new(store).list_child_menus("about").await;
        assert_eq!(ids(&children, |m| m.id.as_str()), ["z", "x"]);
    }

    #[tokio::test]
    async fn missing_order_reads_as_zero() {
        let store = Memory::default().with(
            lnt_core::TEAM_MEMBERS,
            vec![
                member("late", "board", 1),
                Document::new("unordered", json!({"menuId": "board"})),
            ],
        );
        let members = Directory::new(store).list_members("board").await;
        assert_eq!(ids(&members, |m| m.id.as_str()), ["unordered", "late"]);
        assert_eq!(members[0].order, 0);
    }

    #[tokio::test]
    async fn malformed_documents_are_skipped() {
        let store = Memory::default().with(
            lnt_core::TEAM_MEMBERS,
            vec![
                Document::new("bad", json!({"menuId": "board", "name": 12})),
                member("good", "board", 0),
            ],
        );
        let members = Directory::new(store).list_all_members().await;
        assert_eq!(ids(&members, |m| m.id.as_str()), ["good"]);
    }

    #[tokio::test]
    async fn get_menu_by_id() {
        let store = Memory::default().with(lnt_core::MENU_ITEMS, vec![menu("about", "main", 0)]);
        let directory = Directory::new(store);
        assert_eq!(directory.get_menu("about").await.map(|m| m.title), Some("about".to_string()));
        assert!(directory.get_menu("missing").await.is_none());
    }

    #[tokio::test]
    async fn store_failures_read_as_empty() {
        let directory = Directory::new(Down);
        assert!(directory.list_top_level_menus().await.is_empty());
        assert!(directory.list_child_menus("about").await.is_empty());
        assert!(directory.list_members("board").await.is_empty());
        assert!(directory.list_all_members().await.is_empty());
        assert!(directory.get_menu("about").await.is_none());
    }
}
