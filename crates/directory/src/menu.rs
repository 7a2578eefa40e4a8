use super::*;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    Main,
    Submenu,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Navigation entry from the `menuItems` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::or_default")]
    pub kind: MenuKind,
    #[serde(default, deserialize_with = "lenient::reference")]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub order: i64,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub level: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub content: String,
}

impl MenuEntry {
    pub fn is_top_level(&self) -> bool {
        self.kind == MenuKind::Main
    }
    pub fn is_child_of(&self, parent: &str) -> bool {
        self.parent_id.as_deref() == Some(parent)
    }
    /// A submenu that points at no parent.
    pub fn is_orphan(&self) -> bool {
        self.kind == MenuKind::Submenu && self.parent_id.is_none()
    }
}

impl Entry for MenuEntry {
    const COLLECTION: &'static str = lnt_core::MENU_ITEMS;
    fn order(&self) -> i64 {
        self.order
    }
}
