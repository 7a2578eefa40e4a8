use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Team member from the `teamMembers` collection.
/// `menu_id` is not checked against existing menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEntry {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub designation: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub menu_id: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub order: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub bio: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub updated_at: Option<String>,
}

impl MemberEntry {
    pub fn belongs_to(&self, menu: &str) -> bool {
        self.menu_id == menu
    }
}

impl Entry for MemberEntry {
    const COLLECTION: &'static str = lnt_core::TEAM_MEMBERS;
    fn order(&self) -> i64 {
        self.order
    }
}
