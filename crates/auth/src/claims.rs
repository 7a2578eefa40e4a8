use lnt_core::SESSION_DURATION;

/// JWT payload of an admin session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub username: String,
    #[serde(rename = "isAdmin")]
    pub admin: bool,
    pub iat: i64,
    pub exp: i64,
    pub sid: uuid::Uuid,
}

impl Claims {
    pub fn new(username: String) -> Self {
        let now = now();
        Self {
            username,
            admin: true,
            iat: now,
            exp: now + SESSION_DURATION.as_secs() as i64,
            sid: uuid::Uuid::now_v7(),
        }
    }
    pub fn expired(&self) -> bool {
        self.exp <= now()
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}

/// Seconds since the unix epoch.
pub(crate) fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
