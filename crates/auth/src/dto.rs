use serde::Deserialize;
use serde::Serialize;

/// Login body. Fields default to empty so a body missing either one is a
/// validation failure rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
    pub username: Option<String>,
    pub expires: Option<i64>,
}

impl From<Option<&super::Claims>> for SessionStatus {
    fn from(claims: Option<&super::Claims>) -> Self {
        match claims.filter(|c| c.is_admin()) {
            Some(claims) => Self {
                authenticated: true,
                username: Some(claims.username().to_string()),
                expires: Some(claims.exp),
            },
            None => Self {
                authenticated: false,
                username: None,
                expires: None,
            },
        }
    }
}
