use super::*;

/// Process configuration, read from the environment exactly once at startup.
///
/// Components never read the environment themselves; each receives the
/// sub-struct it needs so tests can build them directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub origin: Option<String>,
    pub timeout: std::time::Duration,
    pub admin: AdminConfig,
    pub store: Option<StoreConfig>,
    pub mail: Option<MailConfig>,
}

/// The single administrative identity and the key its sessions are signed with.
#[derive(Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    pub key: Vec<u8>,
    /// Mark session cookies Secure. Off only in local development.
    pub secure: bool,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub project: String,
    pub database: String,
    pub key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub url: String,
    pub key: String,
    pub from: String,
    pub to: String,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("key", &"<redacted>")
            .field("secure", &self.secure)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Blank values are treated as unset. Credentials and the signing key
    /// are kept byte for byte; everything else is trimmed.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let var = |key: &str| raw(key).map(|v| v.trim().to_string());
        let development = var("APP_ENV").is_some_and(|env| env.eq_ignore_ascii_case("development"));
        let timeout = var("HTTP_TIMEOUT_SECS")
            .and_then(|s| {
                s.parse::<u64>()
                    .inspect_err(|e| log::warn!("invalid HTTP_TIMEOUT_SECS {}: {}", s, e))
                    .ok()
            })
            .unwrap_or(DEFAULT_HTTP_TIMEOUT);
        let admin = AdminConfig {
            username: raw("ADMIN_USERNAME").unwrap_or_default(),
            password: raw("ADMIN_PASSWORD").unwrap_or_default(),
            key: raw("JWT_SECRET")
                .map(String::into_bytes)
                .unwrap_or_else(ephemeral),
            secure: !development,
        };
        if admin.username.is_empty() || admin.password.is_empty() {
            log::warn!("ADMIN_USERNAME or ADMIN_PASSWORD not set, admin login is disabled");
        }
        let store = var("FIRESTORE_PROJECT").map(|project| StoreConfig {
            url: var("FIRESTORE_URL").unwrap_or_else(|| DEFAULT_FIRESTORE_URL.to_string()),
            database: var("FIRESTORE_DATABASE")
                .unwrap_or_else(|| DEFAULT_FIRESTORE_DATABASE.to_string()),
            key: var("FIRESTORE_API_KEY"),
            project,
        });
        let mail = match (var("MAIL_API_KEY"), var("MAIL_FROM"), var("MAIL_TO")) {
            (Some(key), Some(from), Some(to)) => Some(MailConfig {
                url: var("MAIL_API_URL").unwrap_or_else(|| DEFAULT_MAIL_URL.to_string()),
                key,
                from,
                to,
            }),
            _ => None,
        };
        Self {
            bind: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            origin: var("ALLOWED_ORIGIN"),
            timeout: std::time::Duration::from_secs(timeout),
            admin,
            store,
            mail,
        }
    }
}

/// Random per-process signing key. Sessions signed with it die with the process.
fn ephemeral() -> Vec<u8> {
    use rand::Rng;
    log::warn!("JWT_SECRET not set, generating an ephemeral signing key");
    let mut bytes = vec![0u8; SIGNING_KEY_BYTES];
    rand::rng().fill(bytes.as_mut_slice());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let env = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]);
        assert_eq!(config.bind, DEFAULT_BIND_ADDR);
        assert_eq!(config.timeout.as_secs(), DEFAULT_HTTP_TIMEOUT);
        assert!(config.admin.secure);
        assert!(config.admin.username.is_empty());
        assert!(config.store.is_none());
        assert!(config.mail.is_none());
    }

    #[test]
    fn missing_secret_generates_random_key() {
        let a = config(&[]);
        let b = config(&[]);
        assert_eq!(a.admin.key.len(), SIGNING_KEY_BYTES);
        assert_ne!(a.admin.key, b.admin.key);
    }

    #[test]
    fn development_disables_secure_cookies() {
        let config = config(&[("APP_ENV", "Development"), ("JWT_SECRET", "s3cret")]);
        assert!(!config.admin.secure);
        assert_eq!(config.admin.key, b"s3cret".to_vec());
    }

    #[test]
    fn store_requires_project() {
        let config = config(&[("FIRESTORE_API_KEY", "k")]);
        assert!(config.store.is_none());
        let config = self::config(&[("FIRESTORE_PROJECT", "charity"), ("FIRESTORE_API_KEY", "k")]);
        let store = config.store.expect("store configured");
        assert_eq!(store.project, "charity");
        assert_eq!(store.database, DEFAULT_FIRESTORE_DATABASE);
        assert_eq!(store.key.as_deref(), Some("k"));
    }

    #[test]
    fn mail_requires_key_sender_and_recipient() {
        assert!(config(&[("MAIL_API_KEY", "k"), ("MAIL_FROM", "a@b.org")]).mail.is_none());
        let mail = config(&[
            ("MAIL_API_KEY", "k"),
            ("MAIL_FROM", "site@charity.org"),
            ("MAIL_TO", "info@charity.org"),
        ])
        .mail
        .expect("mail configured");
        assert_eq!(mail.url, DEFAULT_MAIL_URL);
        assert_eq!(mail.to, "info@charity.org");
    }

    #[test]
    fn credentials_keep_surrounding_whitespace() {
        let config = config(&[
            ("ADMIN_USERNAME", "warden "),
            ("ADMIN_PASSWORD", "  light house  "),
            ("JWT_SECRET", " s3cret\t"),
        ]);
        assert_eq!(config.admin.username, "warden ");
        assert_eq!(config.admin.password, "  light house  ");
        assert_eq!(config.admin.key, b" s3cret\t".to_vec());
        let config = self::config(&[("ADMIN_PASSWORD", "   ")]);
        assert!(config.admin.password.is_empty());
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config(&[("BIND_ADDR", "   "), ("HTTP_TIMEOUT_SECS", "abc")]);
        assert_eq!(config.bind, DEFAULT_BIND_ADDR);
        assert_eq!(config.timeout.as_secs(), DEFAULT_HTTP_TIMEOUT);
    }
}
