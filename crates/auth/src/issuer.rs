use super::*;
use lnt_core::AdminConfig;

/// Issues and verifies sessions for the single configured admin identity.
pub struct Issuer {
    username: String,
    password: String,
    crypto: Crypto,
    secure: bool,
}

impl From<&AdminConfig> for Issuer {
    fn from(config: &AdminConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            crypto: Crypto::new(&config.key),
            secure: config.secure,
        }
    }
}

impl Issuer {
    pub fn new(config: AdminConfig) -> Self {
        Self::from(&config)
    }

    /// Checks the credentials and mints a signed session token.
    pub fn issue(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if !self.accepts(username, password) {
            log::warn!("rejected admin login attempt");
            return Err(AuthError::InvalidCredentials);
        }
        let claims = Claims::new(username.to_string());
        let token = self.crypto.encode(&claims)?;
        log::info!("issued admin session {} to {}", claims.sid, claims.username);
        Ok(token)
    }

    /// Decodes a session token. Every failure is reported as no session.
    pub fn verify(&self, token: Option<&str>) -> Option<Claims> {
        token
            .filter(|t| !t.is_empty())
            .and_then(|t| {
                self.crypto
                    .decode(t)
                    .inspect_err(|e| log::debug!("session rejected: {}", e))
                    .ok()
            })
            .filter(|c| !c.expired())
    }

    pub fn is_authenticated(&self, token: Option<&str>) -> bool {
        self.verify(token).is_some_and(|c| c.is_admin())
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    /// An unconfigured identity never accepts anything.
    fn accepts(&self, username: &str, password: &str) -> bool {
        !self.username.is_empty()
            && !self.password.is_empty()
            && Crypto::hash(username) == Crypto::hash(&self.username)
            && password::matches(password, &self.password)
    }
}

#[cfg(feature = "server")]
mod cookies {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::cookie::SameSite;
    use actix_web::cookie::time::Duration;
    use lnt_core::SESSION_COOKIE;
    use lnt_core::SESSION_DURATION;

    impl Issuer {
        /// The cookie that carries a freshly issued token.
        pub fn cookie(&self, token: String) -> Cookie<'static> {
            Cookie::build(SESSION_COOKIE, token)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(self.secure)
                .max_age(Duration::seconds(SESSION_DURATION.as_secs() as i64))
                .finish()
        }
        /// The cookie that deletes the session on the client.
        /// Safe to send whether or not a session cookie exists.
        pub fn revoke(&self) -> Cookie<'static> {
            let mut cookie = self.cookie(String::new());
            cookie.make_removal();
            cookie
        }
    }
}
