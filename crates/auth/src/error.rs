/// Failures of [`Issuer::issue`](crate::Issuer::issue) that callers translate into statuses.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("failed to sign session: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
