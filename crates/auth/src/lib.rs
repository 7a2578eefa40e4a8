//! Admin sessions for the lantern site.
//!
//! A single configured identity logs in with a username and password and
//! receives a signed, seven day JWT in an HTTP-only cookie. There is no
//! server-side session table: expiry is the only invalidation.
//!
//! ## Types
//!
//! - [`Issuer`] — Credential check, token minting and verification
//! - [`Claims`] — JWT payload structure
//! - [`Crypto`] — HS256 signing and verification
//! - [`password`] — Argon2 hashing for configured passwords
//!
//! ## HTTP (feature `server`)
//!
//! - [`Admin`] / [`MaybeAdmin`] — cookie extractors
//! - [`login`], [`logout`], [`session`] — actix-web handlers
mod claims;
mod crypto;
mod dto;
mod error;
mod issuer;
pub mod password;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use issuer::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
