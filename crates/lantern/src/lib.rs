//! Backend for a nonprofit organization's website.
//!
//! This facade crate re-exports all public lantern crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Constants, configuration, and logging bootstrap
//! - [`auth`] — Admin session issuance and verification
//! - [`directory`] — Team directory over the document store
//! - [`enquiry`] — Contact form email relay
//! - [`server`] — actix-web backend

pub use lnt_core      as core;
pub use lnt_auth      as auth;
pub use lnt_directory as directory;
pub use lnt_enquiry   as enquiry;
pub use lnt_server    as server;

// Re-export commonly used types at the root
pub use lnt_core::*;
