//! Team directory for the lantern site.
//!
//! Menu and member documents live in a remote document store and are read
//! whole, then filtered and ordered in memory.
//!
//! ## Entries
//!
//! - [`MenuEntry`] — navigation entry, `main` or `submenu`
//! - [`MemberEntry`] — team member owned by a menu
//!
//! ## Reading
//!
//! - [`Directory`] — filtered, order-sorted listings
//! - [`Store`] — document store seam
//! - [`Firestore`] — REST-backed store
//! - [`Memory`] — in-process store
mod directory;
mod document;
mod firestore;
mod member;
mod memory;
mod menu;
mod store;

use document::lenient;

pub use directory::*;
pub use document::Document;
pub use firestore::*;
pub use member::*;
pub use memory::*;
pub use menu::*;
pub use store::*;
