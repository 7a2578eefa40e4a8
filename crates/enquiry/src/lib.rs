//! Contact form relay for the lantern site.
//!
//! Enquiries are validated, rendered into two emails and handed to a
//! transactional email API. Delivery is at most once: a failed send is
//! reported and never retried or stored.
mod email;
mod enquiry;
mod error;
mod mailer;
mod relay;

pub use email::*;
pub use enquiry::*;
pub use error::*;
pub use mailer::*;
pub use relay::*;
