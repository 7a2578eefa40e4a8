//! Contact form route and the mailer used when none is configured.
pub mod handlers;

use lnt_enquiry::Email;
use lnt_enquiry::Mailer;

/// Stands in when MAIL_API_KEY, MAIL_FROM or MAIL_TO is missing.
/// Every enquiry then fails as an upstream error.
pub struct Unconfigured;

#[async_trait::async_trait]
impl Mailer for Unconfigured {
    async fn send(&self, _: &Email) -> anyhow::Result<()> {
        anyhow::bail!("mail relay is not configured")
    }
}
