use super::*;
use anyhow::Context;
use std::sync::Arc;

/// Forwards validated enquiries as two emails: the organization's
/// notification, then the enquirer's acknowledgement. Stops at the first
/// failed send; nothing is queued for later.
#[derive(Clone)]
pub struct Relay {
    mailer: Arc<dyn Mailer>,
    from: String,
    inbox: String,
}

impl Relay {
    pub fn new<M>(mailer: M, from: impl Into<String>, inbox: impl Into<String>) -> Self
    where
        M: Mailer + 'static,
    {
        Self::shared(Arc::new(mailer), from, inbox)
    }

    pub fn shared(mailer: Arc<dyn Mailer>, from: impl Into<String>, inbox: impl Into<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
            inbox: inbox.into(),
        }
    }

    pub async fn relay(&self, enquiry: Enquiry) -> Result<(), EnquiryError> {
        let enquiry = enquiry.validate()?;
        self.mailer
            .send(&Email::notification(&enquiry, &self.from, &self.inbox))
            .await
            .context("notification")?;
        self.mailer
            .send(&Email::acknowledgement(&enquiry, &self.from))
            .await
            .context("acknowledgement")?;
        log::info!("relayed enquiry from {}", enquiry.email);
        Ok(())
    }
}
