#[derive(Debug, thiserror::Error)]
pub enum EnquiryError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("failed to deliver enquiry: {0:#}")]
    Delivery(#[from] anyhow::Error),
}

impl EnquiryError {
    /// Whether the enquirer can fix this by editing the form.
    pub fn is_client(&self) -> bool {
        !matches!(self, Self::Delivery(_))
    }
}
