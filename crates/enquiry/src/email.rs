use super::*;
use serde::Serialize;

/// One outbound message in the shape transactional mail APIs accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

impl Email {
    /// Notification to the organization inbox, replying straight to the enquirer.
    pub fn notification(enquiry: &Enquiry, from: &str, inbox: &str) -> Self {
        Self {
            from: from.to_string(),
            to: vec![inbox.to_string()],
            subject: format!("New enquiry from {}", enquiry.name),
            html: format!(
                "<h2>New enquiry</h2>\
                 <p><strong>Name:</strong> {}</p>\
                 <p><strong>Email:</strong> {}</p>\
                 <p><strong>Phone:</strong> {}</p>\
                 <p><strong>Location:</strong> {}</p>\
                 <p><strong>Message:</strong></p><p>{}</p>",
                escape(&enquiry.name),
                escape(&enquiry.email),
                escape(&enquiry.phone),
                escape(&enquiry.location),
                paragraphs(&enquiry.message),
            ),
            reply_to: Some(enquiry.email.clone()),
        }
    }

    /// Acknowledgement back to the enquirer.
    pub fn acknowledgement(enquiry: &Enquiry, from: &str) -> Self {
        Self {
            from: from.to_string(),
            to: vec![enquiry.email.clone()],
            subject: "Thank you for contacting us".to_string(),
            html: format!(
                "<p>Dear {},</p>\
                 <p>Thank you for reaching out. We have received your message and \
                 a member of our team will get back to you shortly.</p>\
                 <blockquote>{}</blockquote>\
                 <p>With gratitude,<br/>The team</p>",
                escape(&enquiry.name),
                paragraphs(&enquiry.message),
            ),
            reply_to: None,
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escapes and keeps the enquirer's line breaks.
fn paragraphs(text: &str) -> String {
    text.lines().map(escape).collect::<Vec<_>>().join("<br/>")
}
