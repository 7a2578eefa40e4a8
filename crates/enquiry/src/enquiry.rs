use super::*;
use serde::Deserialize;
use serde::Serialize;

/// A contact form submission. Every field is required.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub message: String,
}

impl Enquiry {
    /// Trims every field and rejects the first missing one.
    pub fn validate(self) -> Result<Self, EnquiryError> {
        let enquiry = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        for (field, value) in [
            ("name", &enquiry.name),
            ("email", &enquiry.email),
            ("phone", &enquiry.phone),
            ("location", &enquiry.location),
            ("message", &enquiry.message),
        ] {
            if value.is_empty() {
                return Err(EnquiryError::MissingField(field));
            }
        }
        if !plausible(&enquiry.email) {
            return Err(EnquiryError::InvalidEmail);
        }
        Ok(enquiry)
    }
}

/// `local@domain.tld` with no whitespace; delivery is the real check.
fn plausible(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.chars().any(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enquiry() -> Enquiry {
        Enquiry {
            name: "  Grace Hopper ".into(),
            email: "grace@navy.mil".into(),
            phone: "+1 555 0100".into(),
            location: "Arlington".into(),
            message: "Can we volunteer?".into(),
        }
    }

    #[test]
    fn valid_enquiry_is_trimmed() {
        let enquiry = enquiry().validate().unwrap();
        assert_eq!(enquiry.name, "Grace Hopper");
    }

    #[test]
    fn first_missing_field_is_reported() {
        let missing = Enquiry {
            phone: " ".into(),
            message: String::new(),
            ..enquiry()
        };
        assert!(matches!(missing.validate(), Err(EnquiryError::MissingField("phone"))));
        assert!(matches!(
            Enquiry::default().validate(),
            Err(EnquiryError::MissingField("name"))
        ));
    }

    #[test]
    fn implausible_email_is_rejected() {
        for email in ["grace", "@navy.mil", "grace@navy", "grace@.mil", "gr ace@navy.mil", "a@b@c.org"] {
            let enquiry = Enquiry {
                email: email.into(),
                ..enquiry()
            };
            assert!(
                matches!(enquiry.validate(), Err(EnquiryError::InvalidEmail)),
                "{email}"
            );
        }
    }
}
