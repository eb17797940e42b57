use crate::domain::form_fields::{FormFields, non_empty};
use crate::domain::{EmailAddress, ValidationError};

/// The contact form payload as it arrives over the wire.
///
/// Every field is optional here so that an absent field is reported as a
/// validation failure rather than a decoding failure.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut fields = FormFields::from_json(body)?;
        Ok(Self {
            name: fields.take("name"),
            email: fields.take("email"),
            subject: fields.take("subject"),
            message: fields.take("message"),
        })
    }
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub subject: Option<String>,
    pub message: String,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(message)) = (
            non_empty(form.name),
            non_empty(form.email),
            non_empty(form.message),
        ) else {
            return Err(ValidationError::MissingRequiredFields);
        };
        let email = EmailAddress::parse(email)?;
        Ok(Self {
            name,
            email,
            subject: form.subject,
            message,
        })
    }
}
