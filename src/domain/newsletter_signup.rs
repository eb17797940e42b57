use crate::domain::form_fields::{FormFields, non_empty};
use crate::domain::{EmailAddress, ValidationError};

/// The newsletter signup payload as it arrives over the wire.
#[derive(Debug, Default)]
pub struct SignupForm {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl SignupForm {
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut fields = FormFields::from_json(body)?;
        Ok(Self {
            email: fields.take("email"),
            name: fields.take("name"),
        })
    }
}

/// A validated newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSignup {
    pub email: EmailAddress,
    /// `None` when the name was absent or empty.
    pub name: Option<String>,
}

impl NewsletterSignup {
    /// The name used to greet the subscriber.
    pub fn greeting_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Friend")
    }
}

impl TryFrom<SignupForm> for NewsletterSignup {
    type Error = ValidationError;

    fn try_from(form: SignupForm) -> Result<Self, Self::Error> {
        let email = non_empty(form.email).ok_or(ValidationError::EmailRequired)?;
        let email = EmailAddress::parse(email)?;
        Ok(Self {
            email,
            name: non_empty(form.name),
        })
    }
}
