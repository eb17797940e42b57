use uuid::Uuid;

use crate::domain::{EmailAddress, NewsletterSignup};

/// Where a subscription originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberSource {
    Website,
}

impl SubscriberSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberSource::Website => "website",
        }
    }
}

/// A `subscribers` row waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscriber {
    pub id: Uuid,
    pub email: EmailAddress,
    pub name: Option<String>,
    pub source: SubscriberSource,
}

impl NewSubscriber {
    pub fn from_website(signup: &NewsletterSignup) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: signup.email.clone(),
            name: signup.name.clone(),
            source: SubscriberSource::Website,
        }
    }
}
