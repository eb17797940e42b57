mod contact_submission;
mod email_address;
mod form_fields;
mod new_subscriber;
mod newsletter_signup;
mod validation_error;

pub use contact_submission::{ContactForm, ContactSubmission};
pub use email_address::EmailAddress;
pub use form_fields::FormFields;
pub use new_subscriber::{NewSubscriber, SubscriberSource};
pub use newsletter_signup::{NewsletterSignup, SignupForm};
pub use validation_error::ValidationError;
