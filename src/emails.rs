//! Outgoing transactional emails.

use crate::domain::{ContactSubmission, NewsletterSignup};

pub const CONTACT_SENDER: &str = "contact@theinneredit.com";
pub const CONTACT_RECIPIENT: &str = "hello@theinneredit.com";
pub const NEWSLETTER_SENDER: &str = "The Inner Edit <hello@theinneredit.com>";
pub const WELCOME_SUBJECT: &str = "Welcome to The Editor's Note";

/// A message ready to be handed to an [`EmailSender`](crate::email_client::EmailSender).
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// The notification sent to the site owner for a contact form submission.
///
/// Submitted fields are embedded as-is; only newlines in the message are
/// converted to `<br>`.
pub fn contact_notification(submission: &ContactSubmission) -> EmailMessage {
    let subject = submission.subject.as_deref().unwrap_or_default();
    let html = format!(
        r#"
        <h2>New Contact Form Submission</h2>
        <p><strong>From:</strong> {name} ({email})</p>
        <p><strong>Subject:</strong> {subject}</p>
        <p><strong>Message:</strong></p>
        <p>{message}</p>
      "#,
        name = submission.name,
        email = submission.email,
        subject = subject,
        message = submission.message.replace('\n', "<br>"),
    );
    EmailMessage {
        from: CONTACT_SENDER.to_string(),
        to: CONTACT_RECIPIENT.to_string(),
        subject: format!("Contact Form: {}", subject),
        html,
    }
}

/// The welcome letter sent to a new newsletter subscriber.
pub fn welcome_email(signup: &NewsletterSignup) -> EmailMessage {
    let html = format!(
        r##"
        <!DOCTYPE html>
        <html>
        <head>
          <style>
            body {{ font-family: Georgia, serif; color: #2A2A2A; line-height: 1.7; }}
            .container {{ max-width: 600px; margin: 0 auto; padding: 40px 20px; }}
            h1 {{ font-size: 32px; margin-bottom: 20px; }}
            .subtitle {{ font-style: italic; color: #C8B58B; margin-bottom: 30px; }}
            p {{ margin-bottom: 20px; }}
            .signature {{ margin-top: 40px; font-style: italic; }}
            .footer {{ margin-top: 60px; padding-top: 30px; border-top: 1px solid #E9E2DB; font-size: 14px; color: #999; }}
          </style>
        </head>
        <body>
          <div class="container">
            <h1>Welcome to The Inner Circle</h1>
            <p class="subtitle">The Editor's Note</p>

            <p>Dear {name},</p>

            <p>
              Thank you for joining The Inner Circle. I'm honored to have you here.
            </p>

            <p>
              Once a month, you'll receive a thoughtfully crafted note, a space for
              deeper reflections, early access to new collections, and invitations
              to slow down and edit life with intention.
            </p>

            <p>
              In the meantime, I invite you to explore the journal and discover
              the collection of objects designed to bring ritual into everyday moments.
            </p>

            <p class="signature">
              With intention,<br>
              The Inner Edit
            </p>

            <div class="footer">
              <p>
                You're receiving this because you subscribed to The Editor's Note
                at theinneredit.com. <a href="#">Unsubscribe</a>
              </p>
            </div>
          </div>
        </body>
        </html>
      "##,
        name = signup.greeting_name(),
    );
    EmailMessage {
        from: NEWSLETTER_SENDER.to_string(),
        to: signup.email.to_string(),
        subject: WELCOME_SUBJECT.to_string(),
        html,
    }
}
