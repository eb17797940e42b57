use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::Context;
use serde_json::json;

use crate::domain::{ContactForm, ContactSubmission, ValidationError};
use crate::emails::contact_notification;
use crate::integrations::Integrations;
use crate::routes::error_chain_fmt;
use crate::utils::{json_response, read_body};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl fmt::Debug for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The cause of an unexpected failure only goes to the logs.
        let message = match self {
            ContactError::ValidationError(e) => e.to_string(),
            ContactError::UnexpectedError(_) => "Internal server error".to_string(),
        };
        json_response(self.status_code(), json!({ "error": message }))
    }
}

/// Handle a contact form submission.
///
/// The notification email is sent before the message is stored, and a
/// failure of either aborts the request.
#[tracing::instrument(
    name = "Submitting a contact form",
    skip_all,
    fields(contact_email = tracing::field::Empty)
)]
pub async fn submit_contact(
    payload: web::Payload,
    integrations: web::Data<Integrations>,
) -> Result<HttpResponse, ContactError> {
    let body = read_body(payload).await?;
    let form =
        ContactForm::from_json(&body).context("Failed to decode the contact form payload")?;
    let submission = ContactSubmission::try_from(form)?;
    tracing::Span::current().record(
        "contact_email",
        tracing::field::display(&submission.email),
    );

    if let Some(email_sender) = &integrations.email_sender {
        email_sender
            .send(&contact_notification(&submission))
            .await
            .context("Failed to send the contact notification email")?;
    }

    if let Some(store) = &integrations.store {
        store
            .insert_contact(&submission)
            .await
            .context("Failed to store the contact message")?;
    }

    Ok(json_response(
        StatusCode::OK,
        json!({ "success": true, "message": "Thank you for your message!" }),
    ))
}
