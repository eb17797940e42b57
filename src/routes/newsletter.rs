use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::Context;
use serde_json::json;

use crate::domain::{NewSubscriber, NewsletterSignup, SignupForm, ValidationError};
use crate::emails::welcome_email;
use crate::integrations::Integrations;
use crate::routes::error_chain_fmt;
use crate::utils::{json_response, read_body};

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("This email is already subscribed")]
    DuplicateSubscriber,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::ValidationError(_) | SubscribeError::DuplicateSubscriber => {
                StatusCode::BAD_REQUEST
            }
            SubscribeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            SubscribeError::UnexpectedError(_) => {
                "Failed to subscribe. Please try again.".to_string()
            }
            e => e.to_string(),
        };
        json_response(self.status_code(), json!({ "error": message }))
    }
}

/// Handle a newsletter signup.
///
/// The duplicate check runs before the insert, and the welcome email is
/// only attempted once the subscriber is stored. A failed welcome email
/// does not fail the signup.
#[tracing::instrument(
    name = "Adding a new newsletter subscriber",
    skip_all,
    fields(subscriber_email = tracing::field::Empty)
)]
pub async fn subscribe(
    payload: web::Payload,
    integrations: web::Data<Integrations>,
) -> Result<HttpResponse, SubscribeError> {
    let body = read_body(payload).await?;
    let form = SignupForm::from_json(&body).context("Failed to decode the signup payload")?;
    let signup = NewsletterSignup::try_from(form)?;
    tracing::Span::current().record(
        "subscriber_email",
        tracing::field::display(&signup.email),
    );

    if let Some(store) = &integrations.store {
        let already_subscribed = store
            .active_subscriber_exists(&signup.email)
            .await
            .context("Failed to look up existing subscribers")?;
        if already_subscribed {
            return Err(SubscribeError::DuplicateSubscriber);
        }
        store
            .insert_subscriber(&NewSubscriber::from_website(&signup))
            .await
            .context("Failed to store the new subscriber")?;
    }

    if let Some(email_sender) = &integrations.email_sender {
        if let Err(e) = email_sender.send(&welcome_email(&signup)).await {
            tracing::warn!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to send the welcome email"
            );
        }
    }

    Ok(json_response(
        StatusCode::OK,
        json!({ "success": true, "message": "Successfully subscribed!" }),
    ))
}
