use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};

use crate::emails::EmailMessage;

/// Failure to hand a message over to the email API.
#[derive(thiserror::Error, Debug)]
pub enum EmailDeliveryError {
    #[error("Failed to reach the email API")]
    Request(#[from] reqwest::Error),
    #[error("The email API rejected the message with status {status}")]
    Rejected { status: StatusCode },
}

/// Anything able to deliver an [`EmailMessage`].
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailDeliveryError>;
}

/// Client for the Resend transactional email API.
pub struct EmailClient {
    http_client: Client,
    endpoint: Url,
    authorization_token: SecretString,
}

impl EmailClient {
    pub fn new(
        base_url: Url,
        authorization_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let endpoint = base_url
            .join("/emails")
            .context("Failed to build the email API endpoint")?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the email HTTP client")?;
        Ok(Self {
            http_client,
            endpoint,
            authorization_token,
        })
    }
}

#[async_trait::async_trait]
impl EmailSender for EmailClient {
    #[tracing::instrument(
        name = "Sending an email",
        skip_all,
        fields(email_subject = %message.subject)
    )]
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailDeliveryError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .bearer_auth(self.authorization_token.expose_secret())
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmailDeliveryError::Rejected { status });
        }
        Ok(())
    }
}
