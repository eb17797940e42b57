use std::sync::Arc;

use anyhow::Context;
use reqwest::Url;

use crate::configuration::Settings;
use crate::email_client::{EmailClient, EmailSender};
use crate::store::{PgSubmissionStore, SubmissionStore, get_connection_pool};

/// The external capabilities available to the request handlers.
///
/// Each one is optional: a handler skips the side effect of any
/// integration that is not wired for this deployment.
#[derive(Clone, Default)]
pub struct Integrations {
    pub email_sender: Option<Arc<dyn EmailSender>>,
    pub store: Option<Arc<dyn SubmissionStore>>,
}

impl Integrations {
    pub fn new(
        email_sender: Option<Arc<dyn EmailSender>>,
        store: Option<Arc<dyn SubmissionStore>>,
    ) -> Self {
        Self {
            email_sender,
            store,
        }
    }

    pub fn from_settings(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let email_sender = match &configuration.email_client {
            Some(settings) => match settings.authorization_token() {
                Some(token) => {
                    let base_url = Url::parse(&settings.base_url)
                        .context("Invalid email client base URL")?;
                    let client = EmailClient::new(base_url, token.clone(), settings.timeout())?;
                    Some(Arc::new(client) as Arc<dyn EmailSender>)
                }
                None => None,
            },
            None => None,
        };
        let store = configuration.database.as_ref().map(|settings| {
            let store = PgSubmissionStore::new(get_connection_pool(settings));
            Arc::new(store) as Arc<dyn SubmissionStore>
        });

        if email_sender.is_none() {
            tracing::info!("No email API token configured, outgoing email is disabled");
        }
        if store.is_none() {
            tracing::info!("No database configured, submissions will not be stored");
        }
        Ok(Self::new(email_sender, store))
    }
}
