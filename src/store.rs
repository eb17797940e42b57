use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::configuration::DatabaseSettings;
use crate::domain::{ContactSubmission, EmailAddress, NewSubscriber};

#[derive(thiserror::Error, Debug)]
#[error("The record store failed to execute a query")]
pub struct StoreError(#[from] sqlx::Error);

/// Persistence for contact messages and newsletter subscribers.
#[async_trait::async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Record a contact form submission. Duplicates are stored as-is.
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError>;

    /// Whether an *active* subscriber already uses `email`.
    async fn active_subscriber_exists(&self, email: &EmailAddress) -> Result<bool, StoreError>;

    async fn insert_subscriber(&self, subscriber: &NewSubscriber) -> Result<(), StoreError>;
}

/// Get a connection pool to the database.
///
/// The pool connects lazily, so a missing database only surfaces on the
/// first request that needs it.
pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy_with(configuration.connect_options())
}

/// [`SubmissionStore`] backed by Postgres.
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SubmissionStore for PgSubmissionStore {
    #[tracing::instrument(name = "Saving contact message in the database", skip_all)]
    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, name, email, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&submission.name)
        .bind(submission.email.as_ref())
        .bind(submission.subject.as_deref())
        .bind(&submission.message)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(())
    }

    #[tracing::instrument(name = "Looking up an active subscriber", skip_all)]
    async fn active_subscriber_exists(&self, email: &EmailAddress) -> Result<bool, StoreError> {
        let existing: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT id FROM subscribers
            WHERE email = $1 AND active
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(existing.is_some())
    }

    #[tracing::instrument(
        name = "Saving new subscriber in the database",
        skip_all,
        fields(subscriber_id = %subscriber.id)
    )]
    async fn insert_subscriber(&self, subscriber: &NewSubscriber) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO subscribers (id, email, name, source)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(subscriber.id)
        .bind(subscriber.email.as_ref())
        .bind(subscriber.name.as_deref())
        .bind(subscriber.source.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:?}", e);
            e
        })?;
        Ok(())
    }
}
