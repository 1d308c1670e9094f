use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
};

/// One waitlist signup. Rows are insert-only; `id` and `created_at` are
/// assigned by the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WaitlistEntry {
    pub id: i32,
    pub email: String,
    pub site: String,
    pub created_at: NaiveDateTime,
}

/// Outcome of an insert against the unique (email, site) pair. A duplicate is
/// not an error; the database constraint resolves concurrent duplicates to
/// exactly one `Inserted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(i32),
    AlreadyExisted,
}

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn insert_entry(&self, email: &str, site: &str) -> AppResult<InsertOutcome>;
    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>>;
    async fn list_by_site(&self, site: &str) -> AppResult<Vec<WaitlistEntry>>;
    async fn server_time(&self) -> AppResult<DateTime<Utc>>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn add_entry(&self, email: &str, site: &str) -> AppResult<InsertOutcome> {
        if email.is_empty() || site.is_empty() {
            return Err(AppError::MissingField);
        }
        if !is_valid_email(email) {
            return Err(AppError::InvalidEmailFormat);
        }

        self.repo.insert_entry(email, site).await
    }

    /// Entries for one site, or across all sites when `site` is `None`.
    /// Always newest first.
    pub async fn list_entries(&self, site: Option<&str>) -> AppResult<Vec<WaitlistEntry>> {
        match site {
            Some(site) => self.repo.list_by_site(site).await,
            None => self.repo.list_all().await,
        }
    }

    pub async fn export_csv(&self, site: Option<&str>) -> AppResult<String> {
        let entries = self.list_entries(site).await?;
        Ok(to_csv(&entries))
    }

    /// Database server clock, used by the health check.
    pub async fn db_time(&self) -> AppResult<DateTime<Utc>> {
        self.repo.server_time().await
    }
}

/// Fixed header plus one comma-joined line per entry. Field values pass
/// through verbatim; embedded commas or quotes are not escaped.
pub fn to_csv(entries: &[WaitlistEntry]) -> String {
    let mut out = String::from("id,email,site,created_at\n");
    let rows: Vec<String> = entries
        .iter()
        .map(|e| format!("{},{},{},{}", e.id, e.email, e.site, e.created_at))
        .collect();
    out.push_str(&rows.join("\n"));
    out
}
