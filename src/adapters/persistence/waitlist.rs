use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::AppResult,
    use_cases::waitlist::{InsertOutcome, WaitlistEntry, WaitlistRepo},
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert_entry(&self, email: &str, site: &str) -> AppResult<InsertOutcome> {
        // The (email, site) unique constraint arbitrates concurrent duplicates;
        // a conflicting insert returns no row instead of erroring.
        let inserted: Option<(i32,)> = sqlx::query_as(
            r#"INSERT INTO waitlist (email, site)
               VALUES ($1, $2)
               ON CONFLICT (email, site) DO NOTHING
               RETURNING id"#,
        )
        .bind(email)
        .bind(site)
        .fetch_optional(&self.pool)
        .await?;

        Ok(match inserted {
            Some((id,)) => InsertOutcome::Inserted(id),
            None => InsertOutcome::AlreadyExisted,
        })
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        let recs = sqlx::query_as::<_, WaitlistEntry>(
            r#"SELECT id, email, site, created_at
               FROM waitlist
               ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(recs)
    }

    async fn list_by_site(&self, site: &str) -> AppResult<Vec<WaitlistEntry>> {
        let recs = sqlx::query_as::<_, WaitlistEntry>(
            r#"SELECT id, email, site, created_at
               FROM waitlist
               WHERE site = $1
               ORDER BY created_at DESC"#,
        )
        .bind(site)
        .fetch_all(&self.pool)
        .await?;

        Ok(recs)
    }

    async fn server_time(&self) -> AppResult<DateTime<Utc>> {
        let (now,): (DateTime<Utc>,) = sqlx::query_as(r#"SELECT NOW()"#)
            .fetch_one(&self.pool)
            .await?;

        Ok(now)
    }
}
