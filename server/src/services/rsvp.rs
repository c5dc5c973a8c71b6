//! RSVP service: create and list submissions.
//!
//! DESIGN
//! ======
//! Storage sits behind the `SubmissionStore` trait so routes never see which
//! backend is active. `PgSubmissionStore` is used when `DATABASE_URL` is set;
//! `MemorySubmissionStore` otherwise (and in tests).
//!
//! Both stores assign `id` and `created_at` themselves. Listing is newest
//! first; records created within the same clock tick list in reverse
//! insertion order.
//!
//! ERROR HANDLING
//! ==============
//! Store failures carry their diagnostic in `StoreError`. Routes log it and
//! return only the generic message to the caller.

#[cfg(test)]
#[path = "rsvp_test.rs"]
mod rsvp_test;

use protocol::{NewSubmission, Submission};
use sqlx::PgPool;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence boundary for submissions.
#[async_trait::async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Store a new submission, assigning its identity and timestamp.
    async fn create(&self, new: NewSubmission) -> Result<Submission, StoreError>;

    /// All submissions, newest first.
    async fn list(&self) -> Result<Vec<Submission>, StoreError>;
}

// =============================================================================
// POSTGRES
// =============================================================================

type SubmissionRow = (Uuid, String, String, OffsetDateTime);

fn from_row((id, name, drawing, created_at): SubmissionRow) -> Submission {
    Submission { id, name, drawing, created_at }
}

pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn create(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            "INSERT INTO rsvps (id, name, drawing)
             VALUES ($1, $2, $3)
             RETURNING id, name, drawing, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.drawing)
        .fetch_one(&self.pool)
        .await?;

        Ok(from_row(row))
    }

    async fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            "SELECT id, name, drawing, created_at
             FROM rsvps
             ORDER BY created_at DESC, seq DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(from_row).collect())
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Vector-backed store. Rows are kept in insertion order.
pub struct MemorySubmissionStore {
    rows: RwLock<Vec<Submission>>,
    now: fn() -> OffsetDateTime,
}

impl Default for MemorySubmissionStore {
    fn default() -> Self {
        Self::with_clock(OffsetDateTime::now_utc)
    }
}

impl MemorySubmissionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `now` as the timestamp source.
    #[must_use]
    pub fn with_clock(now: fn() -> OffsetDateTime) -> Self {
        Self { rows: RwLock::new(Vec::new()), now }
    }
}

#[async_trait::async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn create(&self, new: NewSubmission) -> Result<Submission, StoreError> {
        let mut rows = self.rows.write().await;
        // Timestamps never go backwards relative to the previous insert, so
        // insertion order and timestamp order agree.
        let mut created_at = (self.now)();
        if let Some(last) = rows.last() {
            created_at = created_at.max(last.created_at);
        }
        let submission = Submission { id: Uuid::new_v4(), name: new.name, drawing: new.drawing, created_at };
        rows.push(submission.clone());
        Ok(submission)
    }

    async fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().rev().cloned().collect())
    }
}
