use chrono::{DateTime, Utc};
use squadup_structs::Structured;

/// Lifecycle timestamps shared by every persisted row.
#[derive(Structured, Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMetadata {
    /// Time the row was created.
    pub created_at: DateTime<Utc>,
    /// Last time the row was updated.
    pub updated_at: DateTime<Utc>,
    /// Set once the row is soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TableMetadata {
    /// Metadata for a row created at `now`.
    #[must_use]
    pub const fn created(now: DateTime<Utc>) -> Self {
        Self { created_at: now, updated_at: now, deleted_at: None }
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
