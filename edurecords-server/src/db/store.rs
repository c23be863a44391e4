//! Record store abstraction
//!
//! Handlers and layers only see `dyn RecordStore`, so the Postgres
//! backend and the in-memory backend are interchangeable.

use async_trait::async_trait;

use crate::models::{EducationFields, EducationRecord, RecordId};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] sqlx::Error),
}

/// Occurrences of one distinct `gender` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderCount {
    pub gender: String,
    pub count: i64,
}

/// Persistent collection of education records.
///
/// Absence is reported as `None`/`false`, never as an error; `DbError`
/// is reserved for backend failures.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Store a new record, assigning its id.
    async fn insert(&self, fields: EducationFields) -> Result<EducationRecord, DbError>;

    /// Every record, in storage order.
    async fn find_all(&self) -> Result<Vec<EducationRecord>, DbError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<EducationRecord>, DbError>;

    /// Overwrite every field of an existing record. Never inserts.
    async fn replace_by_id(
        &self,
        id: RecordId,
        fields: EducationFields,
    ) -> Result<Option<EducationRecord>, DbError>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: RecordId) -> Result<bool, DbError>;

    /// Group all records by `gender` and count each group.
    async fn gender_counts(&self) -> Result<Vec<GenderCount>, DbError>;

    /// Records whose three scores are all `>= threshold`.
    async fn find_with_min_scores(&self, threshold: i32) -> Result<Vec<EducationRecord>, DbError>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<(), DbError>;
}
