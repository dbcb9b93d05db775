//! Repository trait definition (Port)
//!
//! This trait defines the storage interface for exercise records.
//! Implementations can be PostgreSQL or in-memory for testing.

use crate::error::StoreError;
use async_trait::async_trait;
use reptrack_domain::{Exercise, ExerciseFields, ExerciseFilter};

/// Repository for Exercise entities.
///
/// Ids are passed as raw text: the store owns id syntax, so an id that
/// is not syntactically valid for the store behaves exactly like one
/// that matches no record (`None` from lookups, count 0 from mutations)
/// rather than erroring.
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Persist one new record with a freshly assigned id.
    ///
    /// Returns the persisted record, id included.
    async fn create(&self, fields: &ExerciseFields) -> Result<Exercise, StoreError>;

    /// Find all records matching the filter, capped at `limit` when
    /// `limit > 0`.
    ///
    /// Returns an empty vec when nothing matches.
    async fn find(&self, filter: &ExerciseFilter, limit: i64) -> Result<Vec<Exercise>, StoreError>;

    /// Find the record with the given id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Exercise>, StoreError>;

    /// Overwrite all non-id fields of the record with the given id.
    ///
    /// Returns the count of records modified (0 or 1 under normal
    /// operation).
    async fn replace(&self, id: &str, fields: &ExerciseFields) -> Result<u64, StoreError>;

    /// Remove the record with the given id.
    ///
    /// Returns the count removed (0 or 1).
    async fn delete_by_id(&self, id: &str) -> Result<u64, StoreError>;
}
