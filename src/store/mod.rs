//! Persistence gateway for person records
//!
//! The sole point of contact with the document store. The application owns
//! an explicitly constructed store instance and hands handlers an
//! `Arc<dyn PersonStore>`; nothing reaches for process-global state.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::person::{PersonDocument, ValidationFailure};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure kinds surfaced by the persistence gateway.
///
/// A missing record is not a failure; lookups return `Option` instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The identifier cannot address a record in the underlying store.
    #[error("malformatted id")]
    InvalidId,

    /// A field constraint was violated at write time.
    #[error("{message}")]
    ValidationFailed {
        /// Name of the offending field.
        field: String,
        /// Message produced by the validator.
        message: String,
    },

    /// Any other store failure.
    #[error("{0}")]
    Unknown(String),
}

impl From<ValidationFailure> for StoreError {
    fn from(failure: ValidationFailure) -> Self {
        StoreError::ValidationFailed {
            field: failure.field.to_string(),
            message: failure.message,
        }
    }
}

/// Asynchronous CRUD operations over person records.
///
/// Write operations enforce the person field constraints; reads never
/// re-validate. Identifier-taking operations fail with
/// [`StoreError::InvalidId`] when the id is not well formed for the store.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Returns all records in store order.
    async fn list_all(&self) -> StoreResult<Vec<PersonDocument>>;

    /// Returns the record with the given id, or `None` when no record
    /// matches a well-formed identifier.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<PersonDocument>>;

    /// Validates and persists a new record, assigning a fresh unique id.
    async fn create(&self, name: &str, number: &str) -> StoreResult<PersonDocument>;

    /// Replaces `name` and `number` on the matching record, re-running
    /// validation exactly as on create. Returns `None` when the id
    /// addresses nothing.
    async fn update_by_id(
        &self,
        id: &str,
        name: &str,
        number: &str,
    ) -> StoreResult<Option<PersonDocument>>;

    /// Removes the record if present. Deleting an absent record succeeds.
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}
