//! Storage error types.

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when talking to storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The entity to update or delete does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },
}
