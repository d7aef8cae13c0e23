use thiserror::Error;

/// Failure reported by a [`crate::storage::KeyValueStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum A11yError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stored preferences are not a JSON object")]
    NotAnObject,
}
