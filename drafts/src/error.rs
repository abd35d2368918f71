//! Error taxonomy for draft persistence.
//!
//! None of these reach the user. The store folds them into
//! [`LoadOutcome`](crate::store::LoadOutcome) and
//! [`SaveOutcome`](crate::store::SaveOutcome) after logging.

/// Failure reported by a [`DraftStorage`](crate::storage::DraftStorage) backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend is missing or disabled (private mode, SSR, blocked cookies).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A write would exceed the backend's quota.
    #[error("storage quota exceeded writing {bytes} bytes to {key}")]
    QuotaExceeded { key: String, bytes: usize },
    /// Any other backend-level failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure while loading, validating, or describing a draft.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Stored payload is not JSON.
    #[error("corrupt draft record: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// Stored payload is JSON but not a draft object.
    #[error("corrupt draft record: {0}")]
    CorruptShape(String),
    /// Stored draft has no usable `lastModified`.
    #[error("draft record has no save timestamp")]
    MissingTimestamp,
    /// Stored draft is older than the expiry threshold.
    #[error("draft record expired ({age_ms} ms old)")]
    Expired { age_ms: i64 },
    /// A form schema was declared with an unusable field set.
    #[error("invalid form schema: {0}")]
    InvalidSchema(String),
    /// A field binding names a field the schema does not persist.
    #[error("field `{field}` is not part of form `{form}`")]
    UnknownField { form: String, field: String },
}
