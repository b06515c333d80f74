/// Errors from state loading and persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O failure reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be parsed (or serialized).
    #[error("malformed state document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
