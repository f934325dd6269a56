use thiserror::Error;

/// Non-fatal storage failures, surfaced to the user as transient notices.
/// Neither kind aborts the operation that triggered it: a failed load is
/// recovered with sample data, a failed save leaves the in-memory
/// collection authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Stored data was present but could not be decoded
    #[error("Could not load saved tasks ({detail}). Using sample data.")]
    Read { detail: String },
    /// Persisting the collection failed
    #[error("Could not save tasks ({detail}).")]
    Write { detail: String },
}

impl StorageError {
    pub fn read(detail: impl std::fmt::Display) -> Self {
        StorageError::Read {
            detail: detail.to_string(),
        }
    }

    pub fn write(detail: impl std::fmt::Display) -> Self {
        StorageError::Write {
            detail: detail.to_string(),
        }
    }

    /// Short title for notice rendering
    pub fn title(&self) -> &'static str {
        "Storage Error"
    }

    /// Machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::Read { .. } => "read",
            StorageError::Write { .. } => "write",
        }
    }
}
