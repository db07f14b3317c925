//! Error types for port operations.

use tuxlevel_domain::DomainError;

/// Virtual filesystem errors, always carrying the offending path.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    #[error("file not found: {0}")]
    NotFound(String),

    /// Path escapes the search roots or is otherwise unusable.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FileSystemError {
    pub fn not_found(path: impl ToString) -> Self {
        Self::NotFound(path.to_string())
    }

    pub fn invalid_path(path: impl ToString) -> Self {
        Self::InvalidPath(path.to_string())
    }

    pub fn io(path: impl ToString, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors raised while building a single sector.
#[derive(Debug, thiserror::Error)]
pub enum SectorError {
    #[error("sector '{sector}': {message}")]
    Invalid { sector: String, message: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SectorError {
    pub fn invalid(sector: impl ToString, message: impl ToString) -> Self {
        Self::Invalid {
            sector: sector.to_string(),
            message: message.to_string(),
        }
    }
}
