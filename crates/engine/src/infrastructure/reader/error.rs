//! Errors raised while reading a document.

use super::lexer::Position;

/// Document reading errors, always tagged with the document context
/// (usually the file path) so messages are actionable on their own.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The byte stream could not be read.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The text is not a well-formed S-expression.
    #[error("{context}:{line}:{column}: {message}")]
    Syntax {
        context: String,
        line: u32,
        column: u32,
        message: String,
    },

    /// Well-formed, but not shaped like a document.
    #[error("{context}: {message}")]
    Structure { context: String, message: String },
}

impl ReaderError {
    pub fn io(context: impl ToString, source: std::io::Error) -> Self {
        Self::Io {
            context: context.to_string(),
            source,
        }
    }

    pub fn syntax(context: impl ToString, at: Position, message: impl ToString) -> Self {
        Self::Syntax {
            context: context.to_string(),
            line: at.line,
            column: at.column,
            message: message.to_string(),
        }
    }

    pub fn structure(context: impl ToString, message: impl ToString) -> Self {
        Self::Structure {
            context: context.to_string(),
            message: message.to_string(),
        }
    }
}
