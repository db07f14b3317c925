//! Helper types for port operations.

use std::fmt;

// =============================================================================
// Diagnostics
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Non-fatal events raised while loading levels.
///
/// These never abort a load; they are handed to a `DiagnosticsPort` and the
/// load carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The document has no `version` field, or `version 1`.
    LegacyFormat { context: String },

    /// A current-format level without a license.
    MissingLicense {
        context: String,
        author: String,
        level_name: String,
    },

    /// A `version` other than 1 or 2. The level ends up with no sectors.
    UnsupportedVersion { context: String, version: i32 },

    /// A name probe swallowed an error.
    ProbeFailed { path: String, message: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::LegacyFormat { .. } => Severity::Info,
            Self::MissingLicense { .. }
            | Self::UnsupportedVersion { .. }
            | Self::ProbeFailed { .. } => Severity::Warning,
        }
    }

    /// Short machine-readable tag, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LegacyFormat { .. } => "legacy_format",
            Self::MissingLicense { .. } => "missing_license",
            Self::UnsupportedVersion { .. } => "unsupported_version",
            Self::ProbeFailed { .. } => "probe_failed",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LegacyFormat { context } => {
                write!(f, "[{context}] level uses old format: version 1")
            }
            Self::MissingLicense {
                context,
                author,
                level_name,
            } => write!(
                f,
                "[{context}] The level author \"{author}\" did not specify a license for this level \"{level_name}\". You might not be allowed to share it."
            ),
            Self::UnsupportedVersion { context, version } => {
                write!(f, "[{context}] level format version {version} is not supported")
            }
            Self::ProbeFailed { path, message } => {
                write!(f, "Problem getting name of '{path}': {message}")
            }
        }
    }
}
