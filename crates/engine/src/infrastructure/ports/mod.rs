//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - File access (search-path directories today, an archive tomorrow)
//! - Translation catalog registration
//! - Sector construction
//! - Diagnostics (so the loader stays independent of the logging backend)

mod error;
mod external;
pub mod types;

// =============================================================================
// Errors
// =============================================================================
pub use error::{FileSystemError, SectorError};

// =============================================================================
// Types
// =============================================================================
pub use types::{Diagnostic, Severity};

// =============================================================================
// Ports
// =============================================================================
pub use external::{DiagnosticsPort, FileSystemPort, SectorBuilderPort, TranslationPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockFileSystemPort, MockTranslationPort};
