//! Port traits for the collaborators a level load depends on.

use tuxlevel_domain::{Level, Sector};

use super::error::{FileSystemError, SectorError};
use super::types::Diagnostic;
use crate::infrastructure::reader::ReaderMapping;

// =============================================================================
// Virtual Filesystem
// =============================================================================

/// Read-only virtual filesystem. Paths are `/`-separated and relative to the
/// configured search roots.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystemPort: Send + Sync {
    fn exists(&self, path: &str) -> bool;
    fn read(&self, path: &str) -> Result<Vec<u8>, FileSystemError>;

    /// Entry names of a directory, merged across roots, sorted.
    fn list(&self, dir: &str) -> Result<Vec<String>, FileSystemError>;
}

// =============================================================================
// Translations
// =============================================================================

/// Registers the translation catalog that sits next to a level file.
///
/// Best effort: implementations swallow their own failures.
#[cfg_attr(test, mockall::automock)]
pub trait TranslationPort: Send + Sync {
    fn register_translation_directory(&self, path: &str);
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Sink for loader diagnostics. Tests use `RecordingDiagnostics`.
pub trait DiagnosticsPort: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

// =============================================================================
// Sector Construction
// =============================================================================

/// Builds sectors for a level under construction.
///
/// `level` is the partially populated aggregate, so builders can look at
/// metadata such as the tileset.
pub trait SectorBuilderPort: Send + Sync {
    /// Current format: one `(sector ...)` entry.
    fn from_mapping(
        &self,
        level: &Level,
        mapping: &ReaderMapping<'_>,
        editable: bool,
    ) -> Result<Sector, SectorError>;

    /// Legacy format: the whole root mapping describes one sector.
    fn from_legacy_mapping(
        &self,
        level: &Level,
        mapping: &ReaderMapping<'_>,
        editable: bool,
    ) -> Result<Sector, SectorError>;

    /// Default content for a brand-new level.
    fn from_nothing(&self, level: &Level) -> Sector;
}
