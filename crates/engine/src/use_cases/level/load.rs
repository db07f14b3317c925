//! Load level use case.

use std::io::Read;
use std::sync::Arc;

use tuxlevel_domain::Level;

use super::parser::LevelParser;
use super::LevelError;
use crate::infrastructure::ports::{
    DiagnosticsPort, FileSystemPort, SectorBuilderPort, TranslationPort,
};
use crate::infrastructure::reader::ReaderDocument;

/// Load level use case.
///
/// Each call builds a fresh `Level`; nothing is shared between loads.
pub struct LoadLevel {
    filesystem: Arc<dyn FileSystemPort>,
    translations: Arc<dyn TranslationPort>,
    sectors: Arc<dyn SectorBuilderPort>,
    diagnostics: Arc<dyn DiagnosticsPort>,
}

impl LoadLevel {
    pub fn new(
        filesystem: Arc<dyn FileSystemPort>,
        translations: Arc<dyn TranslationPort>,
        sectors: Arc<dyn SectorBuilderPort>,
        diagnostics: Arc<dyn DiagnosticsPort>,
    ) -> Self {
        Self {
            filesystem,
            translations,
            sectors,
            diagnostics,
        }
    }

    /// Load from an arbitrary byte stream. `context` only labels
    /// diagnostics; the filesystem is never touched.
    pub fn from_stream<R: Read>(
        &self,
        stream: R,
        context: &str,
        editable: bool,
    ) -> Result<Level, LevelError> {
        let doc = ReaderDocument::from_stream(stream, context)?;
        let mut level = Level::new();
        LevelParser::new(&mut level, editable, &*self.sectors, &*self.diagnostics)
            .load_document(&doc)?;
        Ok(level)
    }

    /// Load from a virtual path.
    ///
    /// # Errors
    ///
    /// Always `LevelError::Read`, carrying the path and the original cause.
    pub fn from_file(&self, path: &str, editable: bool) -> Result<Level, LevelError> {
        let mut level = Level::new();
        LevelParser::new(&mut level, editable, &*self.sectors, &*self.diagnostics).load_file(
            path,
            &*self.filesystem,
            &*self.translations,
        )?;

        tracing::info!(
            path,
            name = level.name(),
            sectors = level.sector_count(),
            "Loaded level"
        );
        Ok(level)
    }
}
