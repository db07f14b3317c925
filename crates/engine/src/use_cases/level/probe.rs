//! Level name probe.
//!
//! Reads just enough of a level file to report its display name. Used when
//! listing many levels, where one corrupt file must not abort the listing.

use std::sync::Arc;

use super::{LevelError, LEVEL_ROOT};
use crate::infrastructure::ports::{
    Diagnostic, DiagnosticsPort, FileSystemPort, TranslationPort,
};
use crate::infrastructure::reader::ReaderDocument;

pub struct ProbeLevelName {
    filesystem: Arc<dyn FileSystemPort>,
    translations: Arc<dyn TranslationPort>,
    diagnostics: Arc<dyn DiagnosticsPort>,
}

impl ProbeLevelName {
    pub fn new(
        filesystem: Arc<dyn FileSystemPort>,
        translations: Arc<dyn TranslationPort>,
        diagnostics: Arc<dyn DiagnosticsPort>,
    ) -> Self {
        Self {
            filesystem,
            translations,
            diagnostics,
        }
    }

    /// The level's `name`, or an empty string if the file is unreadable, is
    /// not a level, or has no name. Never fails.
    pub fn execute(&self, path: &str) -> String {
        match self.try_name(path) {
            Ok(name) => name,
            Err(e) => {
                self.diagnostics.emit(Diagnostic::ProbeFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                });
                String::new()
            }
        }
    }

    fn try_name(&self, path: &str) -> Result<String, LevelError> {
        self.translations.register_translation_directory(path);
        let bytes = self.filesystem.read(path)?;
        let doc = ReaderDocument::from_stream(bytes.as_slice(), path)?;

        let root = doc.get_root();
        if root.name() != LEVEL_ROOT {
            return Ok(String::new());
        }
        Ok(root.mapping().get::<String>("name").unwrap_or_default())
    }
}
