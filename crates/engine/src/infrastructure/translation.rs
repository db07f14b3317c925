//! Translation dictionary registry.

use std::sync::{Arc, Mutex};

use crate::infrastructure::ports::{FileSystemError, FileSystemPort, TranslationPort};

const CATALOG_EXTENSION: &str = ".po";

/// Records every level directory that ships translation catalogs.
pub struct DictionaryRegistry {
    filesystem: Arc<dyn FileSystemPort>,
    directories: Mutex<Vec<String>>,
}

impl DictionaryRegistry {
    pub fn new(filesystem: Arc<dyn FileSystemPort>) -> Self {
        Self {
            filesystem,
            directories: Mutex::new(Vec::new()),
        }
    }

    /// Registered directories, in registration order.
    pub fn directories(&self) -> Vec<String> {
        self.directories
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn has_catalogs(&self, dir: &str) -> Result<bool, FileSystemError> {
        Ok(self
            .filesystem
            .list(dir)?
            .iter()
            .any(|entry| entry.ends_with(CATALOG_EXTENSION)))
    }
}

/// Parent directory of a virtual path; empty for top-level files.
fn parent_dir(path: &str) -> &str {
    path.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

impl TranslationPort for DictionaryRegistry {
    fn register_translation_directory(&self, path: &str) {
        let dir = parent_dir(path);
        match self.has_catalogs(dir) {
            Ok(true) => {
                let mut directories = self
                    .directories
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                if !directories.iter().any(|known| known == dir) {
                    tracing::debug!(dir, "Registered translation directory");
                    directories.push(dir.to_string());
                }
            }
            Ok(false) => {}
            Err(e) => {
                tracing::debug!(path, error = %e, "Skipping translation lookup");
            }
        }
    }
}
