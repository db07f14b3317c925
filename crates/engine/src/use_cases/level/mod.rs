//! Level use cases.
//!
//! Loading (from a stream or a virtual path), name probing for level
//! listings, and creation of brand-new levels and worldmaps.

mod create;
mod load;
mod parser;
mod probe;
mod summary;

pub use create::CreateLevel;
pub use load::LoadLevel;
pub use parser::{apply_optional, LevelParser, SchemaVersion};
pub use probe::ProbeLevelName;
pub use summary::LevelSummary;

use std::sync::Arc;

use tuxlevel_domain::{DEFAULT_TILESET, WORLDMAP_TILESET};

use crate::infrastructure::ports::{FileSystemError, SectorError};
use crate::infrastructure::reader::ReaderError;

/// Root name of every level document.
pub const LEVEL_ROOT: &str = "supertux-level";

/// License given to levels created from scratch.
pub const DEFAULT_LICENSE: &str = "CC-BY-SA 4.0 International";

/// Container for level use cases.
pub struct LevelUseCases {
    pub load: Arc<LoadLevel>,
    pub probe: Arc<ProbeLevelName>,
    pub create: Arc<CreateLevel>,
}

impl LevelUseCases {
    pub fn new(load: Arc<LoadLevel>, probe: Arc<ProbeLevelName>, create: Arc<CreateLevel>) -> Self {
        Self {
            load,
            probe,
            create,
        }
    }
}

/// Metadata stamped onto newly created levels.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDefaults {
    pub license: String,
    pub level_tileset: String,
    pub worldmap_tileset: String,
}

impl LevelDefaults {
    pub fn tileset(&self, worldmap: bool) -> &str {
        if worldmap {
            &self.worldmap_tileset
        } else {
            &self.level_tileset
        }
    }
}

impl Default for LevelDefaults {
    fn default() -> Self {
        Self {
            license: DEFAULT_LICENSE.to_string(),
            level_tileset: DEFAULT_TILESET.to_string(),
            worldmap_tileset: WORLDMAP_TILESET.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// Root list is not a `supertux-level`.
    #[error("{context}: file is not a supertux-level file.")]
    Format { context: String },

    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    #[error(transparent)]
    Sector(#[from] SectorError),

    /// Anything that went wrong loading a level by path, flattened to its
    /// message.
    #[error("Problem when reading level '{path}': {message}")]
    Read { path: String, message: String },
}

impl LevelError {
    pub fn format(context: impl ToString) -> Self {
        Self::Format {
            context: context.to_string(),
        }
    }

    pub fn read(path: impl ToString, cause: impl std::fmt::Display) -> Self {
        Self::Read {
            path: path.to_string(),
            message: cause.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_wraps_the_cause_message() {
        let cause = FileSystemError::not_found("levels/missing.stl");
        let err = LevelError::read("levels/missing.stl", cause);

        assert_eq!(
            err.to_string(),
            "Problem when reading level 'levels/missing.stl': file not found: levels/missing.stl"
        );
    }

    #[test]
    fn defaults_pick_tileset_by_kind() {
        let defaults = LevelDefaults::default();
        assert_eq!(defaults.tileset(false), "images/tiles.strf");
        assert_eq!(defaults.tileset(true), "images/worldmap.strf");
        assert_eq!(defaults.license, "CC-BY-SA 4.0 International");
    }
}
