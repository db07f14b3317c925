//! Versioned level document loading.
//!
//! `LevelParser` is bound to one level aggregate and one editability flag for
//! the duration of a single load or create call. It dispatches on the
//! document's `version` field:
//!
//! - version 1 (or no version): flat legacy layout, exactly one sector
//! - version 2: metadata fields plus any number of `(sector ...)` entries
//! - anything else: a warning and no sectors at all

use tuxlevel_domain::{Level, SectorName};

use super::{LevelDefaults, LevelError, LEVEL_ROOT};
use crate::infrastructure::ports::{
    Diagnostic, DiagnosticsPort, FileSystemPort, SectorBuilderPort, TranslationPort,
};
use crate::infrastructure::reader::{FromValue, ReaderDocument, ReaderMapping};

const SECTOR_KEY: &str = "sector";

/// Schema versions this loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    Legacy,
    Current,
}

impl SchemaVersion {
    /// Version assumed when a document has no `version` field.
    pub const DEFAULT_NUMBER: i32 = 1;

    pub fn from_number(version: i32) -> Option<Self> {
        match version {
            1 => Some(Self::Legacy),
            2 => Some(Self::Current),
            _ => None,
        }
    }

    pub fn number(self) -> i32 {
        match self {
            Self::Legacy => 1,
            Self::Current => 2,
        }
    }
}

/// Hand the value under `key` to `apply` if it is present and well-typed.
///
/// Returns whether `apply` ran. Absent or mistyped fields leave the target
/// untouched.
pub fn apply_optional<T: FromValue>(
    mapping: &ReaderMapping<'_>,
    key: &str,
    apply: impl FnOnce(T),
) -> bool {
    match mapping.get::<T>(key) {
        Some(value) => {
            apply(value);
            true
        }
        None => false,
    }
}

pub struct LevelParser<'a> {
    level: &'a mut Level,
    editable: bool,
    sectors: &'a dyn SectorBuilderPort,
    diagnostics: &'a dyn DiagnosticsPort,
}

impl<'a> LevelParser<'a> {
    pub fn new(
        level: &'a mut Level,
        editable: bool,
        sectors: &'a dyn SectorBuilderPort,
        diagnostics: &'a dyn DiagnosticsPort,
    ) -> Self {
        Self {
            level,
            editable,
            sectors,
            diagnostics,
        }
    }

    /// Load a level by virtual path.
    ///
    /// The filename is recorded before anything is read, so it is set even
    /// when loading fails. Every failure comes back as `LevelError::Read`.
    pub fn load_file(
        &mut self,
        path: &str,
        filesystem: &dyn FileSystemPort,
        translations: &dyn TranslationPort,
    ) -> Result<(), LevelError> {
        self.level.set_filename(path);
        translations.register_translation_directory(path);

        self.read_and_load(path, filesystem)
            .map_err(|e| LevelError::read(path, e))
    }

    fn read_and_load(&mut self, path: &str, filesystem: &dyn FileSystemPort) -> Result<(), LevelError> {
        let bytes = filesystem.read(path)?;
        let doc = ReaderDocument::from_stream(bytes.as_slice(), path)?;
        self.load_document(&doc)
    }

    /// Populate the level from a parsed document.
    pub fn load_document(&mut self, doc: &ReaderDocument) -> Result<(), LevelError> {
        let root = doc.get_root();
        if root.name() != LEVEL_ROOT {
            return Err(LevelError::format(doc.context()));
        }

        let mapping = root.mapping();
        let version = mapping
            .get::<i32>("version")
            .unwrap_or(SchemaVersion::DEFAULT_NUMBER);

        match SchemaVersion::from_number(version) {
            Some(SchemaVersion::Legacy) => {
                self.diagnostics.emit(Diagnostic::LegacyFormat {
                    context: doc.context().to_string(),
                });
                self.load_old_format(&mapping)?;
            }
            Some(SchemaVersion::Current) => self.load_current_format(&mapping)?,
            None => {
                self.diagnostics.emit(Diagnostic::UnsupportedVersion {
                    context: doc.context().to_string(),
                    version,
                });
            }
        }

        self.level.init_stats();
        Ok(())
    }

    fn load_old_format(&mut self, mapping: &ReaderMapping<'_>) -> Result<(), LevelError> {
        apply_optional(mapping, "name", |name: String| self.level.set_name(name));
        apply_optional(mapping, "author", |author: String| self.level.set_author(author));

        let sector = self
            .sectors
            .from_legacy_mapping(self.level, mapping, self.editable)?;
        self.level.add_sector(sector);
        Ok(())
    }

    fn load_current_format(&mut self, mapping: &ReaderMapping<'_>) -> Result<(), LevelError> {
        let level = &mut *self.level;
        apply_optional(mapping, "tileset", |v: String| level.set_tileset(v));
        apply_optional(mapping, "name", |v: String| level.set_name(v));
        apply_optional(mapping, "author", |v: String| level.set_author(v));
        apply_optional(mapping, "contact", |v: String| level.set_contact(v));
        apply_optional(mapping, "license", |v: String| level.set_license(v));
        apply_optional(mapping, "target-time", |v: f32| level.set_target_time(v));

        for node in mapping.iter().filter(|node| node.name() == SECTOR_KEY) {
            let sector = self
                .sectors
                .from_mapping(self.level, &node.mapping(), self.editable)?;
            self.level.add_sector(sector);
        }

        if self.level.license().is_empty() {
            self.diagnostics.emit(Diagnostic::MissingLicense {
                context: mapping.context().to_string(),
                author: self.level.author().to_string(),
                level_name: self.level.name().to_string(),
            });
        }
        Ok(())
    }

    /// Fill a fresh level with default metadata and one default sector.
    pub fn create(&mut self, filename: &str, name: &str, worldmap: bool, defaults: &LevelDefaults) {
        self.level.set_filename(filename);
        self.level.set_name(name);
        self.level.set_license(defaults.license.clone());
        self.level.set_tileset(defaults.tileset(worldmap));

        let mut sector = self.sectors.from_nothing(self.level);
        sector.set_name(SectorName::main());
        self.level.add_sector(sector);

        self.level.init_stats();
    }
}
