//! Level aggregate - a named collection of sectors plus shared metadata
//!
//! The level owns its sectors exclusively. Sectors are only ever appended
//! while a level is assembled; statistics are derived from them afterwards.

use super::sector::Sector;
use crate::error::DomainError;
use crate::value_objects::Statistics;

/// Tileset used by ordinary levels.
pub const DEFAULT_TILESET: &str = "images/tiles.strf";

/// Tileset used by worldmaps.
pub const WORLDMAP_TILESET: &str = "images/worldmap.strf";

/// File extension of worldmap documents.
pub const WORLDMAP_EXTENSION: &str = ".stwm";

/// A loaded or freshly created level.
///
/// # Invariants
///
/// - After a successful load or create, `filename` is non-empty and there is
///   at least one sector. The only exception is a document with an
///   unsupported format version, which yields a level without sectors.
/// - `sectors` keeps document order.
///
/// # Example
///
/// ```
/// use tuxlevel_domain::{Level, Sector, SectorName};
///
/// let mut level = Level::new();
/// level.set_filename("level1.stl");
/// level.add_sector(Sector::new(SectorName::main()));
/// level.init_stats();
///
/// assert_eq!(level.sector_count(), 1);
/// assert!(!level.is_worldmap());
/// ```
#[derive(Debug, Clone)]
pub struct Level {
    filename: String,

    // Metadata
    name: String,
    author: String,
    contact: String,
    license: String,
    tileset: String,
    target_time: f32,

    sectors: Vec<Sector>,
    stats: Statistics,
}

impl Level {
    // =========================================================================
    // Constructor
    // =========================================================================

    pub fn new() -> Self {
        Self {
            filename: String::new(),
            name: String::new(),
            author: String::new(),
            contact: String::new(),
            license: String::new(),
            tileset: DEFAULT_TILESET.to_string(),
            target_time: 0.0,
            sectors: Vec::new(),
            stats: Statistics::default(),
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Path the level was loaded from or will be saved to.
    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[inline]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    #[inline]
    pub fn license(&self) -> &str {
        &self.license
    }

    #[inline]
    pub fn tileset(&self) -> &str {
        &self.tileset
    }

    /// Target completion time in seconds; `0.0` means none was set.
    #[inline]
    pub fn target_time(&self) -> f32 {
        self.target_time
    }

    #[inline]
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    // =========================================================================
    // Sector Accessors
    // =========================================================================

    #[inline]
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    #[inline]
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn sector_names(&self) -> Vec<&str> {
        self.sectors.iter().map(|s| s.name().as_str()).collect()
    }

    pub fn sector_by_name(&self, name: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.name().as_str() == name)
    }

    /// Like [`Level::sector_by_name`], but a missing sector is an error.
    pub fn sector(&self, name: &str) -> Result<&Sector, DomainError> {
        self.sector_by_name(name)
            .ok_or_else(|| DomainError::not_found("Sector", name))
    }

    pub fn is_worldmap(&self) -> bool {
        self.tileset == WORLDMAP_TILESET || self.filename.ends_with(WORLDMAP_EXTENSION)
    }

    // =========================================================================
    // Mutations (used while a level is assembled)
    // =========================================================================

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    pub fn set_contact(&mut self, contact: impl Into<String>) {
        self.contact = contact.into();
    }

    pub fn set_license(&mut self, license: impl Into<String>) {
        self.license = license.into();
    }

    pub fn set_tileset(&mut self, tileset: impl Into<String>) {
        self.tileset = tileset.into();
    }

    pub fn set_target_time(&mut self, seconds: f32) {
        self.target_time = seconds;
    }

    /// Append a sector; sectors are never removed.
    pub fn add_sector(&mut self, sector: Sector) {
        self.sectors.push(sector);
    }

    /// Recompute statistics from the current sectors.
    pub fn init_stats(&mut self) {
        self.stats.init(&self.sectors);
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}
