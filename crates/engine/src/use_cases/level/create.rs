//! Create level use case.
//!
//! Picks the first free file name in a directory and fills a new level with
//! default metadata. Directory probing goes through the filesystem port; the
//! returned filename is relative to that directory.

use std::sync::Arc;

use tuxlevel_domain::{Level, WORLDMAP_EXTENSION};

use super::parser::LevelParser;
use super::LevelDefaults;
use crate::infrastructure::ports::{DiagnosticsPort, FileSystemPort, SectorBuilderPort};

const LEVEL_EXTENSION: &str = ".stl";

pub struct CreateLevel {
    filesystem: Arc<dyn FileSystemPort>,
    sectors: Arc<dyn SectorBuilderPort>,
    diagnostics: Arc<dyn DiagnosticsPort>,
    defaults: LevelDefaults,
}

impl CreateLevel {
    pub fn new(
        filesystem: Arc<dyn FileSystemPort>,
        sectors: Arc<dyn SectorBuilderPort>,
        diagnostics: Arc<dyn DiagnosticsPort>,
        defaults: LevelDefaults,
    ) -> Self {
        Self {
            filesystem,
            sectors,
            diagnostics,
            defaults,
        }
    }

    /// New level `levelN.stl` named "Level N", with N the first free number
    /// starting at 1.
    pub fn level(&self, basedir: &str) -> Level {
        let num = self.first_free(basedir, "level", LEVEL_EXTENSION);
        self.build(
            &format!("level{num}{LEVEL_EXTENSION}"),
            &format!("Level {num}"),
            false,
        )
    }

    /// New worldmap. Prefers `worldmap.stwm`, then `worldmapN.stwm`.
    pub fn worldmap(&self, basedir: &str, name: &str) -> Level {
        let unnumbered = format!("worldmap{WORLDMAP_EXTENSION}");
        let filename = if self.filesystem.exists(&format!("{basedir}/{unnumbered}")) {
            let num = self.first_free(basedir, "worldmap", WORLDMAP_EXTENSION);
            format!("worldmap{num}{WORLDMAP_EXTENSION}")
        } else {
            unnumbered
        };
        self.build(&filename, name, true)
    }

    /// Smallest N >= 1 such that `<basedir>/<stem>N<extension>` does not
    /// exist. Unbounded: keeps counting until the filesystem says no.
    fn first_free(&self, basedir: &str, stem: &str, extension: &str) -> u32 {
        let mut num = 1;
        while self
            .filesystem
            .exists(&format!("{basedir}/{stem}{num}{extension}"))
        {
            num += 1;
        }
        num
    }

    fn build(&self, filename: &str, name: &str, worldmap: bool) -> Level {
        let mut level = Level::new();
        LevelParser::new(&mut level, false, &*self.sectors, &*self.diagnostics).create(
            filename,
            name,
            worldmap,
            &self.defaults,
        );
        tracing::info!(filename, name, worldmap, "Created level");
        level
    }
}
