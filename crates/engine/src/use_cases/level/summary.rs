//! Serializable level overview, printed by the `load` command.

use serde::Serialize;
use tuxlevel_domain::{Level, Statistics};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    pub filename: String,
    pub name: String,
    pub author: String,
    pub contact: String,
    pub license: String,
    pub tileset: String,
    pub target_time: f32,
    pub worldmap: bool,
    pub sectors: Vec<String>,
    pub stats: Statistics,
}

impl From<&Level> for LevelSummary {
    fn from(level: &Level) -> Self {
        Self {
            filename: level.filename().to_string(),
            name: level.name().to_string(),
            author: level.author().to_string(),
            contact: level.contact().to_string(),
            license: level.license().to_string(),
            tileset: level.tileset().to_string(),
            target_time: level.target_time(),
            worldmap: level.is_worldmap(),
            sectors: level.sector_names().into_iter().map(String::from).collect(),
            stats: *level.stats(),
        }
    }
}
