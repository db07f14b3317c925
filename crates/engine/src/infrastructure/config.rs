//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};

use crate::use_cases::level::LevelDefaults;

const DEFAULT_DATA_DIR: &str = "./data";

/// Level tool configuration loaded from environment
#[derive(Debug, Clone)]
pub struct LevelSettings {
    /// Read-only game data directory
    pub data_dir: PathBuf,
    /// Writable user directory, searched before the data directory
    pub user_dir: Option<PathBuf>,
    /// Metadata given to newly created levels
    pub defaults: LevelDefaults,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            user_dir: None,
            defaults: LevelDefaults::default(),
        }
    }
}

impl LevelSettings {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("{key} is not valid unicode")),
        })
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let var = |key: &str| -> Result<Option<String>> {
            match lookup(key)? {
                Some(value) => {
                    let value = value.trim().to_string();
                    ensure!(!value.is_empty(), "{key} must not be empty when set");
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        };

        let fallback = LevelDefaults::default();
        Ok(Self {
            data_dir: var("TUXLEVEL_DATA_DIR")?
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            user_dir: var("TUXLEVEL_USER_DIR")?.map(PathBuf::from),
            defaults: LevelDefaults {
                license: var("TUXLEVEL_DEFAULT_LICENSE")?.unwrap_or(fallback.license),
                level_tileset: var("TUXLEVEL_LEVEL_TILESET")?.unwrap_or(fallback.level_tileset),
                worldmap_tileset: var("TUXLEVEL_WORLDMAP_TILESET")?
                    .unwrap_or(fallback.worldmap_tileset),
            },
        })
    }

    /// Filesystem search roots, highest priority first.
    pub fn search_roots(&self) -> Vec<PathBuf> {
        self.user_dir
            .iter()
            .cloned()
            .chain(std::iter::once(self.data_dir.clone()))
            .collect()
    }
}
