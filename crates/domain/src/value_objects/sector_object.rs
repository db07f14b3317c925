//! Game objects placed in a sector.
//!
//! The loader does not interpret object contents; it only records what kind of
//! object was placed and its optional name, which is enough for statistics and
//! for listing tools.

use serde::{Deserialize, Serialize};

/// Object kinds that count as collectible coins.
const COIN_KINDS: &[&str] = &["coin", "heavycoin"];

/// Object kinds that count as hidden secrets.
const SECRET_KINDS: &[&str] = &["secretarea"];

/// Object kinds that count as enemies.
const BADGUY_KINDS: &[&str] = &[
    "bouncingsnowball",
    "captainsnowball",
    "crystallo",
    "dart",
    "dispenser",
    "fish",
    "flame",
    "flyingsnowball",
    "ghoul",
    "goldbomb",
    "haywire",
    "iceflame",
    "igel",
    "jumpy",
    "kamikazesnowball",
    "kugelblitz",
    "mole",
    "mrbomb",
    "mriceblock",
    "mrtree",
    "owl",
    "plant",
    "poisonivy",
    "skullyhop",
    "smartball",
    "smartblock",
    "snail",
    "snowball",
    "snowman",
    "spidermite",
    "spiky",
    "sspiky",
    "stalactite",
    "stumpy",
    "toad",
    "totem",
    "walkingleaf",
    "willowisp",
    "yeti",
    "zeekling",
];

/// Object kinds that only exist for the level editor.
const EDITOR_ONLY_KINDS: &[&str] = &["path-marker", "editor-comment"];

/// How an object contributes to level statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    Coin,
    BadGuy,
    Secret,
    Other,
}

/// A single object placed in a sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorObject {
    kind: String,
    name: Option<String>,
}

impl SectorObject {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The document key the object was declared with (e.g. `"snowball"`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> ObjectCategory {
        let kind = self.kind.as_str();
        if COIN_KINDS.contains(&kind) {
            ObjectCategory::Coin
        } else if SECRET_KINDS.contains(&kind) {
            ObjectCategory::Secret
        } else if BADGUY_KINDS.contains(&kind) {
            ObjectCategory::BadGuy
        } else {
            ObjectCategory::Other
        }
    }

    /// True for objects that are only kept when a level is opened for editing.
    pub fn is_editor_only(&self) -> bool {
        EDITOR_ONLY_KINDS.contains(&self.kind.as_str())
    }
}
