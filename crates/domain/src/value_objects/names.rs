//! Sector names.
//!
//! Sectors are addressed by name (doors and scripts jump between them), so a
//! name is trimmed and must be non-empty.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

const MAX_NAME_LENGTH: usize = 200;

/// Name given to the sector a level starts in.
pub const MAIN_SECTOR_NAME: &str = "main";

// ============================================================================
// SectorName
// ============================================================================

/// A validated sector name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectorName(String);

impl SectorName {
    /// Fails with `DomainError::Validation` when the trimmed name is empty or
    /// longer than 200 bytes.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Sector name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Sector name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The name of the sector every level starts in.
    pub fn main() -> Self {
        Self(MAIN_SECTOR_NAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SectorName {
    fn default() -> Self {
        Self::main()
    }
}

impl fmt::Display for SectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectorName {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<SectorName> for String {
    fn from(name: SectorName) -> String {
        name.0
    }
}
