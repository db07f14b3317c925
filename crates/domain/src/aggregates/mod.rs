//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//!
//! A `Level` owns its `Sector`s; a `Sector` owns its placed objects.

pub mod level;
pub mod sector;

pub use level::{Level, DEFAULT_TILESET, WORLDMAP_EXTENSION, WORLDMAP_TILESET};
pub use sector::{Sector, DEFAULT_GRAVITY};
