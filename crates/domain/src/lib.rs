extern crate self as tuxlevel_domain;

pub mod aggregates;
pub mod error;
pub mod value_objects;

pub use aggregates::{
    Level, Sector, DEFAULT_GRAVITY, DEFAULT_TILESET, WORLDMAP_EXTENSION, WORLDMAP_TILESET,
};
pub use error::DomainError;
pub use value_objects::{
    ObjectCategory, SectorName, SectorObject, Statistics, StatisticsStatus, MAIN_SECTOR_NAME,
};
