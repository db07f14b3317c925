//! Value objects - immutable, self-validating pieces of level data

mod names;
mod sector_object;
mod statistics;

pub use names::{SectorName, MAIN_SECTOR_NAME};
pub use sector_object::{ObjectCategory, SectorObject};
pub use statistics::{Statistics, StatisticsStatus};
