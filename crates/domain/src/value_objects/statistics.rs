//! Level statistics (totals the player can collect or defeat).

use serde::{Deserialize, Serialize};

use super::sector_object::ObjectCategory;
use crate::aggregates::Sector;

/// Totals derived from the sectors of a level.
///
/// Statistics are derived data: they are never read from a document, only
/// recomputed from the sectors once a level has been fully assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    status: StatisticsStatus,
    coins: u32,
    badguys: u32,
    secrets: u32,
}

/// Whether the totals have been computed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsStatus {
    #[default]
    Invalid,
    Accumulating,
}

impl Statistics {
    /// Reset and recompute the totals from `sectors`.
    pub fn init(&mut self, sectors: &[Sector]) {
        *self = Self {
            status: StatisticsStatus::Accumulating,
            ..Self::default()
        };
        for object in sectors.iter().flat_map(|sector| sector.objects()) {
            match object.category() {
                ObjectCategory::Coin => self.coins += 1,
                ObjectCategory::BadGuy => self.badguys += 1,
                ObjectCategory::Secret => self.secrets += 1,
                ObjectCategory::Other => {}
            }
        }
    }

    pub fn status(&self) -> StatisticsStatus {
        self.status
    }

    /// True once `init` has run.
    pub fn is_initialized(&self) -> bool {
        self.status != StatisticsStatus::Invalid
    }

    #[inline]
    pub fn total_coins(&self) -> u32 {
        self.coins
    }

    #[inline]
    pub fn total_badguys(&self) -> u32 {
        self.badguys
    }

    #[inline]
    pub fn total_secrets(&self) -> u32 {
        self.secrets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{SectorName, SectorObject};

    fn sector_with(kinds: &[&str]) -> Sector {
        let mut sector = Sector::new(SectorName::main());
        for kind in kinds {
            sector.add_object(SectorObject::new(*kind));
        }
        sector
    }

    #[test]
    fn totals_span_all_sectors() {
        let sectors = vec![
            sector_with(&["coin", "coin", "snowball", "tilemap"]),
            sector_with(&["heavycoin", "secretarea", "mrbomb"]),
        ];

        let mut stats = Statistics::default();
        stats.init(&sectors);

        assert_eq!(stats.total_coins(), 3);
        assert_eq!(stats.total_badguys(), 2);
        assert_eq!(stats.total_secrets(), 1);
    }

    #[test]
    fn init_resets_previous_totals() {
        let mut stats = Statistics::default();
        stats.init(&[sector_with(&["coin", "coin"])]);
        stats.init(&[sector_with(&["coin"])]);

        assert_eq!(stats.total_coins(), 1);
    }

    #[test]
    fn no_sectors_means_zero_totals() {
        let mut stats = Statistics::default();
        assert!(!stats.is_initialized());

        stats.init(&[]);

        assert!(stats.is_initialized());
        assert_eq!(stats.status(), StatisticsStatus::Accumulating);
        assert_eq!(stats.total_coins(), 0);
        assert_eq!(stats.total_badguys(), 0);
        assert_eq!(stats.total_secrets(), 0);
    }
}
