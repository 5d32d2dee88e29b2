//! Population statistics for a field.

use crate::species::Species;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-species counts for one field at one step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStats {
    pub step: u64,
    /// Animal counts indexed by [`Species::index`]
    pub counts: [u32; 5],
    /// Live plants on the plant layer
    pub plants: u32,
}

impl FieldStats {
    pub fn new(step: u64) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    pub fn record(&mut self, species: Species) {
        self.counts[species.index()] += 1;
    }

    pub fn count(&self, species: Species) -> u32 {
        self.counts[species.index()]
    }

    pub fn total_animals(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Number of species with at least one live member
    pub fn species_present(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// A field stays viable while more than one species survives
    pub fn is_viable(&self) -> bool {
        self.species_present() > 1
    }
}

impl fmt::Display for FieldStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step: {}", self.step)?;
        for species in Species::ALL {
            write!(f, " {}: {}", species, self.count(species))?;
        }
        write!(f, " plants: {}", self.plants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting() {
        let mut stats = FieldStats::new(3);
        stats.record(Species::Fox);
        stats.record(Species::Fox);
        stats.record(Species::Squirrel);

        assert_eq!(stats.count(Species::Fox), 2);
        assert_eq!(stats.count(Species::Eagle), 0);
        assert_eq!(stats.total_animals(), 3);
        assert_eq!(stats.species_present(), 2);
    }

    #[test]
    fn test_viability() {
        let mut stats = FieldStats::new(0);
        assert!(!stats.is_viable());

        stats.record(Species::Eagle);
        assert!(!stats.is_viable());

        stats.record(Species::Grasshopper);
        assert!(stats.is_viable());
    }

    #[test]
    fn test_display() {
        let mut stats = FieldStats::new(12);
        stats.record(Species::Scorpion);
        stats.plants = 4;
        let text = stats.to_string();
        assert!(text.starts_with("Step: 12"));
        assert!(text.contains("scorpion: 1"));
        assert!(text.ends_with("plants: 4"));
    }
}
