//! Core type definitions for the simulation.

use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an animal within one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(pub u64);

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "animal#{}", self.0)
    }
}

/// Unique identifier for a plant within one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(pub u64);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plant#{}", self.0)
    }
}

/// A cell coordinate in the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, or `None` if the result would be negative.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Animal gender, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Draw a gender uniformly (one boolean draw).
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        if rng.next_bool() {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_location_offset() {
        let loc = Location::new(0, 3);
        assert_eq!(loc.offset(1, -1), Some(Location::new(1, 2)));
        assert_eq!(loc.offset(-1, 0), None);
        assert_eq!(loc.offset(0, -4), None);
    }

    #[test]
    fn test_location_ordering_is_row_major() {
        let mut locs = vec![Location::new(1, 0), Location::new(0, 2), Location::new(0, 1)];
        locs.sort();
        assert_eq!(
            locs,
            vec![Location::new(0, 1), Location::new(0, 2), Location::new(1, 0)]
        );
    }

    #[test]
    fn test_gender_draw() {
        let mut rng = ScriptedRandom::new().with_bools([true, false]);
        assert_eq!(Gender::random(&mut rng), Gender::Male);
        assert_eq!(Gender::random(&mut rng), Gender::Female);
    }
}
