//! Species identities and their parameter tables.
//!
//! All five animal species share one behaviour; they differ only in the
//! numbers below and in what they forage for.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Animal species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Eagle,
    Fox,
    Scorpion,
    Grasshopper,
    Squirrel,
}

impl Species {
    /// Seeding priority: apex predators first, herbivores last.
    pub const ALL: [Species; 5] = [
        Species::Eagle,
        Species::Fox,
        Species::Scorpion,
        Species::Grasshopper,
        Species::Squirrel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Species::Eagle => "eagle",
            Species::Fox => "fox",
            Species::Scorpion => "scorpion",
            Species::Grasshopper => "grasshopper",
            Species::Squirrel => "squirrel",
        }
    }

    /// Single-character glyph for text rendering
    pub fn glyph(&self) -> char {
        match self {
            Species::Eagle => 'E',
            Species::Fox => 'F',
            Species::Scorpion => 'S',
            Species::Grasshopper => 'g',
            Species::Squirrel => 'q',
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Species::Eagle => 0,
            Species::Fox => 1,
            Species::Scorpion => 2,
            Species::Grasshopper => 3,
            Species::Squirrel => 4,
        }
    }

    pub fn default_params(&self) -> SpeciesParams {
        match self {
            Species::Eagle => SpeciesParams {
                breeding_age: 6,
                max_age: 43,
                breeding_probability: 0.24,
                max_litter_size: 2,
                food_value: 31,
                creation_probability: 0.01,
                diet: Diet::Prey(Species::Squirrel),
            },
            Species::Fox => SpeciesParams {
                breeding_age: 15,
                max_age: 150,
                breeding_probability: 0.08,
                max_litter_size: 2,
                food_value: 9,
                creation_probability: 0.02,
                diet: Diet::Prey(Species::Squirrel),
            },
            Species::Scorpion => SpeciesParams {
                breeding_age: 4,
                max_age: 41,
                breeding_probability: 0.35,
                max_litter_size: 3,
                food_value: 12,
                creation_probability: 0.15,
                diet: Diet::Prey(Species::Grasshopper),
            },
            Species::Grasshopper => SpeciesParams {
                breeding_age: 3,
                max_age: 45,
                breeding_probability: 0.61,
                max_litter_size: 3,
                food_value: 11,
                creation_probability: 0.35,
                diet: Diet::Plants,
            },
            Species::Squirrel => SpeciesParams {
                breeding_age: 3,
                max_age: 35,
                breeding_probability: 0.51,
                max_litter_size: 3,
                food_value: 8,
                creation_probability: 0.31,
                diet: Diet::Plants,
            },
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a species forages for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    /// Another animal species, hunted on the animal layer
    Prey(Species),
    /// Plants, grazed from the plant layer
    Plants,
}

/// Per-species tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesParams {
    /// Age at which breeding becomes possible
    pub breeding_age: u32,
    /// Age beyond which the animal dies
    pub max_age: u32,
    /// Chance of a litter once a partner is found
    pub breeding_probability: f64,
    /// Largest litter, drawn uniformly from `1..=max_litter_size`
    pub max_litter_size: u32,
    /// Food level restored by one meal; also a newborn's food level
    pub food_value: u32,
    /// Chance of occupying a cell at seeding time
    pub creation_probability: f64,
    pub diet: Diet,
}

impl SpeciesParams {
    pub fn validate(&self, species: Species) -> Result<()> {
        if !(0.0..=1.0).contains(&self.breeding_probability) {
            return Err(Error::InvalidConfig(format!(
                "{species}: breeding_probability {} outside [0, 1]",
                self.breeding_probability
            )));
        }
        if !(0.0..=1.0).contains(&self.creation_probability) {
            return Err(Error::InvalidConfig(format!(
                "{species}: creation_probability {} outside [0, 1]",
                self.creation_probability
            )));
        }
        if self.max_litter_size == 0 {
            return Err(Error::InvalidConfig(format!(
                "{species}: max_litter_size must be positive"
            )));
        }
        if self.food_value == 0 || self.max_age == 0 {
            return Err(Error::InvalidConfig(format!(
                "{species}: food_value and max_age must be positive"
            )));
        }
        if i32::try_from(self.food_value).is_err() {
            return Err(Error::InvalidConfig(format!(
                "{species}: food_value {} exceeds {}",
                self.food_value,
                i32::MAX
            )));
        }
        Ok(())
    }

    /// Food level of a newborn or a freshly fed animal
    pub fn full_food_level(&self) -> i32 {
        i32::try_from(self.food_value).unwrap_or(i32::MAX)
    }
}

/// One parameter record per species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeciesTable {
    pub eagle: SpeciesParams,
    pub fox: SpeciesParams,
    pub scorpion: SpeciesParams,
    pub grasshopper: SpeciesParams,
    pub squirrel: SpeciesParams,
}

impl SpeciesTable {
    pub fn get(&self, species: Species) -> &SpeciesParams {
        match species {
            Species::Eagle => &self.eagle,
            Species::Fox => &self.fox,
            Species::Scorpion => &self.scorpion,
            Species::Grasshopper => &self.grasshopper,
            Species::Squirrel => &self.squirrel,
        }
    }

    pub fn get_mut(&mut self, species: Species) -> &mut SpeciesParams {
        match species {
            Species::Eagle => &mut self.eagle,
            Species::Fox => &mut self.fox,
            Species::Scorpion => &mut self.scorpion,
            Species::Grasshopper => &mut self.grasshopper,
            Species::Squirrel => &mut self.squirrel,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for species in Species::ALL {
            self.get(species).validate(species)?;
        }
        Ok(())
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self {
            eagle: Species::Eagle.default_params(),
            fox: Species::Fox.default_params(),
            scorpion: Species::Scorpion.default_params(),
            grasshopper: Species::Grasshopper.default_params(),
            squirrel: Species::Squirrel.default_params(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_values() {
        let table = SpeciesTable::default();
        assert_eq!(table.get(Species::Eagle).food_value, 31);
        assert_eq!(table.get(Species::Scorpion).max_litter_size, 3);
        assert_eq!(table.get(Species::Grasshopper).breeding_probability, 0.61);
        assert_eq!(table.get(Species::Squirrel).max_age, 35);
        assert_eq!(table.get(Species::Eagle).diet, Diet::Prey(Species::Squirrel));
        assert_eq!(table.get(Species::Squirrel).diet, Diet::Plants);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_seeding_priority_order() {
        assert_eq!(Species::ALL[0], Species::Eagle);
        assert_eq!(Species::ALL[4], Species::Squirrel);
        for (i, species) in Species::ALL.iter().enumerate() {
            assert_eq!(species.index(), i);
        }
    }

    #[test]
    fn test_validation_rejects_bad_probability() {
        let mut table = SpeciesTable::default();
        table.get_mut(Species::Fox).breeding_probability = 1.5;
        assert!(matches!(table.validate(), Err(Error::InvalidConfig(_))));

        let mut table = SpeciesTable::default();
        table.get_mut(Species::Eagle).max_litter_size = 0;
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_food_value_must_fit_food_level() {
        let mut table = SpeciesTable::default();
        table.get_mut(Species::Eagle).food_value = u32::MAX;
        assert!(matches!(table.validate(), Err(Error::InvalidConfig(_))));

        table.get_mut(Species::Eagle).food_value = i32::MAX as u32;
        assert!(table.validate().is_ok());
        assert_eq!(table.get(Species::Eagle).full_food_level(), i32::MAX);
        assert_eq!(table.get(Species::Fox).full_food_level(), 9);
    }

    #[test]
    fn test_partial_table_deserialization() {
        let json = r#"{"eagle": {"breeding_age": 1, "max_age": 10, "breeding_probability": 1.0,
            "max_litter_size": 4, "food_value": 5, "creation_probability": 0.5,
            "diet": {"Prey": "Squirrel"}}}"#;
        let table: SpeciesTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.eagle.max_litter_size, 4);
        assert_eq!(table.fox, Species::Fox.default_params());
    }
}
