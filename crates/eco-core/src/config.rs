//! Configuration types for the simulation.

use crate::error::{Error, Result};
use crate::species::SpeciesTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Field dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of rows
    pub depth: i32,
    /// Number of columns
    pub width: i32,
}

impl FieldConfig {
    pub const DEFAULT_DEPTH: usize = 150;
    pub const DEFAULT_WIDTH: usize = 150;

    /// Usable `(depth, width)`. Non-positive dimensions fall back to the
    /// defaults for both axes.
    pub fn dimensions(&self) -> (usize, usize) {
        if self.depth <= 0 || self.width <= 0 {
            warn!(
                depth = self.depth,
                width = self.width,
                default_depth = Self::DEFAULT_DEPTH,
                default_width = Self::DEFAULT_WIDTH,
                "Field dimensions must be greater than zero, using defaults"
            );
            return (Self::DEFAULT_DEPTH, Self::DEFAULT_WIDTH);
        }
        (self.depth as usize, self.width as usize)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH as i32,
            width: Self::DEFAULT_WIDTH as i32,
        }
    }
}

/// Plant growth and spreading parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    /// Chance of a plant occupying a cell at seeding time
    pub creation_probability: f64,
    /// Minimum size before a plant may spread
    pub spread_age: u32,
    /// Size beyond which a plant dies
    pub max_size: u32,
    /// Chance of spreading on an eligible step
    pub spread_probability: f64,
    /// Largest number of saplings per spread, drawn from `0..=max_spread`
    pub max_spread: u32,
    /// Seeded plants draw their size from `0..seed_size_bound`
    pub seed_size_bound: u32,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            creation_probability: 0.65,
            spread_age: 2,
            max_size: 350,
            spread_probability: 0.91,
            max_spread: 4,
            seed_size_bound: 50,
        }
    }
}

impl PlantConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("creation_probability", self.creation_probability),
            ("spread_probability", self.spread_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidConfig(format!(
                    "plants: {name} {p} outside [0, 1]"
                )));
            }
        }
        if self.max_spread == u32::MAX {
            return Err(Error::InvalidConfig(format!(
                "plants: max_spread must be below {}",
                u32::MAX
            )));
        }
        Ok(())
    }
}

/// Full simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Steps for a long unattended run
    pub num_steps: u64,
    /// Steps between population metric log lines
    pub report_interval: u64,
    pub field: FieldConfig,
    pub plants: PlantConfig,
    pub species: SpeciesTable,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_steps: 750,
            report_interval: 50,
            field: FieldConfig::default(),
            plants: PlantConfig::default(),
            species: SpeciesTable::default(),
        }
    }
}

impl SimulationConfig {
    /// Check everything that cannot be substituted with a default
    pub fn validate(&self) -> Result<()> {
        self.plants.validate()?;
        self.species.validate()
    }

    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SimulationConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}
