//! Core types and utilities for the ecosim predator-prey simulation.

pub mod types;
pub mod config;
pub mod error;
pub mod random;
pub mod species;
pub mod stats;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use species::{Diet, Species, SpeciesParams, SpeciesTable};
pub use stats::FieldStats;
