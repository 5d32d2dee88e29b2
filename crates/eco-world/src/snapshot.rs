//! Serializable population state.

use crate::animal::Animal;
use crate::plant::Plant;
use serde::{Deserialize, Serialize};

/// Every live agent at one step, in acting order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub step: u64,
    pub animals: Vec<Animal>,
    pub plants: Vec<Plant>,
}

impl PopulationSnapshot {
    pub fn to_json(&self) -> eco_core::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
