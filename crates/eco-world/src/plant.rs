//! Plant state and growth.

use crate::ecosystem::Ecosystem;
use crate::field::Field;
use eco_core::{Location, PlantConfig, PlantId, RandomSource, Result};
use serde::{Deserialize, Serialize};

/// A plant on the plant layer. Plants never move; they grow and spread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub size: u32,
    alive: bool,
    location: Option<Location>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantOutcome {
    Inactive,
    Overgrown,
    Grew { spawned: u32 },
}

impl Plant {
    pub fn new(id: PlantId, size: u32, location: Location) -> Self {
        Self {
            id,
            size,
            alive: true,
            location: Some(location),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Remove the plant, either eaten or overgrown
    pub fn consume(&mut self, field: &mut Field<PlantId>) {
        self.alive = false;
        if let Some(location) = self.location.take() {
            field.clear(location);
        }
    }

    pub fn act<R: RandomSource + ?Sized>(
        &mut self,
        eco: &mut Ecosystem,
        config: &PlantConfig,
        rng: &mut R,
        newborns: &mut Vec<PlantId>,
    ) -> Result<PlantOutcome> {
        let Some(location) = self.location else {
            return Ok(PlantOutcome::Inactive);
        };

        self.size += 1;
        if self.size > config.max_size {
            self.consume(&mut eco.plant_field);
            return Ok(PlantOutcome::Overgrown);
        }

        let spawned = self.spread(eco, config, location, rng, newborns)?;
        Ok(PlantOutcome::Grew { spawned })
    }

    fn spread<R: RandomSource + ?Sized>(
        &self,
        eco: &mut Ecosystem,
        config: &PlantConfig,
        location: Location,
        rng: &mut R,
        newborns: &mut Vec<PlantId>,
    ) -> Result<u32> {
        if self.size < config.spread_age || rng.next_double() > config.spread_probability {
            return Ok(0);
        }

        let free = eco.plant_field.free_adjacent(location);
        let count = rng.next_int(config.max_spread.saturating_add(1));

        let mut spawned = 0;
        for cell in free.into_iter().take(count as usize) {
            newborns.push(eco.add_plant(0, cell)?);
            spawned += 1;
        }
        Ok(spawned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::ScriptedRandom;

    fn act_once<R: RandomSource>(
        eco: &mut Ecosystem,
        id: PlantId,
        config: &PlantConfig,
        rng: &mut R,
    ) -> (PlantOutcome, Vec<PlantId>) {
        let mut newborns = Vec::new();
        let mut plant = eco.plants.take(id).unwrap();
        let outcome = plant.act(eco, config, rng, &mut newborns).unwrap();
        eco.plants.insert(id, plant);
        (outcome, newborns)
    }

    #[test]
    fn test_grows_without_spreading_when_small() {
        let mut eco = Ecosystem::new(3, 3);
        let config = PlantConfig::default();
        let id = eco.spawn_plant(0, Location::new(1, 1)).unwrap();

        let mut rng = ScriptedRandom::new().with_doubles([0.0]);
        let (outcome, newborns) = act_once(&mut eco, id, &config, &mut rng);

        assert_eq!(outcome, PlantOutcome::Grew { spawned: 0 });
        assert!(newborns.is_empty());
        assert_eq!(eco.plant(id).unwrap().size, 1);
        // No draw below the spreading size
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_spreads_into_free_cells() {
        let mut eco = Ecosystem::new(3, 3);
        let config = PlantConfig::default();
        let id = eco.spawn_plant(5, Location::new(1, 1)).unwrap();
        eco.spawn_plant(5, Location::new(0, 0)).unwrap();

        let mut rng = ScriptedRandom::new().with_doubles([0.5]).with_ints([3]);
        let (outcome, newborns) = act_once(&mut eco, id, &config, &mut rng);

        assert_eq!(outcome, PlantOutcome::Grew { spawned: 3 });
        let cells: Vec<_> = newborns
            .iter()
            .map(|n| eco.plant(*n).unwrap().location().unwrap())
            .collect();
        assert_eq!(
            cells,
            vec![Location::new(0, 1), Location::new(0, 2), Location::new(1, 0)]
        );
        assert!(newborns.iter().all(|n| eco.plant(*n).unwrap().size == 0));
    }

    #[test]
    fn test_failed_spread_draw() {
        let mut eco = Ecosystem::new(3, 3);
        let config = PlantConfig::default();
        let id = eco.spawn_plant(5, Location::new(1, 1)).unwrap();

        let mut rng = ScriptedRandom::new().with_doubles([0.95]).with_ints([4]);
        let (outcome, _) = act_once(&mut eco, id, &config, &mut rng);
        assert_eq!(outcome, PlantOutcome::Grew { spawned: 0 });
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_unbounded_spread_count_fills_free_cells() {
        let mut eco = Ecosystem::new(3, 3);
        let config = PlantConfig {
            max_spread: u32::MAX,
            ..PlantConfig::default()
        };
        let id = eco.spawn_plant(5, Location::new(1, 1)).unwrap();

        let mut rng = ScriptedRandom::new()
            .with_doubles([0.0])
            .with_ints([u32::MAX]);
        let (outcome, newborns) = act_once(&mut eco, id, &config, &mut rng);
        assert_eq!(outcome, PlantOutcome::Grew { spawned: 8 });
        assert_eq!(newborns.len(), 8);
    }

    #[test]
    fn test_overgrowth_kills() {
        let mut eco = Ecosystem::new(3, 3);
        let config = PlantConfig::default();
        let id = eco.spawn_plant(config.max_size, Location::new(2, 2)).unwrap();

        let (outcome, _) = act_once(&mut eco, id, &config, &mut ScriptedRandom::new());
        assert_eq!(outcome, PlantOutcome::Overgrown);
        assert!(!eco.plant(id).unwrap().is_alive());
        assert_eq!(eco.plant_field.occupant_at(Location::new(2, 2)), None);
    }

    #[test]
    fn test_consumed_plant_is_inactive() {
        let mut eco = Ecosystem::new(3, 3);
        let config = PlantConfig::default();
        let id = eco.spawn_plant(3, Location::new(0, 0)).unwrap();
        eco.plants.get_mut(id).unwrap().consume(&mut eco.plant_field);

        let (outcome, _) = act_once(&mut eco, id, &config, &mut ScriptedRandom::new());
        assert_eq!(outcome, PlantOutcome::Inactive);
        assert_eq!(eco.plant(id).unwrap().size, 3);
    }
}
