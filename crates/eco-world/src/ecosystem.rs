//! Both field layers and the populations living on them.

use crate::animal::Animal;
use crate::field::Field;
use crate::plant::Plant;
use crate::roster::Roster;
use crate::snapshot::PopulationSnapshot;
use eco_core::{AnimalId, Error, FieldStats, Gender, Location, PlantId, Result, Species};

pub struct Ecosystem {
    pub(crate) animal_field: Field<AnimalId>,
    pub(crate) plant_field: Field<PlantId>,
    pub(crate) animals: Roster<AnimalId, Animal>,
    pub(crate) plants: Roster<PlantId, Plant>,
    next_animal_id: u64,
    next_plant_id: u64,
}

impl Ecosystem {
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            animal_field: Field::new(depth, width),
            plant_field: Field::new(depth, width),
            animals: Roster::new(),
            plants: Roster::new(),
            next_animal_id: 0,
            next_plant_id: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.animal_field.depth()
    }

    pub fn width(&self) -> usize {
        self.animal_field.width()
    }

    pub fn animal_field(&self) -> &Field<AnimalId> {
        &self.animal_field
    }

    pub fn plant_field(&self) -> &Field<PlantId> {
        &self.plant_field
    }

    pub fn animals(&self) -> &Roster<AnimalId, Animal> {
        &self.animals
    }

    pub fn plants(&self) -> &Roster<PlantId, Plant> {
        &self.plants
    }

    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.get(id)
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.plants.get(id)
    }

    /// Empty both layers and both populations. Ids restart from zero.
    pub fn clear(&mut self) {
        self.animal_field.clear_all();
        self.plant_field.clear_all();
        self.animals.clear();
        self.plants.clear();
        self.next_animal_id = 0;
        self.next_plant_id = 0;
    }

    /// Place a new animal on the field without enlisting it
    pub(crate) fn add_animal(
        &mut self,
        species: Species,
        gender: Gender,
        age: u32,
        food_level: i32,
        location: Location,
    ) -> Result<AnimalId> {
        let id = AnimalId(self.next_animal_id);
        self.animal_field.place(id, location)?;
        self.next_animal_id += 1;
        self.animals
            .insert(id, Animal::new(id, species, gender, age, food_level, location));
        Ok(id)
    }

    /// Place a new plant on the plant layer without enlisting it
    pub(crate) fn add_plant(&mut self, size: u32, location: Location) -> Result<PlantId> {
        let id = PlantId(self.next_plant_id);
        self.plant_field.place(id, location)?;
        self.next_plant_id += 1;
        self.plants.insert(id, Plant::new(id, size, location));
        Ok(id)
    }

    /// Add an animal that acts from the next step on
    pub fn spawn_animal(
        &mut self,
        species: Species,
        gender: Gender,
        age: u32,
        food_level: i32,
        location: Location,
    ) -> Result<AnimalId> {
        let id = self.add_animal(species, gender, age, food_level, location)?;
        self.animals.enlist([id]);
        Ok(id)
    }

    /// Add a plant that acts from the next step on
    pub fn spawn_plant(&mut self, size: u32, location: Location) -> Result<PlantId> {
        let id = self.add_plant(size, location)?;
        self.plants.enlist([id]);
        Ok(id)
    }

    pub fn species_at(&self, location: Location) -> Option<Species> {
        self.animal_field
            .occupant_at(location)
            .and_then(|id| self.animals.get(id))
            .map(|animal| animal.species)
    }

    /// Counts taken from the fields, not the rosters
    pub fn stats(&self, step: u64) -> FieldStats {
        let mut stats = FieldStats::new(step);
        for (_, id) in self.animal_field.occupied() {
            if let Some(animal) = self.animals.get(id) {
                stats.record(animal.species);
            }
        }
        stats.plants = self.plant_field.occupied_count() as u32;
        stats
    }

    /// Every live enlisted agent, in acting order
    pub fn snapshot(&self, step: u64) -> PopulationSnapshot {
        PopulationSnapshot {
            step,
            animals: self
                .animals
                .iter()
                .filter(|(_, a)| a.is_alive())
                .map(|(_, a)| a.clone())
                .collect(),
            plants: self
                .plants
                .iter()
                .filter(|(_, p)| p.is_alive())
                .map(|(_, p)| p.clone())
                .collect(),
        }
    }

    /// Check that each layer and its population agree: every occupied cell
    /// holds a live agent that records that cell, and every live agent sits
    /// in the cell it records.
    pub fn verify_occupancy(&self) -> Result<()> {
        for (location, id) in self.animal_field.occupied() {
            match self.animals.get(id) {
                Some(animal) if animal.is_alive() && animal.location() == Some(location) => {}
                _ => {
                    return Err(Error::InvalidState(format!(
                        "animal cell {location} holds stale {id}"
                    )))
                }
            }
        }
        for (id, animal) in self.animals.iter() {
            if !animal.is_alive() {
                continue;
            }
            let on_field = animal
                .location()
                .and_then(|loc| self.animal_field.occupant_at(loc));
            if on_field != Some(id) {
                return Err(Error::InvalidState(format!("{id} is not on its cell")));
            }
        }

        for (location, id) in self.plant_field.occupied() {
            match self.plants.get(id) {
                Some(plant) if plant.is_alive() && plant.location() == Some(location) => {}
                _ => {
                    return Err(Error::InvalidState(format!(
                        "plant cell {location} holds stale {id}"
                    )))
                }
            }
        }
        for (id, plant) in self.plants.iter() {
            if !plant.is_alive() {
                continue;
            }
            let on_field = plant
                .location()
                .and_then(|loc| self.plant_field.occupant_at(loc));
            if on_field != Some(id) {
                return Err(Error::InvalidState(format!("{id} is not on its cell")));
            }
        }
        Ok(())
    }
}
