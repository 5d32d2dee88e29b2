//! Animal state and the behaviour shared by every species.

use crate::ecosystem::Ecosystem;
use crate::field::Field;
use eco_core::{
    AnimalId, Diet, Gender, Location, RandomSource, Result, Species, SpeciesParams, SpeciesTable,
};
use serde::{Deserialize, Serialize};

/// An animal in the simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub species: Species,
    pub gender: Gender,
    pub age: u32,
    pub food_level: i32,
    alive: bool,
    location: Option<Location>,
}

/// What happened to an animal during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalOutcome {
    /// Already dead, nothing done
    Inactive,
    DiedOfAge,
    Starved,
    /// Moved after optionally eating and breeding
    Moved { ate: bool, births: u32 },
    /// No food and no free cell
    Overcrowded { births: u32 },
}

impl Animal {
    /// A live animal at `location`. Field placement is the caller's job.
    pub fn new(
        id: AnimalId,
        species: Species,
        gender: Gender,
        age: u32,
        food_level: i32,
        location: Location,
    ) -> Self {
        Self {
            id,
            species,
            gender,
            age,
            food_level,
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

    /// Mark dead and release the cell. Permanent.
    pub fn set_dead(&mut self, field: &mut Field<AnimalId>) {
        self.alive = false;
        if let Some(location) = self.location.take() {
            field.clear(location);
        }
    }

    /// Move to `new_location`. On failure the animal stays where it was.
    pub fn set_location(&mut self, field: &mut Field<AnimalId>, new_location: Location) -> Result<()> {
        field.place(self.id, new_location)?;
        if let Some(old) = self.location.replace(new_location) {
            if old != new_location {
                field.clear(old);
            }
        }
        Ok(())
    }

    /// Run one step: age, hunger, breeding, foraging and movement.
    ///
    /// The animal must not be stored in `eco` while it acts. Newborns are
    /// placed on the field immediately and their ids pushed to `newborns`.
    pub fn act<R: RandomSource + ?Sized>(
        &mut self,
        eco: &mut Ecosystem,
        table: &SpeciesTable,
        rng: &mut R,
        newborns: &mut Vec<AnimalId>,
    ) -> Result<AnimalOutcome> {
        let Some(location) = self.location else {
            return Ok(AnimalOutcome::Inactive);
        };
        let params = table.get(self.species);

        self.age += 1;
        if self.age > params.max_age {
            self.set_dead(&mut eco.animal_field);
            return Ok(AnimalOutcome::DiedOfAge);
        }

        self.food_level -= 1;
        if self.food_level <= 0 {
            self.set_dead(&mut eco.animal_field);
            return Ok(AnimalOutcome::Starved);
        }

        let births = self.give_birth(eco, params, location, rng, newborns)?;

        let meal = self.forage(eco, params, location);
        let ate = meal.is_some();
        let target = meal.or_else(|| eco.animal_field.free_adjacent_location(location));

        match target {
            Some(target) => {
                self.set_location(&mut eco.animal_field, target)?;
                Ok(AnimalOutcome::Moved { ate, births })
            }
            None => {
                self.set_dead(&mut eco.animal_field);
                Ok(AnimalOutcome::Overcrowded { births })
            }
        }
    }

    /// Only the first adjacent conspecific is considered. A partner of the
    /// same gender blocks breeding even if a suitable one sits further on.
    fn has_partner(&self, eco: &Ecosystem, location: Location) -> bool {
        for cell in eco.animal_field.adjacent(location) {
            let neighbour = eco
                .animal_field
                .occupant_at(cell)
                .and_then(|id| eco.animals.get(id));
            if let Some(other) = neighbour {
                if other.species == self.species {
                    return other.gender != self.gender;
                }
            }
        }
        false
    }

    /// Litter size for this step, zero if too young or the draw fails
    fn breed<R: RandomSource + ?Sized>(&self, params: &SpeciesParams, rng: &mut R) -> u32 {
        if self.age >= params.breeding_age && rng.next_double() <= params.breeding_probability {
            rng.next_int(params.max_litter_size) + 1
        } else {
            0
        }
    }

    fn give_birth<R: RandomSource + ?Sized>(
        &self,
        eco: &mut Ecosystem,
        params: &SpeciesParams,
        location: Location,
        rng: &mut R,
        newborns: &mut Vec<AnimalId>,
    ) -> Result<u32> {
        if !self.has_partner(eco, location) {
            return Ok(0);
        }

        let free = eco.animal_field.free_adjacent(location);
        let litter = self.breed(params, rng);

        let mut born = 0;
        for cell in free.into_iter().take(litter as usize) {
            let gender = Gender::random(rng);
            let id = eco.add_animal(self.species, gender, 0, params.full_food_level(), cell)?;
            newborns.push(id);
            born += 1;
        }
        Ok(born)
    }

    /// Eat the first live food source next to `location`, returning its cell
    fn forage(&mut self, eco: &mut Ecosystem, params: &SpeciesParams, location: Location) -> Option<Location> {
        let found = match params.diet {
            Diet::Prey(prey) => Self::hunt(eco, prey, location),
            Diet::Plants => Self::graze(eco, location),
        };
        if found.is_some() {
            self.food_level = params.full_food_level();
        }
        found
    }

    fn hunt(eco: &mut Ecosystem, prey: Species, location: Location) -> Option<Location> {
        for cell in eco.animal_field.adjacent(location) {
            let Some(id) = eco.animal_field.occupant_at(cell) else {
                continue;
            };
            if let Some(victim) = eco.animals.get_mut(id) {
                if victim.species == prey && victim.is_alive() {
                    victim.set_dead(&mut eco.animal_field);
                    return Some(cell);
                }
            }
        }
        None
    }

    /// Plants live on their own layer; one is edible only if the matching
    /// animal-layer cell is free to move into.
    fn graze(eco: &mut Ecosystem, location: Location) -> Option<Location> {
        for cell in eco.plant_field.adjacent(location) {
            if !eco.animal_field.is_free(cell) {
                continue;
            }
            let Some(id) = eco.plant_field.occupant_at(cell) else {
                continue;
            };
            if let Some(plant) = eco.plants.get_mut(id) {
                if plant.is_alive() {
                    plant.consume(&mut eco.plant_field);
                    return Some(cell);
                }
            }
        }
        None
    }
}
