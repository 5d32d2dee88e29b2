//! Simulation engine: seeding, day/night stepping and run control.

use crate::ecosystem::Ecosystem;
use crate::observer::{FieldView, Observer, TracingObserver};
use crate::snapshot::PopulationSnapshot;
use crate::{Animal, AnimalOutcome, Plant, PlantOutcome};
use eco_core::{
    AnimalId, FieldStats, Gender, Location, PlantId, RandomSource, Result, SeededRandom,
    SimulationConfig, Species,
};
use tracing::{debug, info, instrument, trace};

pub struct Simulator<O = TracingObserver, R = SeededRandom> {
    config: SimulationConfig,
    ecosystem: Ecosystem,
    observer: O,
    rng: R,
    step: u64,
}

impl Simulator {
    /// Seeded simulator that logs its metrics through `tracing`
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let observer = TracingObserver::new(config.report_interval);
        let rng = SeededRandom::new(config.seed);
        Self::with_parts(config, observer, rng)
    }
}

impl<O: Observer> Simulator<O, SeededRandom> {
    pub fn with_observer(config: SimulationConfig, observer: O) -> Result<Self> {
        let rng = SeededRandom::new(config.seed);
        Self::with_parts(config, observer, rng)
    }
}

impl<O: Observer, R: RandomSource> Simulator<O, R> {
    /// Build a simulator and seed its starting population
    pub fn with_parts(config: SimulationConfig, observer: O, rng: R) -> Result<Self> {
        config.validate()?;
        let (depth, width) = config.field.dimensions();

        let mut sim = Self {
            config,
            ecosystem: Ecosystem::new(depth, width),
            observer,
            rng,
            step: 0,
        };
        sim.reset()?;
        Ok(sim)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn ecosystem(&self) -> &Ecosystem {
        &self.ecosystem
    }

    pub fn ecosystem_mut(&mut self) -> &mut Ecosystem {
        &mut self.ecosystem
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn step_count(&self) -> u64 {
        self.step
    }

    /// Even steps are night
    pub fn is_night(&self) -> bool {
        self.step % 2 == 0
    }

    pub fn stats(&self) -> FieldStats {
        self.ecosystem.stats(self.step)
    }

    pub fn snapshot(&self) -> PopulationSnapshot {
        self.ecosystem.snapshot(self.step)
    }

    pub fn is_viable(&self) -> bool {
        self.observer
            .is_viable(&FieldView::new(self.step, &self.ecosystem))
    }

    /// Reseed the population and restart the step counter
    pub fn reset(&mut self) -> Result<()> {
        self.step = 0;
        self.ecosystem.clear();
        self.populate()?;

        let stats = self.stats();
        info!(
            event = "reset",
            eagles = stats.count(Species::Eagle),
            foxes = stats.count(Species::Fox),
            scorpions = stats.count(Species::Scorpion),
            grasshoppers = stats.count(Species::Grasshopper),
            squirrels = stats.count(Species::Squirrel),
            plants = stats.plants,
            "Population seeded"
        );

        self.report();
        Ok(())
    }

    /// Empty both layers without reseeding, for staging scenarios by hand
    pub fn clear(&mut self) {
        self.step = 0;
        self.ecosystem.clear();
    }

    /// Advance exactly one tick
    pub fn step(&mut self) -> Result<()> {
        self.step += 1;

        if self.is_night() {
            trace!(step = self.step, "Night, nothing acts");
        } else {
            let mut new_plants = Vec::new();
            let mut new_animals = Vec::new();
            let acted = self
                .act_plants(&mut new_plants)
                .and_then(|()| self.act_animals(&mut new_animals));

            // Newborns already placed are enlisted even if the pass failed
            self.ecosystem.plants.enlist(new_plants);
            self.ecosystem.animals.enlist(new_animals);
            // Prey and plants eaten this step, newborns included
            self.ecosystem.plants.retain(Plant::is_alive);
            self.ecosystem.animals.retain(Animal::is_alive);
            acted?;
        }

        self.report();
        Ok(())
    }

    /// Advance up to `num_steps` ticks, stopping early once the observer
    /// declares the field non-viable. Returns the ticks executed.
    #[instrument(skip(self), fields(start_step = self.step))]
    pub fn run(&mut self, num_steps: u64) -> Result<u64> {
        let mut executed = 0;
        while executed < num_steps && self.is_viable() {
            self.step()?;
            executed += 1;
        }

        let stats = self.stats();
        info!(
            event = "run_complete",
            requested = num_steps,
            executed = executed,
            final_step = self.step,
            stopped_early = executed < num_steps,
            animals = stats.total_animals(),
            plants = stats.plants,
            "🏁 Run complete"
        );
        Ok(executed)
    }

    /// Run for the configured number of steps
    pub fn run_long(&mut self) -> Result<u64> {
        self.run(self.config.num_steps)
    }

    fn act_plants(&mut self, newborns: &mut Vec<PlantId>) -> Result<()> {
        for id in self.ecosystem.plants.ids() {
            let Some(mut plant) = self.ecosystem.plants.take(id) else {
                continue;
            };
            let outcome = plant.act(
                &mut self.ecosystem,
                &self.config.plants,
                &mut self.rng,
                newborns,
            );
            self.ecosystem.plants.insert(id, plant);

            if outcome? == PlantOutcome::Overgrown {
                trace!(plant_id = %id, step = self.step, "Plant overgrew");
            }
        }

        Ok(())
    }

    fn act_animals(&mut self, newborns: &mut Vec<AnimalId>) -> Result<()> {
        for id in self.ecosystem.animals.ids() {
            let Some(mut animal) = self.ecosystem.animals.take(id) else {
                continue;
            };
            let outcome = animal.act(
                &mut self.ecosystem,
                &self.config.species,
                &mut self.rng,
                newborns,
            );
            let species = animal.species;
            self.ecosystem.animals.insert(id, animal);

            match outcome? {
                AnimalOutcome::Inactive => {}
                AnimalOutcome::Moved { births, .. } if births == 0 => {}
                AnimalOutcome::Moved { births, .. } => {
                    trace!(animal_id = %id, %species, births, step = self.step, "Litter born");
                }
                death => {
                    trace!(animal_id = %id, %species, outcome = ?death, step = self.step, "Animal died");
                }
            }
        }

        Ok(())
    }

    /// Plants first, then one animal species at most per cell. Species are
    /// tried in priority order with a fresh draw each, so later species only
    /// see the cells earlier ones left empty.
    fn populate(&mut self) -> Result<()> {
        let locations: Vec<Location> = self.ecosystem.plant_field().locations().collect();

        let plants = &self.config.plants;
        for &location in &locations {
            if self.rng.next_double() <= plants.creation_probability {
                let size = self.rng.next_int(plants.seed_size_bound);
                self.ecosystem.spawn_plant(size, location)?;
            }
        }

        for &location in &locations {
            for species in Species::ALL {
                let params = self.config.species.get(species);
                if self.rng.next_double() <= params.creation_probability {
                    let gender = Gender::random(&mut self.rng);
                    let age = self.rng.next_int(params.max_age);
                    let food = self.rng.next_int(params.food_value);
                    let food_level = i32::try_from(food).unwrap_or(i32::MAX);
                    self.ecosystem
                        .spawn_animal(species, gender, age, food_level, location)?;
                    break;
                }
            }
        }

        debug!(
            animals = self.ecosystem.animals().len(),
            plants = self.ecosystem.plants().len(),
            "Populated field"
        );
        Ok(())
    }

    fn report(&mut self) {
        let view = FieldView::new(self.step, &self.ecosystem);
        self.observer.report(self.step, &view);
    }
}
