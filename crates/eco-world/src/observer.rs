//! The reporting boundary between the engine and whatever displays it.
//!
//! After every tick the engine hands the observer a read-only [`FieldView`]
//! of the animal layer. The observer's only influence on the run is its
//! answer to [`Observer::is_viable`].

use crate::ecosystem::Ecosystem;
use eco_core::{FieldStats, Location, Species};
use tracing::info;

/// Read-only view of the field at one step
pub struct FieldView<'a> {
    step: u64,
    ecosystem: &'a Ecosystem,
}

impl<'a> FieldView<'a> {
    pub fn new(step: u64, ecosystem: &'a Ecosystem) -> Self {
        Self { step, ecosystem }
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn depth(&self) -> usize {
        self.ecosystem.depth()
    }

    pub fn width(&self) -> usize {
        self.ecosystem.width()
    }

    pub fn species_at(&self, location: Location) -> Option<Species> {
        self.ecosystem.species_at(location)
    }

    pub fn has_plant(&self, location: Location) -> bool {
        self.ecosystem.plant_field().occupant_at(location).is_some()
    }

    pub fn stats(&self) -> FieldStats {
        self.ecosystem.stats(self.step)
    }
}

pub trait Observer {
    /// Called once after every tick and after a reset
    fn report(&mut self, step: u64, view: &FieldView<'_>);

    /// Whether an unattended run should continue
    fn is_viable(&self, view: &FieldView<'_>) -> bool {
        view.stats().is_viable()
    }
}

/// Logs population metrics every `report_interval` steps
#[derive(Debug, Clone)]
pub struct TracingObserver {
    report_interval: u64,
}

impl TracingObserver {
    pub fn new(report_interval: u64) -> Self {
        Self {
            report_interval: report_interval.max(1),
        }
    }
}

impl Observer for TracingObserver {
    fn report(&mut self, step: u64, view: &FieldView<'_>) {
        if step % self.report_interval != 0 {
            return;
        }
        let stats = view.stats();
        info!(
            event = "population_metrics",
            step = step,
            eagles = stats.count(Species::Eagle),
            foxes = stats.count(Species::Fox),
            scorpions = stats.count(Species::Scorpion),
            grasshoppers = stats.count(Species::Grasshopper),
            squirrels = stats.count(Species::Squirrel),
            plants = stats.plants,
            "Population metrics snapshot"
        );
    }
}

/// Records the stats of every report
#[derive(Debug, Clone, Default)]
pub struct HistoryObserver {
    history: Vec<FieldStats>,
}

impl HistoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[FieldStats] {
        &self.history
    }
}

impl Observer for HistoryObserver {
    fn report(&mut self, _step: u64, view: &FieldView<'_>) {
        self.history.push(view.stats());
    }
}
