//! Simulation core.
//!
//! Two field layers (animals and plants) share one coordinate space. Every
//! animal species runs the same behaviour driven by its parameter record;
//! plants grow and spread. The [`Simulator`] advances the whole population
//! one tick at a time and reports to an [`Observer`].

pub mod field;
pub mod roster;
pub mod animal;
pub mod plant;
pub mod ecosystem;
pub mod observer;
pub mod snapshot;
pub mod simulation;

pub use field::Field;
pub use roster::Roster;
pub use animal::{Animal, AnimalOutcome};
pub use plant::{Plant, PlantOutcome};
pub use ecosystem::Ecosystem;
pub use observer::{FieldView, HistoryObserver, Observer, TracingObserver};
pub use snapshot::PopulationSnapshot;
pub use simulation::Simulator;
