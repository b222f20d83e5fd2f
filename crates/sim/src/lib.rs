//! Shop-day simulation layer.
//!
//! Drives the inventory domain through consecutive end-of-day updates and
//! records what moved each day. This crate owns the ambient observability
//! setup; the domain crates stay free of it.

pub mod observability;
pub mod report;
pub mod run;

pub use report::{DayReport, ItemDelta, SimulationReport};
pub use run::Simulation;
