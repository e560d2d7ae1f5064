//! Pitysim - compensated-probability roll simulator
//!
//! Simulates a geometric-style trial process where every failed attempt
//! raises the success probability for the next one (a "pity" mechanism),
//! then summarizes attempts-to-success across many independent trials.

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;

pub use analysis::{
    run_simulation, run_simulation_with_rng, Bucket, PlotSeries, SimulationReport, Statistics,
};
pub use config::RunConfig;
pub use error::EngineError;
