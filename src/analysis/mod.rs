// src/analysis/mod.rs
pub mod histogram;
pub mod simulation;
pub mod stats;
pub mod trial;

// Re-export commonly used types
pub use histogram::{build_histogram, plot_bucket_count, Bucket, PlotSeries, PLOT_SCALE};
pub use simulation::{collect_samples, run_simulation, run_simulation_with_rng, SimulationReport};
pub use stats::Statistics;
pub use trial::next_sample_attempts;
