// src/analysis/simulation.rs
use chrono;
use rand::prelude::*;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::histogram::{self, PlotSeries, TEXT_BUCKETS};
use crate::analysis::stats::Statistics;
use crate::analysis::trial;
use crate::config::RunConfig;
use crate::error::EngineError;
use crate::report;

/// Everything one run produces. The Presenter consumes `report_text`,
/// `plot_points` and `threshold_x`; the rest identifies and summarizes
/// the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub run_id: String,
    pub timestamp: String,
    pub config: RunConfig,
    pub stats: Statistics,
    pub report_text: String,
    pub plot_points: Vec<(f64, f64)>,
    pub threshold_x: f64,
}

/// Run the trial generator exactly `samples_count` times, appending each
/// attempts-to-success result in draw order.
pub fn collect_samples<R: Rng>(config: &RunConfig, rng: &mut R) -> Result<Vec<u64>, EngineError> {
    config.validate()?;

    let mut samples = Vec::with_capacity(config.samples_count);
    for _ in 0..config.samples_count {
        samples.push(trial::next_sample_attempts(
            config.target_probability_reverse,
            config.max_attempts,
            rng,
        )?);
    }
    Ok(samples)
}

/// Execute one full run with an engine-owned random source, seeded when
/// the configuration asks for determinism.
pub fn run_simulation(config: &RunConfig) -> Result<SimulationReport, EngineError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_simulation_with_rng(config, &mut rng)
}

/// Execute one full run against a caller-supplied random source. Two
/// calls with the same configuration and the same source state produce
/// byte-identical reports.
pub fn run_simulation_with_rng<R: Rng>(
    config: &RunConfig,
    rng: &mut R,
) -> Result<SimulationReport, EngineError> {
    config.validate()?;

    debug!(
        target_probability_reverse = config.target_probability_reverse,
        samples_count = config.samples_count,
        "starting simulation run"
    );

    let samples = collect_samples(config, rng)?;
    let stats = Statistics::compute(&samples)?;

    let text_buckets = histogram::build_histogram(&samples, TEXT_BUCKETS)?;
    let report_text = report::format_report(config, &stats, &text_buckets);
    let series = PlotSeries::build(&samples, &stats, config.target_probability_reverse)?;

    info!(
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        median = stats.median,
        "simulation run complete"
    );

    Ok(SimulationReport {
        run_id: Uuid::new_v4().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        config: config.clone(),
        stats,
        report_text,
        plot_points: series.points,
        threshold_x: series.threshold_x,
    })
}
