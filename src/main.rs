// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use pitysim::{run_simulation, RunConfig};

/// Console presenter for the compensated-probability roll simulator.
#[derive(Parser, Debug)]
#[command(name = "pitysim", version, about = "Summarizes attempts-to-success under probability compensation")]
struct Cli {
    /// Reciprocal target probability (1000 means 1/1000 per attempt)
    #[arg(long, default_value_t = 1000.0)]
    target_reverse: f64,

    /// Number of independent trials per run
    #[arg(long, default_value_t = 50_000)]
    samples: usize,

    /// Seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();

    let mut config = RunConfig::new(cli.target_reverse, cli.samples);
    config.seed = cli.seed;

    let report = run_simulation(&config).context("simulation run failed")?;
    println!("{}", report.report_text);

    Ok(())
}
