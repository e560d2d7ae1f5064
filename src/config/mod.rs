// src/config/mod.rs
use serde::{Serialize, Deserialize};

use crate::error::EngineError;

/// Parameters for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// Reciprocal target probability: 1000.0 means 1/1000 per attempt.
    pub target_probability_reverse: f64,
    /// Number of independent trials to draw.
    pub samples_count: usize,
    /// Seed for deterministic runs; fresh entropy when absent.
    pub seed: Option<u64>,
    /// Stall guard for the trial loop. Threshold saturation normally
    /// forces success near 2 * target_probability_reverse attempts.
    pub max_attempts: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_probability_reverse: 1000.0,
            samples_count: 50_000,
            seed: None,
            max_attempts: 10_000_000,
        }
    }
}

impl RunConfig {
    pub fn new(target_probability_reverse: f64, samples_count: usize) -> Self {
        Self {
            target_probability_reverse,
            samples_count,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject a configuration before any sampling happens.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.target_probability_reverse.is_finite() || self.target_probability_reverse <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "target_probability_reverse must be a positive finite number, got {}",
                self.target_probability_reverse
            )));
        }
        if self.samples_count == 0 {
            return Err(EngineError::InvalidConfiguration(
                "samples_count must be positive".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(EngineError::InvalidConfiguration(
                "max_attempts must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_probability_reverse, 1000.0);
        assert_eq!(config.samples_count, 50_000);
    }

    #[test]
    fn rejects_zero_samples() {
        let config = RunConfig::new(1000.0, 0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_non_positive_probability_reverse() {
        for reverse in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = RunConfig::new(reverse, 100);
            assert!(
                matches!(config.validate(), Err(EngineError::InvalidConfiguration(_))),
                "reverse {reverse} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_zero_max_attempts() {
        let mut config = RunConfig::default();
        config.max_attempts = 0;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }
}
