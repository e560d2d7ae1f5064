// src/analysis/stats.rs
use serde::{Serialize, Deserialize};

use crate::error::EngineError;

/// Descriptive summary of one run's attempts-to-success samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
}

impl Statistics {
    pub fn compute(samples: &[u64]) -> Result<Self, EngineError> {
        if samples.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let min = samples.iter().copied().fold(u64::MAX, u64::min);
        let max = samples.iter().copied().fold(u64::MIN, u64::max);
        let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / samples.len() as f64;

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let half = sorted.len() / 2;
        // Even counts average the two elements adjacent to the midpoint;
        // the index pairing (half, half - 1) is exact.
        let median = if sorted.len() % 2 == 0 {
            (sorted[half] as f64 + sorted[half - 1] as f64) / 2.0
        } else {
            sorted[half] as f64
        };

        Ok(Self {
            min,
            max,
            mean,
            median,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_even_count_averages_midpoint_pair() {
        let stats = Statistics::compute(&[1, 2, 3, 4]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn median_odd_count_takes_middle_element() {
        let stats = Statistics::compute(&[1, 2, 3]).unwrap();
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn median_is_order_independent() {
        let stats = Statistics::compute(&[4, 1, 3, 2]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn summary_of_uniform_value() {
        let stats = Statistics::compute(&[7, 7, 7]).unwrap();
        assert_eq!(stats.min, 7);
        assert_eq!(stats.max, 7);
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
    }

    #[test]
    fn mean_and_median_stay_within_range() {
        let samples = [1, 5, 9, 200, 13, 44, 2];
        let stats = Statistics::compute(&samples).unwrap();
        assert!(stats.min as f64 <= stats.mean && stats.mean <= stats.max as f64);
        assert!(stats.min as f64 <= stats.median && stats.median <= stats.max as f64);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            Statistics::compute(&[]),
            Err(EngineError::EmptyInput)
        ));
    }
}
