// src/analysis/histogram.rs
use serde::{Serialize, Deserialize};

use crate::analysis::stats::Statistics;
use crate::error::EngineError;

/// Edge length of the Presenter's square coordinate space.
pub const PLOT_SCALE: f64 = 100.0;

/// Bucket count of the text report histogram.
pub const TEXT_BUCKETS: usize = 10;

/// Upper limit on plot-mode resolution.
const MAX_PLOT_BUCKETS: usize = 50;

/// A half-open range `[from, to)` and the number of samples inside it.
/// The last bucket of any histogram is right-unbounded so the maximum
/// sample survives floating-point slop at the final edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub from: f64,
    pub to: f64,
    pub count: usize,
}

/// Bucket `samples` into `bucket_count` equally sized ranges spanning
/// `[min, max]`. A degenerate range (all samples equal) collapses to a
/// single bucket holding everything.
pub fn build_histogram(samples: &[u64], bucket_count: usize) -> Result<Vec<Bucket>, EngineError> {
    if samples.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    if bucket_count == 0 {
        return Err(EngineError::InvalidConfiguration(
            "bucket count must be positive".to_string(),
        ));
    }

    let min = samples.iter().copied().fold(u64::MAX, u64::min) as f64;
    let max = samples.iter().copied().fold(u64::MIN, u64::max) as f64;

    if max == min {
        return Ok(vec![Bucket {
            from: min,
            to: f64::INFINITY,
            count: samples.len(),
        }]);
    }

    let bucket_size = (max - min) / bucket_count as f64;

    let mut buckets = Vec::with_capacity(bucket_count);
    for i in 0..bucket_count {
        let from = min + i as f64 * bucket_size;
        let to = if i == bucket_count - 1 {
            f64::INFINITY
        } else {
            min + (i + 1) as f64 * bucket_size
        };
        let count = samples
            .iter()
            .filter(|&&v| (v as f64) >= from && (v as f64) < to)
            .count();
        buckets.push(Bucket { from, to, count });
    }

    Ok(buckets)
}

/// Plot resolution tracks the target: narrow probabilities get fewer
/// buckets so the series does not degenerate into a row of empty bins.
pub fn plot_bucket_count(target_probability_reverse: f64) -> usize {
    (target_probability_reverse as usize).clamp(1, MAX_PLOT_BUCKETS)
}

/// Plot-ready rendition of a histogram: one `(x, y)` point per bucket in
/// the `[0, PLOT_SCALE]` coordinate space, plus the x-coordinate where
/// the reciprocal target probability falls on the observed sample range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub points: Vec<(f64, f64)>,
    pub threshold_x: f64,
}

impl PlotSeries {
    pub fn build(
        samples: &[u64],
        stats: &Statistics,
        target_probability_reverse: f64,
    ) -> Result<Self, EngineError> {
        let buckets = build_histogram(samples, plot_bucket_count(target_probability_reverse))?;
        // a degenerate range may collapse to fewer buckets than requested
        let bucket_count = buckets.len();
        let total = samples.len() as f64;

        let points = buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let x = if bucket_count > 1 {
                    PLOT_SCALE * i as f64 / (bucket_count - 1) as f64
                } else {
                    0.0
                };
                // Approximate visual normalization, kept as-is for
                // presentation compatibility.
                let y = PLOT_SCALE * (bucket_count as f64 / 2.0) * (bucket.count as f64 / total);
                (x, y)
            })
            .collect();

        let range = (stats.max - stats.min) as f64;
        let threshold_x = if range > 0.0 {
            PLOT_SCALE * target_probability_reverse / range
        } else {
            0.0
        };

        Ok(Self {
            points,
            threshold_x,
        })
    }
}
