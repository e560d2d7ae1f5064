// src/report/mod.rs
use crate::analysis::histogram::Bucket;
use crate::analysis::stats::Statistics;
use crate::config::RunConfig;

/// Maximum width of a text histogram bar, in `#` characters.
const BAR_WIDTH: f64 = 120.0;

const SEPARATOR: &str = "----------------------------------------------------------";

/// Render the fixed-layout text report: a header with the target
/// probability and sample count, the range/average/median block, then
/// one bar line per bucket.
pub fn format_report(config: &RunConfig, stats: &Statistics, buckets: &[Bucket]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Target probability: 1/{} | Samples count: {}\n",
        fmt_number(config.target_probability_reverse),
        config.samples_count
    ));
    out.push_str("Random rolls necessary:\n");
    out.push_str(&format!("- range: [{};{}]\n", stats.min, stats.max));
    out.push_str(&format!("- average: {}\n", fmt_number(stats.mean)));
    out.push_str(&format!("- median: {}\n", fmt_number(stats.median)));
    out.push_str(SEPARATOR);
    out.push('\n');

    for bucket in buckets {
        // The unbounded tail bucket is displayed closed at the observed maximum.
        let to = bucket.to.min(stats.max as f64);
        let bar_len =
            (BAR_WIDTH * bucket.count as f64 / config.samples_count as f64).round() as usize;
        out.push_str(&format!(
            "[{:>6}{:<7}]  |{}|\n",
            bucket.from.trunc() as i64,
            format!(";{}", to.trunc() as i64),
            "#".repeat(bar_len)
        ));
    }

    out
}

/// At most two decimal places, trailing zeros trimmed.
fn fmt_number(value: f64) -> String {
    format!("{:.2}", value)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
