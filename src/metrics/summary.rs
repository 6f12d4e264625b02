use std::fmt;

use serde::Serialize;

use super::Sample;

// ─── Percentile cut points ───────────────────────────────────────

/// The fixed fractions reported in every summary.
const P50: f64 = 0.50;
const P90: f64 = 0.90;
const P95: f64 = 0.95;
const P99: f64 = 0.99;

// ─── Public types ────────────────────────────────────────────────

/// Read-only snapshot reduced from a finished sample sequence.
///
/// Field spelling in the serialized form (camelCase) is the contract
/// with any downstream report consumer; all latencies are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub total_latency: f64,
    pub avg_latency: f64,
    pub min_latency: f64,
    pub max_latency: f64,
    pub std_dev: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// Summarization was attempted over zero samples.
    EmptyInput,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot summarize an empty sample sequence"),
        }
    }
}

impl std::error::Error for StatsError {}

// ─── Summarization ───────────────────────────────────────────────

/// Reduce a finished sample sequence into a [`SummaryStatistics`].
///
/// Pure function: the same slice always yields the same snapshot.
/// Standard deviation uses the population formula (divisor = n, not
/// n - 1) and percentiles are nearest-rank (value at `floor(f * n)`
/// into the sorted durations, no interpolation) so that numbers match
/// the established comparison baselines.
pub fn summarize(samples: &[Sample]) -> Result<SummaryStatistics, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let total = samples.len() as u64;
    let successful = samples.iter().filter(|s| s.is_success()).count() as u64;

    let total_latency: f64 = samples.iter().map(|s| s.elapsed_ms).sum();
    let avg_latency = total_latency / total as f64;

    let min_latency = samples
        .iter()
        .map(|s| s.elapsed_ms)
        .fold(f64::INFINITY, f64::min);
    let max_latency = samples
        .iter()
        .map(|s| s.elapsed_ms)
        .fold(f64::NEG_INFINITY, f64::max);

    let variance = samples
        .iter()
        .map(|s| {
            let d = s.elapsed_ms - avg_latency;
            d * d
        })
        .sum::<f64>()
        / total as f64;
    let std_dev = variance.sqrt();

    let mut sorted: Vec<f64> = samples.iter().map(|s| s.elapsed_ms).collect();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    Ok(SummaryStatistics {
        total,
        successful,
        failed: total - successful,
        total_latency,
        avg_latency,
        min_latency,
        max_latency,
        std_dev,
        p50: percentile(&sorted, P50),
        p90: percentile(&sorted, P90),
        p95: percentile(&sorted, P95),
        p99: percentile(&sorted, P99),
    })
}

/// Nearest-rank percentile: the element at index `floor(f * n)` of the
/// ascending-sorted durations. The index is clamped to `n - 1` so a
/// fraction whose product rounds up to `n` cannot read past the end.
///
/// Precondition: `sorted` is non-empty and sorted ascending
/// (callers go through `summarize`, which guarantees both).
fn percentile(sorted: &[f64], f: f64) -> f64 {
    let idx = (f * sorted.len() as f64).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}
