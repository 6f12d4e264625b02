pub mod summary;

pub use summary::{StatsError, SummaryStatistics};

/// How one request turned out, as seen by the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// HTTP 2xx response.
    Success,
    /// Non-2xx response or transport error. Still measured.
    Failure,
}

/// A single timing observation recorded by the sampler.
/// The request loop creates these and `summarize` reduces them.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// Wall time of the request in milliseconds (monotonic clock).
    pub elapsed_ms: f64,
    /// Whether the request counted as successful.
    pub outcome: Outcome,
}

impl Sample {
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}
