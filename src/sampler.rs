use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::Sample;

// ─── Sequential request driver ───────────────────────────────────

/// Drive `count` request/measure cycles against one target, strictly
/// one after another, and return the completed sample sequence.
///
/// Each iteration's timer starts only after the previous request has
/// fully resolved, so the numbers reflect bounded single-client load
/// rather than throughput under contention. The duration is recorded
/// whatever the outcome: a failed request is still a measured request.
///
/// `completed` is bumped once per finished iteration so a progress
/// reporter on another task can watch the run without touching the
/// sample vector.
pub async fn run<F, Fut>(mut target: F, count: u64, completed: Arc<AtomicU64>) -> Vec<Sample>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = crate::metrics::Outcome>,
{
    let mut samples = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let start = Instant::now();
        let outcome = target().await;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        samples.push(Sample {
            elapsed_ms,
            outcome,
        });
        completed.fetch_add(1, Ordering::Relaxed);
    }

    samples
}
