use http_latency_bench::metrics::summary::summarize;
use http_latency_bench::metrics::{Outcome, Sample, StatsError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ok(elapsed_ms: f64) -> Sample {
    Sample {
        elapsed_ms,
        outcome: Outcome::Success,
    }
}

fn failed(elapsed_ms: f64) -> Sample {
    Sample {
        elapsed_ms,
        outcome: Outcome::Failure,
    }
}

#[test]
fn test_counts_partition_the_sequence() {
    let samples = vec![ok(1.0), failed(2.0), ok(3.0), failed(4.0), failed(5.0)];
    let stats = summarize(&samples).unwrap();

    assert_eq!(stats.total, 5);
    assert_eq!(stats.successful, 2);
    assert_eq!(stats.failed, 3);
    assert_eq!(stats.successful + stats.failed, stats.total);
}

#[test]
fn test_sum_and_mean() {
    let samples = vec![ok(10.0), ok(20.0), ok(30.0), ok(40.0)];
    let stats = summarize(&samples).unwrap();

    assert!((stats.total_latency - 100.0).abs() < 1e-9);
    assert!((stats.avg_latency - 25.0).abs() < 1e-9);
}

#[test]
fn test_min_max_bound_every_duration() {
    let mut rng = StdRng::seed_from_u64(42);
    let samples: Vec<Sample> = (0..1000)
        .map(|_| ok(rng.gen_range(0.01..250.0)))
        .collect();
    let stats = summarize(&samples).unwrap();

    for s in &samples {
        assert!(stats.min_latency <= s.elapsed_ms);
        assert!(s.elapsed_ms <= stats.max_latency);
    }
}

#[test]
fn test_nearest_rank_percentiles_fixed_sequence() {
    // sorted [10, 20, 30, 40, 50], n = 5
    // p50: index floor(0.50 * 5) = 2 → 30
    // p90: index floor(0.90 * 5) = 4 → 50
    // p95: index floor(0.95 * 5) = 4 → 50
    // p99: index floor(0.99 * 5) = 4 → 50
    let samples = vec![ok(10.0), ok(20.0), ok(30.0), ok(40.0), ok(50.0)];
    let stats = summarize(&samples).unwrap();

    assert_eq!(stats.p50, 30.0);
    assert_eq!(stats.p90, 50.0);
    assert_eq!(stats.p95, 50.0);
    assert_eq!(stats.p99, 50.0);
}

#[test]
fn test_percentiles_sort_unsorted_input() {
    let samples = vec![ok(50.0), ok(10.0), ok(30.0), ok(20.0), ok(40.0)];
    let stats = summarize(&samples).unwrap();

    assert_eq!(stats.p50, 30.0);
    assert_eq!(stats.p90, 50.0);
}

#[test]
fn test_std_dev_is_population_not_sample() {
    // mean = 20; population variance = (100 + 0 + 100) / 3
    // population std-dev = sqrt(200/3) ≈ 8.1650
    // Bessel-corrected (wrong here) would be 10.
    let samples = vec![ok(10.0), ok(20.0), ok(30.0)];
    let stats = summarize(&samples).unwrap();

    assert!((stats.std_dev - 8.16496580927726).abs() < 1e-9);
    assert!((stats.std_dev - 10.0).abs() > 1.0);
}

#[test]
fn test_single_sample() {
    let stats = summarize(&[ok(7.5)]).unwrap();

    assert_eq!(stats.total, 1);
    assert_eq!(stats.min_latency, 7.5);
    assert_eq!(stats.max_latency, 7.5);
    assert_eq!(stats.std_dev, 0.0);
    assert_eq!(stats.p50, 7.5);
    assert_eq!(stats.p99, 7.5);
}

#[test]
fn test_empty_input_is_an_error() {
    assert_eq!(summarize(&[]).unwrap_err(), StatsError::EmptyInput);
}

#[test]
fn test_summarize_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let samples: Vec<Sample> = (0..200)
        .map(|i| {
            let d = rng.gen_range(0.1..50.0);
            if i % 7 == 0 {
                failed(d)
            } else {
                ok(d)
            }
        })
        .collect();

    let first = summarize(&samples).unwrap();
    let second = summarize(&samples).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_failed_requests_still_count_toward_latency() {
    // A failure is still a measurement: its duration participates in
    // every latency figure.
    let samples = vec![ok(10.0), failed(90.0)];
    let stats = summarize(&samples).unwrap();

    assert_eq!(stats.max_latency, 90.0);
    assert!((stats.total_latency - 100.0).abs() < 1e-9);
    assert!((stats.avg_latency - 50.0).abs() < 1e-9);
}
