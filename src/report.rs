use crate::metrics::SummaryStatistics;

// ─── Stateless report formatters ─────────────────────────────────
//
// Pure functions over a finished summary. The labelled text block is
// the established console format that downstream comparison tooling
// reads line by line, so label spelling and the two-decimal ` ms`
// values stay fixed.

/// Render the classic console block, one labelled metric per line.
pub fn render_text(stats: &SummaryStatistics) -> String {
    let mut out = String::with_capacity(512);

    out.push_str(&format!("Total requests: {}\n", stats.total));
    out.push_str(&format!("Successful requests: {}\n", stats.successful));
    out.push_str(&format!("Failed requests: {}\n", stats.failed));
    out.push_str(&format!("Total latency: {:.2} ms\n", stats.total_latency));
    out.push_str(&format!("Average latency: {:.2} ms\n", stats.avg_latency));
    out.push_str(&format!("Min latency: {:.2} ms\n", stats.min_latency));
    out.push_str(&format!("Max latency: {:.2} ms\n", stats.max_latency));
    out.push_str(&format!("Standard deviation: {:.2} ms\n", stats.std_dev));
    out.push_str(&format!("P50 latency: {:.2} ms\n", stats.p50));
    out.push_str(&format!("P90 latency: {:.2} ms\n", stats.p90));
    out.push_str(&format!("P95 latency: {:.2} ms\n", stats.p95));
    out.push_str(&format!("P99 latency: {:.2} ms\n", stats.p99));

    out
}

/// Render the summary as pretty-printed JSON using the camelCase
/// field names (`totalLatency`, `stdDev`, ...) of the report contract.
pub fn render_json(stats: &SummaryStatistics) -> String {
    // SummaryStatistics has no map keys or non-string-keyed fields,
    // so serialization cannot fail.
    serde_json::to_string_pretty(stats).unwrap_or_default()
}
