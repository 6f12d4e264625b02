use clap::Parser;

// ─── CLI configuration ───────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "http-latency-bench",
    about = "Sequential single-client HTTP latency benchmark"
)]
pub struct Args {
    /// Total number of requests to issue, one at a time
    #[arg(long, default_value_t = 500_000)]
    pub requests: u64,

    /// Benchmark this URL instead of starting the built-in server
    #[arg(long)]
    pub url: Option<String>,

    /// Port for the built-in target server (0 = ephemeral)
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Emit the summary as JSON instead of the labelled text block
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Reject configurations that would make the summary undefined
    /// before any network activity happens.
    pub fn validate(&self) -> Result<(), String> {
        if self.requests == 0 {
            return Err("requests must be at least 1".into());
        }
        Ok(())
    }
}
