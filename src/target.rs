use std::time::Duration;

use crate::metrics::Outcome;

// ─── HTTP target ─────────────────────────────────────────────────

/// One benchmarkable endpoint: a connection-pooled client plus a URL.
///
/// `probe` upholds the target contract: it never panics and never
/// propagates an error past the sampler. A 2xx response is a success;
/// any other status, or a transport failure, is a failure outcome.
pub struct HttpTarget {
    client: reqwest::Client,
    url: String,
}

impl HttpTarget {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one GET against the target.
    pub async fn probe(&self) -> Outcome {
        match self.client.get(&self.url).send().await {
            Ok(resp) if resp.status().is_success() => Outcome::Success,
            Ok(_) | Err(_) => Outcome::Failure,
        }
    }
}
