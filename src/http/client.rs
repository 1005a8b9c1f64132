//! HTTP probe client with bounded timeouts and request counting

use crate::error::Result;
use crate::models::ScanConfig;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Outcome of a single probe.
///
/// Transport failures are data, not errors: workers match on this
/// exhaustively instead of catching exceptions at the call site.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    /// Final response received after any redirects. The body is
    /// lowercased so the classifier can match keywords directly.
    Success { status: u16, body: String },
    /// DNS failure, refused connection, TLS failure, or any other
    /// transport error short of a timeout
    NetworkError(String),
    /// The configured per-request deadline elapsed
    Timeout,
}

/// Result of probing one resolved URL
#[derive(Debug, Clone)]
pub struct ProbeResult {
    /// The URL that was probed
    pub url: Url,
    /// What came back
    pub outcome: ProbeOutcome,
}

/// HTTP client wrapper issuing one GET per candidate path.
///
/// Stateless apart from the request counter; safe to clone across
/// workers. Certificate verification is disabled: scan targets are
/// routinely self-signed or misconfigured.
#[derive(Clone)]
pub struct ProbeClient {
    client: Client,
    request_count: Arc<AtomicU64>,
}

impl ProbeClient {
    /// Creates a new ProbeClient from scan configuration
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self {
            client,
            request_count: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Probes a single URL.
    ///
    /// Never returns an error: every transport failure maps into the
    /// outcome. Classification and logging are the caller's concern.
    pub async fn probe(&self, url: Url) -> ProbeResult {
        self.request_count.fetch_add(1, Ordering::Relaxed);

        let outcome = match self.client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => ProbeOutcome::Success {
                        status,
                        body: body.to_lowercase(),
                    },
                    Err(e) => outcome_from_error(e),
                }
            }
            Err(e) => outcome_from_error(e),
        };

        ProbeResult { url, outcome }
    }

    /// Returns the total number of requests issued
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }
}

fn outcome_from_error(e: reqwest::Error) -> ProbeOutcome {
    if e.is_timeout() {
        ProbeOutcome::Timeout
    } else {
        ProbeOutcome::NetworkError(e.to_string())
    }
}
