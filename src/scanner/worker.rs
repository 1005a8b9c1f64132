//! Worker loop and match classification

use crate::http::{ProbeClient, ProbeOutcome, ProbeResult};
use crate::models::Match;
use crate::scanner::collector::ResultCollector;
use crate::scanner::queue::WorkQueue;
use indicatif::ProgressBar;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

/// Status codes accepted by the match predicate. 301/302 stay listed
/// even though redirects are followed: a redirect without a usable
/// Location header still surfaces as the final status.
const MATCH_STATUSES: [u16; 3] = [200, 301, 302];

/// Keywords looked up in the (lowercased) response body
const MATCH_KEYWORDS: [&str; 2] = ["admin", "login"];

/// Judges whether a probe result indicates an admin/login surface
pub fn classify(result: &ProbeResult) -> Option<Match> {
    match &result.outcome {
        ProbeOutcome::Success { status, body }
            if MATCH_STATUSES.contains(status)
                && MATCH_KEYWORDS.iter().any(|kw| body.contains(kw)) =>
        {
            Some(Match {
                url: result.url.to_string(),
                status: *status,
            })
        }
        _ => None,
    }
}

/// One worker: drains the shared queue until it is empty or the scan
/// is cancelled.
///
/// Each iteration dequeues a path, resolves it against the base URL,
/// probes it, classifies the outcome, and acks the item. Probe
/// failures are consumed here; nothing a single path does can abort
/// the worker or the pool.
#[allow(clippy::too_many_arguments)]
pub async fn run_worker(
    id: usize,
    base: Url,
    queue: Arc<WorkQueue>,
    client: ProbeClient,
    collector: Arc<ResultCollector>,
    progress: ProgressBar,
    cancel: CancellationToken,
) {
    loop {
        if cancel.is_cancelled() {
            debug!("worker {id} stopping: scan cancelled");
            return;
        }

        let Some(path) = queue.dequeue() else {
            debug!("worker {id} stopping: queue drained");
            return;
        };

        let url = match base.join(&path) {
            Ok(url) => url,
            Err(e) => {
                warn!("skipping unresolvable path {path:?}: {e}");
                queue.ack();
                progress.inc(1);
                continue;
            }
        };

        // A cancellation between dequeue and probe leaves the item
        // un-acked; an aborted scan never reports completion anyway.
        if cancel.is_cancelled() {
            debug!("worker {id} stopping: scan cancelled");
            return;
        }

        debug!("testing {url}");
        let result = client.probe(url).await;

        if let Some(m) = classify(&result) {
            info!("Admin panel found: {} (Status: {})", m.url, m.status);
            collector.push(m);
        }

        queue.ack();
        progress.inc(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: u16, body: &str) -> ProbeResult {
        ProbeResult {
            url: Url::parse("http://example.test/admin").unwrap(),
            outcome: ProbeOutcome::Success {
                status,
                body: body.to_string(),
            },
        }
    }

    #[test]
    fn matches_keyword_on_accepted_statuses() {
        for status in [200, 301, 302] {
            let m = classify(&result(status, "welcome to the admin area"))
                .expect("should match");
            assert_eq!(m.status, status);
            assert_eq!(m.url, "http://example.test/admin");
        }
    }

    #[test]
    fn matches_login_keyword() {
        assert!(classify(&result(200, "please login to continue")).is_some());
    }

    #[test]
    fn rejects_other_statuses() {
        for status in [204, 401, 403, 404, 500] {
            assert!(classify(&result(status, "admin login")).is_none());
        }
    }

    #[test]
    fn rejects_body_without_keywords() {
        assert!(classify(&result(200, "nothing here")).is_none());
    }

    #[test]
    fn rejects_network_failures() {
        let url = Url::parse("http://example.test/admin").unwrap();
        let refused = ProbeResult {
            url: url.clone(),
            outcome: ProbeOutcome::NetworkError("connection refused".into()),
        };
        let timed_out = ProbeResult {
            url,
            outcome: ProbeOutcome::Timeout,
        };
        assert!(classify(&refused).is_none());
        assert!(classify(&timed_out).is_none());
    }
}
