//! Scan orchestration: queue population, worker lifecycle, result
//! assembly

pub mod collector;
pub mod queue;
pub mod worker;

use crate::error::Result;
use crate::http::ProbeClient;
use crate::models::{ScanConfig, ScanReport};
use crate::wordlist;
use collector::ResultCollector;
use indicatif::{ProgressBar, ProgressStyle};
use queue::WorkQueue;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use url::Url;

/// Runs a full scan: loads the wordlist, drains it through a pool of
/// workers, and returns the accumulated report.
///
/// The wordlist missing is the only fatal error; an empty wordlist
/// completes immediately with an empty result set. Cancelling the
/// token stops the workers promptly and flags the report as
/// interrupted.
pub async fn run_scan(config: &ScanConfig, cancel: CancellationToken) -> Result<ScanReport> {
    let base = Url::parse(&config.target)?;
    let paths = wordlist::load_paths(&config.wordlist_path)?;

    let mut report = ScanReport::new(&config.target, paths.len());
    if paths.is_empty() {
        info!("wordlist is empty, nothing to scan");
        report.finish();
        return Ok(report);
    }

    let client = ProbeClient::from_config(config)?;
    let queue = Arc::new(WorkQueue::new());
    for path in paths {
        queue.enqueue(path);
    }

    let collector = Arc::new(ResultCollector::new());
    let workers = config.threads.max(1);
    info!(
        "starting scan of {} with {} workers over {} paths",
        config.target,
        workers,
        queue.len()
    );

    let progress = ProgressBar::new(report.paths_total as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("  {spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    progress.set_message("Probing paths...");

    let mut set = JoinSet::new();
    for id in 0..workers {
        set.spawn(worker::run_worker(
            id,
            base.clone(),
            Arc::clone(&queue),
            client.clone(),
            Arc::clone(&collector),
            progress.clone(),
            cancel.clone(),
        ));
    }

    while let Some(joined) = set.join_next().await {
        if let Err(e) = joined {
            error!("worker task panicked: {e}");
        }
    }
    progress.finish_and_clear();

    report.interrupted = cancel.is_cancelled();
    report.total_requests = client.request_count();
    report.matches = collector.snapshot();
    report.finish();

    if report.interrupted {
        info!(
            "scan interrupted: {} of {} paths probed, {} matches",
            report.paths_total - queue.outstanding(),
            report.paths_total,
            report.matches.len()
        );
    } else {
        info!(
            "scan complete: {} requests, {} matches",
            report.total_requests,
            report.matches.len()
        );
    }

    Ok(report)
}
