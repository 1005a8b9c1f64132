//! Version check and connectivity preflight

use crate::error::Result;
use colored::Colorize;
use std::time::Duration;
use tracing::warn;

const VERSION_URL: &str = "https://raw.githubusercontent.com/janus-scanner/janus/main/VERSION";
const CONNECTIVITY_URL: &str = "https://www.google.com";

/// Fetches the published version string and reports whether a newer
/// release exists. Does not modify the installation.
pub async fn check_for_updates() -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let latest = client
        .get(VERSION_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let latest = latest.trim();
    let current = env!("CARGO_PKG_VERSION");

    if latest != current {
        println!(
            "  {}",
            format!("New version available: {latest} (current: {current})").yellow()
        );
    } else {
        println!(
            "  {}",
            format!("You are using the latest version: {current}").green()
        );
    }

    Ok(())
}

/// Probes a well-known URL to gauge internet reachability.
///
/// Failure is only a warning: targets on isolated networks are a
/// normal use of this tool.
pub async fn check_connectivity(timeout_secs: u64) {
    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            warn!("could not build connectivity check client: {e}");
            return;
        }
    };

    if client.get(CONNECTIVITY_URL).send().await.is_err() {
        warn!("no internet connectivity detected; scans of external targets may fail");
    }
}
