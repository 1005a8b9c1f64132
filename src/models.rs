//! Core data models for the Janus scanner

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Configuration for a scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Target base URL to scan
    pub target: String,
    /// Number of concurrent workers (minimum 1)
    pub threads: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// Path to the wordlist file
    pub wordlist_path: String,
    /// Path the result file is written to
    pub output_path: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            threads: 5,
            timeout_secs: 5,
            user_agent: "Janus-Scanner/0.1.0".to_string(),
            wordlist_path: "wordlist/admin_paths.txt".to_string(),
            output_path: "results/admin_results.txt".to_string(),
        }
    }
}

/// A probed URL judged to be an admin or login surface
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Match {
    /// The resolved URL that responded
    pub url: String,
    /// Final HTTP status code of the response
    pub status: u16,
}

/// Result of a complete scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Target base URL
    pub target: String,
    /// Scan start time (local timezone)
    pub started_at: DateTime<Local>,
    /// Scan end time (local timezone)
    pub finished_at: Option<DateTime<Local>>,
    /// All matches found, in completion order
    pub matches: Vec<Match>,
    /// Number of paths loaded from the wordlist
    pub paths_total: usize,
    /// Total HTTP requests issued
    pub total_requests: u64,
    /// True when the scan was cancelled before draining the queue
    pub interrupted: bool,
}

impl ScanReport {
    /// Creates a new ScanReport for the given target
    pub fn new(target: impl Into<String>, paths_total: usize) -> Self {
        Self {
            target: target.into(),
            started_at: Local::now(),
            finished_at: None,
            matches: Vec::new(),
            paths_total,
            total_requests: 0,
            interrupted: false,
        }
    }

    /// Marks the scan as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Local::now());
    }

    /// Wall-clock duration of the scan, if finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }
}
