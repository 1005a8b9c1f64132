//! Configuration management for the Janus scanner

use crate::error::Result;
use crate::models::ScanConfig;
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure matching default.toml
#[derive(Debug, Deserialize)]
struct FileConfig {
    scan: Option<ScanSection>,
    wordlist: Option<WordlistSection>,
    output: Option<OutputSection>,
}

#[derive(Debug, Deserialize)]
struct ScanSection {
    threads: Option<usize>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WordlistSection {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OutputSection {
    path: Option<String>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let content = std::fs::read_to_string(path)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut config = ScanConfig::default();

    if let Some(scan) = file_config.scan {
        if let Some(threads) = scan.threads {
            config.threads = threads;
        }
        if let Some(timeout) = scan.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(ua) = scan.user_agent {
            config.user_agent = ua;
        }
    }

    if let Some(wordlist) = file_config.wordlist {
        if let Some(path) = wordlist.path {
            config.wordlist_path = path;
        }
    }

    if let Some(output) = file_config.output {
        if let Some(path) = output.path {
            config.output_path = path;
        }
    }

    Ok(config)
}

/// Merges CLI arguments into an existing ScanConfig
pub fn merge_cli_args(
    config: &mut ScanConfig,
    target: String,
    threads: Option<usize>,
    timeout: Option<u64>,
    paths: Option<String>,
    output: Option<String>,
) {
    config.target = target;

    if let Some(t) = threads {
        config.threads = t.max(1);
    }
    if let Some(t) = timeout {
        config.timeout_secs = t;
    }
    if let Some(p) = paths {
        config.wordlist_path = p;
    }
    if let Some(o) = output {
        config.output_path = o;
    }
}
