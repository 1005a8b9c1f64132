//! Common test utilities

use janus::models::ScanConfig;
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates a test ScanConfig pointing to a wiremock server
pub fn test_config(target: &str, wordlist_path: &str) -> ScanConfig {
    ScanConfig {
        target: target.to_string(),
        threads: 4,
        timeout_secs: 5,
        user_agent: "Janus-Test/0.1.0".to_string(),
        wordlist_path: wordlist_path.to_string(),
        output_path: "results/test_results.txt".to_string(),
    }
}

/// Writes a wordlist fixture; the file lives as long as the handle
pub fn write_wordlist(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create wordlist fixture");
    for line in lines {
        writeln!(file, "{line}").expect("write wordlist fixture");
    }
    file.flush().expect("flush wordlist fixture");
    file
}
