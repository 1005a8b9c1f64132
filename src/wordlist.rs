//! Wordlist loading

use crate::error::{JanusError, Result};
use std::path::Path;

/// Loads candidate paths from a wordlist file, one path per line.
///
/// Lines are trimmed and blank lines dropped; order is preserved. A
/// missing or unreadable file is the one fatal setup error of a scan.
pub fn load_paths(path: &str) -> Result<Vec<String>> {
    if !Path::new(path).exists() {
        return Err(JanusError::WordlistNotFound(path.to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|_| JanusError::WordlistNotFound(path.to_string()))?;

    Ok(content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn skips_blank_lines_and_trims() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "/admin\n\n  /login  \n\t\n/hidden\n").expect("write");

        let paths = load_paths(file.path().to_str().unwrap()).expect("load");
        assert_eq!(paths, vec!["/admin", "/login", "/hidden"]);
    }

    #[test]
    fn empty_file_yields_empty_list() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let paths = load_paths(file.path().to_str().unwrap()).expect("load");
        assert!(paths.is_empty());
    }

    #[test]
    fn missing_file_is_wordlist_not_found() {
        let err = load_paths("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, JanusError::WordlistNotFound(p) if p == "does/not/exist.txt"));
    }
}
