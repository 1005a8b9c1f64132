//! Synchronized match collection

use crate::models::Match;
use std::sync::Mutex;

/// Append-only list of matches shared by all workers.
///
/// Matches land in completion order, which is non-deterministic across
/// workers; consumers that need a stable order must sort.
#[derive(Debug, Default)]
pub struct ResultCollector {
    matches: Mutex<Vec<Match>>,
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one match
    pub fn push(&self, m: Match) {
        self.matches.lock().expect("collector lock poisoned").push(m);
    }

    /// Number of matches collected so far
    pub fn len(&self) -> usize {
        self.matches.lock().expect("collector lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies out the collected matches
    pub fn snapshot(&self) -> Vec<Match> {
        self.matches
            .lock()
            .expect("collector lock poisoned")
            .clone()
    }
}
