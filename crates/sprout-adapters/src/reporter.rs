//! Reporter adapters.

use std::sync::{Arc, Mutex};

use sprout_core::application::ports::{Reporter, Verb};
use tracing::info;

/// Emits every report as an INFO event on target `sprout::report`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, verb: Verb, subject: &str) {
        info!(target: "sprout::report", verb = verb.as_str(), "{:>8}  {}", verb, subject);
    }
}

/// Records reports in memory, in order (testing).
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    records: Arc<Mutex<Vec<(Verb, String)>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Verb, String)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// `"verb subject"` lines.
    pub fn lines(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .map(|(verb, subject)| format!("{verb} {subject}"))
            .collect()
    }

    /// Index of the first record with `verb` whose subject contains `needle`.
    pub fn find(&self, verb: Verb, needle: &str) -> Option<usize> {
        self.records()
            .iter()
            .position(|(v, subject)| *v == verb && subject.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, verb: Verb, subject: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((verb, subject.to_string()));
        }
    }
}
