//! Observer callbacks recording per-repository decisions

use std::sync::Mutex;
use tracing::info;

/// Records whether a discovered repository was taken up by the host
///
/// Purely observational: nothing in the navigator reads what a witness stores.
pub trait Witness: Send + Sync {
    fn record(&self, project_name: &str, is_match: bool);
}

/// Witness that writes each decision to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggerWitness;

impl Witness for LoggerWitness {
    fn record(&self, project_name: &str, is_match: bool) {
        if is_match {
            info!(repository = project_name, "proposed repository");
        } else {
            info!(repository = project_name, "ignored repository");
        }
    }
}

/// Witness that keeps every decision in memory, in call order
#[derive(Debug, Default)]
pub struct RecordingWitness {
    records: Mutex<Vec<(String, bool)>>,
}

impl RecordingWitness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(String, bool)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn matched(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|(name, is_match)| is_match.then_some(name))
            .collect()
    }
}

impl Witness for RecordingWitness {
    fn record(&self, project_name: &str, is_match: bool) {
        if let Ok(mut records) = self.records.lock() {
            records.push((project_name.to_string(), is_match));
        }
    }
}
