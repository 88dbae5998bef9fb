use serde::{Deserialize, Serialize};

/// Default number of snapshots a history retains.
pub const DEFAULT_MAX_RETENTION: usize = 50;

/// Retention settings for a [`HistoryManager`](super::HistoryManager).
///
/// Deserializes from any serde format; missing fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub max_retention: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            max_retention: DEFAULT_MAX_RETENTION,
        }
    }
}

impl HistoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retention(mut self, max_retention: usize) -> Self {
        self.max_retention = max_retention;
        self
    }
}
