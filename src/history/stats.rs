use chrono::{DateTime, Utc};
use serde::Serialize;

/// Point-in-time summary of a history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryStats {
    pub total: usize,
    /// `None` when the history is empty.
    pub current_index: Option<usize>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub max_retention: usize,
    pub first_timestamp: Option<DateTime<Utc>>,
    pub last_timestamp: Option<DateTime<Utc>>,
    pub current_timestamp: Option<DateTime<Utc>>,
}
