use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// An immutable, timestamped capture of a subject's state.
///
/// Snapshots are only ever read after construction. They deliberately do not
/// implement `PartialEq`: two captures of identical state are still two
/// distinct history entries.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot<T> {
    state: T,
    timestamp: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    /// Capture `state`, stamped with the current time.
    pub fn new(state: T) -> Self {
        Self::with_timestamp(state, Utc::now())
    }

    pub fn with_timestamp(state: T, timestamp: DateTime<Utc>) -> Self {
        Snapshot { state, timestamp }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl<T: Serialize> Snapshot<T> {
    /// Flatten the snapshot into a plain key/value map for diagnostics and export.
    ///
    /// Struct states contribute one key per field; any other state is stored
    /// under `"state"`. The timestamp is always present as RFC 3339.
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut map = match serde_json::to_value(&self.state)? {
            Value::Object(fields) => fields,
            other => {
                let mut map = Map::new();
                map.insert("state".to_string(), other);
                map
            }
        };
        map.insert(
            "timestamp".to_string(),
            Value::String(self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)),
        );
        Ok(map)
    }
}
