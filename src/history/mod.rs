//! History - bounded undo/redo navigation over subject snapshots.
//!
//! A [`HistoryManager`] keeps an ordered list of [`Snapshot`](crate::Snapshot)s
//! and a cursor into it. Subjects plug in through
//! [`Snapshottable`](crate::Snapshottable).
//!
//! ## Example
//!
//! ```ignore
//! let mut history = HistoryManager::with_max_retention(3);
//! history.save_state(&profile);
//! profile.apply(ProfileUpdate::new().name("Bob"))?;
//! history.save_state(&profile);
//!
//! assert!(history.undo(&mut profile)?);
//! assert_eq!(profile.name(), "Alice");
//! ```

mod config;
mod manager;
mod stats;

pub use config::{HistoryConfig, DEFAULT_MAX_RETENTION};
pub use manager::HistoryManager;
pub use stats::HistoryStats;
