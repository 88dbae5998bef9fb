//! Bounded undo/redo history for user profile edits.
//!
//! - [`Snapshot`] is an immutable, timestamped capture of a subject's state.
//! - [`Snapshottable`] is what a subject implements to be tracked.
//! - [`HistoryManager`] sequences snapshots with a cursor, truncating the redo
//!   branch on new saves and evicting the oldest entries past its retention.
//! - [`ProfileService`] drives a history per [`UserProfile`], persisting
//!   restored profiles through a [`ProfileStore`].

mod history;
mod profile;
mod snapshot;

pub use history::{HistoryConfig, HistoryManager, HistoryStats, DEFAULT_MAX_RETENTION};
pub use profile::{
    InMemoryProfileStore, ProfileError, ProfileService, ProfileSnapshot, ProfileState,
    ProfileStore, ProfileUpdate, UserProfile,
};
pub use snapshot::{Snapshot, Snapshottable};
