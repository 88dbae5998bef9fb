//! Profiles - the user-profile subject and the service that edits it.
//!
//! [`UserProfile`] implements [`Snapshottable`](crate::Snapshottable), so its
//! edits can be tracked by a [`HistoryManager`](crate::HistoryManager).
//! [`ProfileService`] is the caller layer: it records history around every
//! edit, maps undo/redo onto the manager and persists restored profiles
//! through a [`ProfileStore`].

mod error;
mod in_memory;
mod profile;
mod service;
mod store;
mod update;

pub use error::ProfileError;
pub use in_memory::InMemoryProfileStore;
pub use profile::{ProfileSnapshot, ProfileState, UserProfile};
pub use service::ProfileService;
pub use store::ProfileStore;
pub use update::ProfileUpdate;
