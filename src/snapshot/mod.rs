mod snapshot;
mod snapshottable;

pub use snapshot::Snapshot;
pub use snapshottable::Snapshottable;
