use super::Snapshot;

/// Capability a subject implements to have its state tracked by a
/// [`HistoryManager`](crate::HistoryManager).
///
/// The manager never looks inside `State`; it only asks the subject to
/// produce a snapshot and, later, to restore itself from one. Restoring goes
/// through the subject so it can apply its own side effects (for example
/// bumping a last-modified marker) and reject inconsistent data.
pub trait Snapshottable {
    type State;
    type RestoreError;

    /// Capture the subject's current state.
    fn create_snapshot(&self) -> Snapshot<Self::State>;

    /// Restore the subject's state from a snapshot.
    fn restore_from_snapshot(
        &mut self,
        snapshot: &Snapshot<Self::State>,
    ) -> Result<(), Self::RestoreError>;
}
