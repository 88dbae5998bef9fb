use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, warn};

use crate::snapshot::{Snapshot, Snapshottable};

use super::config::{HistoryConfig, DEFAULT_MAX_RETENTION};
use super::stats::HistoryStats;

/// Bounded, linear undo/redo history for one subject.
///
/// Holds snapshots in save order plus a cursor pointing at the snapshot the
/// subject currently reflects. Saving while the cursor is behind the end
/// discards the redo branch; saving past `max_retention` evicts the oldest
/// snapshots.
///
/// Navigation returns `Ok(false)` when there is nowhere to go and leaves the
/// history untouched. The subject is restored before the cursor moves, so a
/// failed restore also leaves the cursor where it was.
///
/// Not synchronized: callers sharing a manager must serialize access.
pub struct HistoryManager<T> {
    snapshots: VecDeque<Snapshot<T>>,
    cursor: Option<usize>,
    max_retention: usize,
}

impl<T> Default for HistoryManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryManager<T> {
    pub fn new() -> Self {
        Self::with_max_retention(DEFAULT_MAX_RETENTION)
    }

    /// A retention of 0 is raised to 1 so a saved state is always retained.
    pub fn with_max_retention(max_retention: usize) -> Self {
        let max_retention = if max_retention == 0 {
            warn!("history max_retention of 0 raised to 1");
            1
        } else {
            max_retention
        };
        HistoryManager {
            snapshots: VecDeque::new(),
            cursor: None,
            max_retention,
        }
    }

    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::with_max_retention(config.max_retention)
    }

    /// Capture the subject's state and make it the current entry.
    pub fn save_state<S>(&mut self, subject: &S)
    where
        S: Snapshottable<State = T>,
    {
        let snapshot = subject.create_snapshot();

        if let Some(cursor) = self.cursor {
            let discarded = self.snapshots.len() - (cursor + 1);
            if discarded > 0 {
                self.snapshots.truncate(cursor + 1);
                debug!(discarded, "history branch truncated");
            }
        }

        self.snapshots.push_back(snapshot);
        let mut cursor = self.snapshots.len() - 1;

        let excess = self.snapshots.len().saturating_sub(self.max_retention);
        if excess > 0 {
            self.snapshots.drain(..excess);
            cursor = cursor.saturating_sub(excess);
            debug!(evicted = excess, "history evicted oldest snapshots");
        }

        self.cursor = Some(cursor);
        debug!(len = self.snapshots.len(), cursor, "history state saved");
    }

    /// Step back one snapshot. Requires at least one snapshot before the cursor.
    pub fn undo<S>(&mut self, subject: &mut S) -> Result<bool, S::RestoreError>
    where
        S: Snapshottable<State = T>,
    {
        match self.cursor {
            Some(cursor) if cursor > 0 => self.move_to(cursor - 1, subject),
            _ => Ok(false),
        }
    }

    /// Step forward one snapshot after an undo.
    pub fn redo<S>(&mut self, subject: &mut S) -> Result<bool, S::RestoreError>
    where
        S: Snapshottable<State = T>,
    {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.snapshots.len() => self.move_to(cursor + 1, subject),
            _ => Ok(false),
        }
    }

    /// Jump directly to any retained snapshot.
    pub fn jump_to<S>(&mut self, index: usize, subject: &mut S) -> Result<bool, S::RestoreError>
    where
        S: Snapshottable<State = T>,
    {
        if index >= self.snapshots.len() {
            return Ok(false);
        }
        self.move_to(index, subject)
    }

    fn move_to<S>(&mut self, index: usize, subject: &mut S) -> Result<bool, S::RestoreError>
    where
        S: Snapshottable<State = T>,
    {
        subject.restore_from_snapshot(&self.snapshots[index])?;
        debug!(from = ?self.cursor, to = index, "history cursor moved");
        self.cursor = Some(index);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.snapshots.len())
    }

    pub fn current_snapshot(&self) -> Option<&Snapshot<T>> {
        self.cursor.and_then(|cursor| self.snapshots.get(cursor))
    }

    /// Position of the current snapshot, `None` when empty.
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_retention(&self) -> usize {
        self.max_retention
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
        debug!("history cleared");
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats {
            total: self.snapshots.len(),
            current_index: self.cursor,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            max_retention: self.max_retention,
            first_timestamp: self.snapshots.front().map(Snapshot::timestamp),
            last_timestamp: self.snapshots.back().map(Snapshot::timestamp),
            current_timestamp: self.current_snapshot().map(Snapshot::timestamp),
        }
    }
}

impl<T: Clone> HistoryManager<T> {
    /// Copy of every retained snapshot, oldest first.
    pub fn history(&self) -> Vec<Snapshot<T>> {
        self.snapshots.iter().cloned().collect()
    }
}

impl<T> fmt::Debug for HistoryManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryManager")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .field("max_retention", &self.max_retention)
            .finish()
    }
}

impl<T> fmt::Display for HistoryManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cursor {
            Some(cursor) => write!(
                f,
                "HistoryManager(history={}, current={})",
                self.snapshots.len(),
                cursor
            ),
            None => write!(f, "HistoryManager(history={}, current=-1)", self.snapshots.len()),
        }
    }
}
