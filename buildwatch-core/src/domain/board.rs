//! Aggregate status board
//!
//! The board holds the last observed pass/fail state per builder and is
//! the single source of truth for the aggregate "all green" flag. It is
//! owned by the poller instance and mutated between suspension points on
//! one task, so it needs no interior locking.

use std::collections::BTreeMap;

use crate::domain::builder::BuilderName;

/// Last-known build state per builder
///
/// An entry is only ever written by a successful status fetch; a failed
/// fetch leaves the prior entry in place (stale-but-available over
/// unknown). Entries are never removed for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    entries: BTreeMap<BuilderName, bool>,
}

impl StatusBoard {
    /// Creates an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latest observed state for a builder
    pub fn record(&mut self, name: BuilderName, succeeded: bool) {
        self.entries.insert(name, succeeded);
    }

    /// Last observed state for a builder, if it has ever been fetched
    pub fn get(&self, name: &BuilderName) -> Option<bool> {
        self.entries.get(name).copied()
    }

    /// True when every entry on the board is a success
    ///
    /// Builders that have never been fetched have no entry and do not
    /// participate, so an empty board is vacuously green. That weak point
    /// is inherited from the original widget and kept deliberately.
    pub fn all_green(&self) -> bool {
        self.entries.values().all(|&ok| ok)
    }

    /// Number of builders with a recorded state
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no builder has ever been fetched
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in builder-name order
    pub fn iter(&self) -> impl Iterator<Item = (&BuilderName, bool)> {
        self.entries.iter().map(|(name, &ok)| (name, ok))
    }
}
