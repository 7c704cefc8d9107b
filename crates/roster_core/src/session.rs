//! Session command history backing single-level undo.
//!
//! # Responsibility
//! - Remember the most recently executed reversible commands.
//!
//! # Invariants
//! - The history never holds more than `capacity` entries; recording past
//!   the bound evicts the oldest entry.
//! - `take_previous` reads and clears the newest entry in one step.

use crate::service::model_manager::{ModelError, ModelManager};
use crate::store::RecordStore;
use std::collections::VecDeque;
use std::fmt::Debug;
use uuid::Uuid;

/// Default number of remembered commands (one level of undo).
pub const DEFAULT_HISTORY_CAPACITY: usize = 1;

/// Reversible command executed against a model.
pub trait UndoableCommand<S: RecordStore>: Debug {
    /// Short user-facing command word, for example `deletetag`.
    fn command_word(&self) -> &str;

    /// Reverts the effect this command had on `model`.
    fn undo(&self, model: &mut ModelManager<S>) -> Result<(), ModelError>;
}

/// One remembered command.
#[derive(Debug)]
pub struct HistoryEntry<C> {
    /// Correlation id used in log lines.
    pub id: Uuid,
    pub command: C,
}

/// Bounded stack of recently executed commands.
#[derive(Debug)]
pub struct SessionState<C> {
    capacity: usize,
    entries: VecDeque<HistoryEntry<C>>,
}

impl<C> Default for SessionState<C> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<C> SessionState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remembers `command` as the newest entry and returns its id.
    pub fn record(&mut self, command: C) -> Uuid {
        let id = Uuid::new_v4();
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry { id, command });
        id
    }

    pub fn previous(&self) -> Option<&C> {
        self.entries.back().map(|entry| &entry.command)
    }

    pub fn take_previous(&mut self) -> Option<HistoryEntry<C>> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
