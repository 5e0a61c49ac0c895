//! Bounded undo history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::{Item, ItemFields};
use crate::list::InventoryList;

/// Default number of operations kept for undo.
pub const UNDO_CAPACITY: usize = 10;

/// A reversible mutation, recorded with what is needed to invert it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEntry {
    /// An item was inserted; undo deletes it.
    Added { item: Item },
    /// An item was deleted; undo re-inserts this snapshot as head.
    Deleted { item: Item },
    /// An item was updated; undo restores `previous`.
    Updated { id: ItemId, previous: ItemFields },
}

impl LogEntry {
    pub fn item_id(&self) -> ItemId {
        match self {
            LogEntry::Added { item } | LogEntry::Deleted { item } => item.id(),
            LogEntry::Updated { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LogEntry::Added { .. } => "added",
            LogEntry::Deleted { .. } => "deleted",
            LogEntry::Updated { .. } => "updated",
        }
    }
}

/// LIFO stack with a fixed depth.
///
/// Pushing onto a full log silently discards the oldest entry: history is
/// bounded, the newest operation is always recorded.
#[derive(Debug, Clone)]
pub struct OperationLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::with_capacity(UNDO_CAPACITY)
    }

    /// Log holding at most `capacity` entries.
    ///
    /// A zero capacity is clamped to 1 so the latest operation can always be
    /// undone; [`InventoryConfig::validate`](crate::InventoryConfig::validate)
    /// rejects zero before it gets here.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an entry, returning the evicted oldest entry if the log was full.
    pub fn push(&mut self, entry: LogEntry) -> Option<LogEntry> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    pub fn pop(&mut self) -> DomainResult<LogEntry> {
        self.entries.pop_back().ok_or(DomainError::EmptyLog)
    }

    /// Most recent entry without removing it.
    pub fn peek(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Pop the most recent entry and apply its inverse to `list`.
    ///
    /// Nothing is pushed back onto the log. If the inverse cannot be applied the
    /// entry is restored and the error returned, leaving both log and list as
    /// they were.
    pub fn undo(&mut self, list: &mut InventoryList) -> DomainResult<LogEntry> {
        let entry = self.pop()?;
        let applied = match &entry {
            LogEntry::Added { item } => list.delete_by_id(item.id()).map(|_| ()),
            LogEntry::Deleted { item } => list.insert_head(item.clone()).map(|_| ()),
            LogEntry::Updated { id, previous } => {
                list.update_by_id(*id, previous.clone()).map(|_| ())
            }
        };
        match applied {
            Ok(()) => Ok(entry),
            Err(err) => {
                self.entries.push_back(entry);
                Err(err)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::new()
    }
}
