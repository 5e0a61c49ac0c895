//! Low-stock alert queue (fixed-capacity circular buffer).

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::Item;
use crate::list::InventoryList;

/// Default number of alerts the queue can hold.
pub const ALERT_CAPACITY: usize = 100;

/// Projection of a low-stock item at the time alerts were rebuilt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub id: ItemId,
    pub name: String,
    pub qty: u32,
}

impl From<&Item> for LowStockAlert {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
            qty: item.qty(),
        }
    }
}

/// FIFO ring buffer of [`LowStockAlert`]s.
///
/// Entries beyond capacity are dropped: at most `capacity` low-stock items can
/// be reported at once.
#[derive(Debug, Clone)]
pub struct AlertQueue {
    buf: Box<[Option<LowStockAlert>]>,
    front: usize,
    len: usize,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::with_capacity(ALERT_CAPACITY)
    }

    /// Queue holding at most `capacity` alerts.
    ///
    /// A zero capacity is clamped to 1 (the modulo arithmetic needs a non-empty
    /// buffer); [`InventoryConfig::validate`](crate::InventoryConfig::validate)
    /// rejects zero before it gets here.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![None; capacity.max(1)].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    /// Clear, then enqueue every item below `threshold` in list order.
    ///
    /// Returns how many alerts were dropped because the queue filled up.
    pub fn rebuild(&mut self, list: &InventoryList, threshold: u32) -> usize {
        self.clear();
        let mut dropped = 0;
        for item in list.iter().filter(|i| i.is_low_stock(threshold)) {
            if !self.enqueue(LowStockAlert::from(item)) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            tracing::warn!(
                dropped,
                capacity = self.capacity(),
                "alert queue full; low-stock alerts dropped"
            );
        }
        dropped
    }

    /// Enqueue at the rear; fails with [`DomainError::QueueFull`] when full.
    pub fn try_enqueue(&mut self, alert: LowStockAlert) -> DomainResult<()> {
        if self.is_full() {
            return Err(DomainError::QueueFull {
                capacity: self.capacity(),
            });
        }
        let rear = (self.front + self.len) % self.capacity();
        self.buf[rear] = Some(alert);
        self.len += 1;
        Ok(())
    }

    /// Enqueue at the rear; a full queue drops the alert and returns `false`.
    pub fn enqueue(&mut self, alert: LowStockAlert) -> bool {
        self.try_enqueue(alert).is_ok()
    }

    /// Remove and return the oldest alert.
    pub fn dequeue(&mut self) -> Option<LowStockAlert> {
        if self.len == 0 {
            return None;
        }
        let alert = self.buf[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        alert
    }

    pub fn peek(&self) -> Option<&LowStockAlert> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.front].as_ref()
    }

    /// Oldest-first view; does not consume anything.
    pub fn iter(&self) -> impl Iterator<Item = &LowStockAlert> + '_ {
        (0..self.len).filter_map(move |i| self.buf[(self.front + i) % self.capacity()].as_ref())
    }

    pub fn clear(&mut self) {
        self.buf.iter_mut().for_each(|slot| *slot = None);
        self.front = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new()
    }
}
