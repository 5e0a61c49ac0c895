//! Inventory core: hand-built collections behind a single aggregate.
//!
//! - [`InventoryList`] — arena-backed singly linked list, the canonical item set
//! - [`IndexMap`] — id → slot index kept in step with the list
//! - [`OperationLog`] — bounded undo stack
//! - [`AlertQueue`] — bounded circular queue of low-stock alerts
//! - [`sort`] / [`Locator`] — stable merge sort and dual-mode lookup
//!
//! Everything is synchronous and in-memory (no IO besides the JSON export).

pub mod alerts;
pub mod config;
pub mod export;
pub mod index;
pub mod inventory;
pub mod item;
pub mod list;
pub mod search;
pub mod seed;
pub mod sort;
pub mod undo;

pub use alerts::{ALERT_CAPACITY, AlertQueue, LowStockAlert};
pub use config::InventoryConfig;
pub use export::{InventorySnapshot, InventorySummary};
pub use index::{IndexMap, SlotId};
pub use inventory::Inventory;
pub use item::{Item, ItemFields, LOW_STOCK_THRESHOLD};
pub use list::InventoryList;
pub use search::{Locator, LookupMode, binary_search};
pub use seed::{SEED_CATALOG, seed_items};
pub use sort::{SortField, sort};
pub use undo::{LogEntry, OperationLog, UNDO_CAPACITY};
