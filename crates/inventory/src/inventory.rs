//! The `Inventory` aggregate: one object owning the list, its index, the undo
//! history, the alert queue and the lookup mode.

use chrono::{DateTime, Utc};

use stockroom_core::{DomainResult, Entity, ItemId};

use crate::alerts::AlertQueue;
use crate::config::InventoryConfig;
use crate::export::{InventorySnapshot, InventorySummary};
use crate::item::{Item, ItemFields, LOW_STOCK_THRESHOLD};
use crate::list::{InventoryList, Iter};
use crate::search::{Locator, LookupMode};
use crate::seed::seed_items;
use crate::sort::{SortField, sort};
use crate::undo::{LogEntry, OperationLog};

/// Entry point for the presentation layer.
///
/// Direct mutations (`add_item`, `update_item`, `delete_item`) are recorded
/// for undo; undo itself, seeding and sorting are not.
#[derive(Debug, Clone)]
pub struct Inventory {
    list: InventoryList,
    log: OperationLog,
    alerts: AlertQueue,
    locator: Locator,
    low_stock_threshold: u32,
}

impl Inventory {
    /// Empty inventory with default capacities.
    pub fn new() -> Self {
        Self {
            list: InventoryList::new(),
            log: OperationLog::new(),
            alerts: AlertQueue::new(),
            locator: Locator::default(),
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }

    /// Default capacities, preloaded with the built-in catalog.
    pub fn with_seed_catalog() -> DomainResult<Self> {
        let mut inventory = Self::new();
        inventory.seed()?;
        Ok(inventory)
    }

    pub fn from_config(config: &InventoryConfig) -> DomainResult<Self> {
        config.validate()?;
        let mut inventory = Self {
            list: InventoryList::new(),
            log: OperationLog::with_capacity(config.undo_capacity),
            alerts: AlertQueue::with_capacity(config.alert_capacity),
            locator: Locator::default(),
            low_stock_threshold: config.low_stock_threshold,
        };
        if config.seed_catalog {
            inventory.seed()?;
        }
        Ok(inventory)
    }

    fn seed(&mut self) -> DomainResult<()> {
        for item in seed_items()? {
            self.list.insert_head(item)?;
        }
        tracing::debug!(items = self.list.count(), "seed catalog loaded");
        Ok(())
    }

    /// Insert `item` as the new head.
    pub fn add_item(&mut self, item: Item) -> DomainResult<()> {
        let id = item.id();
        self.list.insert_head(item.clone())?;
        self.record(LogEntry::Added { item });
        tracing::debug!(item_id = %id, "item added");
        Ok(())
    }

    /// Overwrite the fields of item `id`, returning the replaced values.
    pub fn update_item(&mut self, id: ItemId, fields: ItemFields) -> DomainResult<ItemFields> {
        let previous = self.list.update_by_id(id, fields)?;
        self.record(LogEntry::Updated {
            id,
            previous: previous.clone(),
        });
        tracing::debug!(item_id = %id, "item updated");
        Ok(previous)
    }

    /// Remove item `id`, returning it.
    pub fn delete_item(&mut self, id: ItemId) -> DomainResult<Item> {
        let removed = self.list.delete_by_id(id)?;
        self.record(LogEntry::Deleted {
            item: removed.clone(),
        });
        tracing::debug!(item_id = %id, "item deleted");
        Ok(removed)
    }

    /// Revert the most recent recorded mutation.
    pub fn undo(&mut self) -> DomainResult<LogEntry> {
        let entry = self.log.undo(&mut self.list)?;
        tracing::debug!(
            kind = entry.kind(),
            item_id = %entry.item_id(),
            remaining = self.log.len(),
            "operation undone"
        );
        Ok(entry)
    }

    fn record(&mut self, entry: LogEntry) {
        if let Some(evicted) = self.log.push(entry) {
            tracing::debug!(
                evicted_kind = evicted.kind(),
                evicted_item = %evicted.item_id(),
                "undo history full; oldest entry discarded"
            );
        }
    }

    /// O(1) lookup through the index, whatever the lookup mode.
    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.list.find_by_id(id)
    }

    /// Lookup using the current [`LookupMode`].
    pub fn locate(&self, id: ItemId) -> Option<&Item> {
        self.locator.locate(&self.list, id)
    }

    pub fn lookup_mode(&self) -> LookupMode {
        self.locator.mode()
    }

    pub fn set_lookup_mode(&mut self, mode: LookupMode) {
        self.locator.set_mode(mode);
    }

    pub fn toggle_lookup_mode(&mut self) -> LookupMode {
        self.locator.toggle()
    }

    /// Reorder the list itself by `field`.
    pub fn sort_by(&mut self, field: SortField, ascending: bool) -> DomainResult<()> {
        let sorted = sort(self.list.iter().cloned().collect::<Vec<_>>(), field, ascending);
        self.list.rebuild_from(sorted)?;
        tracing::debug!(field = field.as_str(), ascending, "inventory reordered");
        Ok(())
    }

    /// Sorted view that leaves list order untouched.
    pub fn sorted_view(&self, field: SortField, ascending: bool) -> Vec<&Item> {
        sort(self.list.to_ordered_sequence(), field, ascending)
    }

    /// Rebuild the alert queue from the current list and return it.
    pub fn low_stock_alerts(&mut self) -> &AlertQueue {
        self.alerts.rebuild(&self.list, self.low_stock_threshold);
        &self.alerts
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    pub fn count(&self) -> usize {
        self.list.count()
    }

    /// Items in list order.
    pub fn items(&self) -> Iter<'_> {
        self.list.iter()
    }

    pub fn list(&self) -> &InventoryList {
        &self.list
    }

    /// Number of operations that can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.log.len()
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_items(&self.list, self.low_stock_threshold)
    }

    pub fn export_snapshot(&self, exported_at: DateTime<Utc>) -> InventorySnapshot {
        InventorySnapshot::capture(&self.list, self.low_stock_threshold, exported_at)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
