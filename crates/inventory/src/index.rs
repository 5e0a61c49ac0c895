//! Secondary id index over the inventory list.

use std::collections::HashMap;

use stockroom_core::ItemId;

/// Handle to a node slot inside [`InventoryList`](crate::InventoryList).
///
/// Slots are stable for the lifetime of the item they hold, so a handle is a
/// non-owning reference to that item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

/// Hash map from item id to the slot holding the item.
///
/// Derived data: the list is authoritative and keeps this map in step with
/// every insert, delete and rebuild.
#[derive(Debug, Default, Clone)]
pub struct IndexMap {
    slots: HashMap<ItemId, SlotId>,
}

impl IndexMap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, id: ItemId) -> Option<SlotId> {
        self.slots.get(&id).copied()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Returns the slot previously mapped to `id`, if any.
    pub(crate) fn insert(&mut self, id: ItemId, slot: SlotId) -> Option<SlotId> {
        self.slots.insert(id, slot)
    }

    pub(crate) fn remove(&mut self, id: ItemId) -> Option<SlotId> {
        self.slots.remove(&id)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Indexed ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.slots.keys().copied()
    }
}
