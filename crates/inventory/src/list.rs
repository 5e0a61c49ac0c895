//! Primary item storage: a singly linked list laid out in an arena.
//!
//! Nodes live in a slot vector and link to each other by slot index. Freed
//! slots are recycled. The list owns its [`IndexMap`] so the two can never be
//! observed out of step.

use std::collections::HashSet;

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

use crate::index::{IndexMap, SlotId};
use crate::item::{Item, ItemFields};

#[derive(Debug, Clone)]
struct Node {
    item: Item,
    next: Option<SlotId>,
}

/// Ordered collection of items; new items become the head.
#[derive(Debug, Default, Clone)]
pub struct InventoryList {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<SlotId>,
    index: IndexMap,
}

impl InventoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the id index.
    pub fn index(&self) -> &IndexMap {
        &self.index
    }

    pub fn head(&self) -> Option<&Item> {
        self.head.and_then(|slot| self.get(slot))
    }

    /// Item stored in `slot`, if the slot is occupied.
    pub fn get(&self, slot: SlotId) -> Option<&Item> {
        self.node(slot).map(|n| &n.item)
    }

    /// Link `item` in as the new head.
    ///
    /// Fails with [`DomainError::DuplicateId`] (leaving the list untouched) if
    /// the id is already stored.
    pub fn insert_head(&mut self, item: Item) -> DomainResult<SlotId> {
        let id = item.id();
        if self.index.contains(id) {
            return Err(DomainError::duplicate(id));
        }
        Ok(self.link_head(item))
    }

    /// O(1) lookup through the index.
    pub fn find_by_id(&self, id: ItemId) -> Option<&Item> {
        self.index.get(id).and_then(|slot| self.get(slot))
    }

    /// Overwrite the mutable fields of an item in place.
    ///
    /// Returns the values that were replaced. The item keeps its slot, so the
    /// index entry stays valid.
    pub fn update_by_id(&mut self, id: ItemId, fields: ItemFields) -> DomainResult<ItemFields> {
        fields.validate()?;
        let slot = self.index.get(id).ok_or(DomainError::not_found(id))?;
        let node = self.node_mut(slot).ok_or(DomainError::not_found(id))?;
        Ok(node.item.replace_fields(fields))
    }

    /// Unlink and return the item with `id`.
    ///
    /// Walks from the head to find the predecessor, so this is O(n).
    pub fn delete_by_id(&mut self, id: ItemId) -> DomainResult<Item> {
        let target = self.index.get(id).ok_or(DomainError::not_found(id))?;

        let mut prev: Option<SlotId> = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            if slot == target {
                break;
            }
            prev = Some(slot);
            cursor = self.node(slot).and_then(|n| n.next);
        }
        if cursor != Some(target) {
            return Err(DomainError::not_found(id));
        }

        let node = self.nodes[target.0]
            .take()
            .ok_or(DomainError::not_found(id))?;
        match prev {
            None => self.head = node.next,
            Some(p) => {
                if let Some(p) = self.node_mut(p) {
                    p.next = node.next;
                }
            }
        }
        self.free.push(target.0);
        self.index.remove(id);

        Ok(node.item)
    }

    /// Walk the list from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Materialize every item in list order.
    pub fn to_ordered_sequence(&self) -> Vec<&Item> {
        self.iter().collect()
    }

    /// Replace the contents with `items`, in order (the first item becomes the
    /// head), and rebuild the index from scratch.
    ///
    /// A sequence containing a repeated id is rejected before anything changes.
    pub fn rebuild_from<I>(&mut self, items: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = Item>,
    {
        let items: Vec<Item> = items.into_iter().collect();

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(DomainError::duplicate(item.id()));
            }
        }

        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.index = IndexMap::with_capacity(items.len());

        // Head-insert from the back so the first item ends up in front.
        for item in items.into_iter().rev() {
            self.link_head(item);
        }
        Ok(())
    }

    /// Number of items, counted by walking the list.
    pub fn count(&self) -> usize {
        let n = self.iter().count();
        debug_assert_eq!(n, self.index.len(), "index out of step with list");
        n
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn link_head(&mut self, item: Item) -> SlotId {
        let id = item.id();
        let node = Node {
            item,
            next: self.head,
        };
        let slot = match self.free.pop() {
            Some(i) => {
                self.nodes[i] = Some(node);
                SlotId(i)
            }
            None => {
                self.nodes.push(Some(node));
                SlotId(self.nodes.len() - 1)
            }
        };
        self.head = Some(slot);
        self.index.insert(id, slot);
        slot
    }

    fn node(&self, slot: SlotId) -> Option<&Node> {
        self.nodes.get(slot.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: SlotId) -> Option<&mut Node> {
        self.nodes.get_mut(slot.0).and_then(Option::as_mut)
    }
}

/// Head-to-tail iterator over an [`InventoryList`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a InventoryList,
    cursor: Option<SlotId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.item)
    }
}

impl<'a> IntoIterator for &'a InventoryList {
    type Item = &'a Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(raw: u64) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    fn item(raw: u64, qty: u32, price: f64) -> Item {
        Item::new(id(raw), format!("item-{raw}"), qty, price).unwrap()
    }

    fn ids(list: &InventoryList) -> Vec<u64> {
        list.iter().map(|i| i.id().get()).collect()
    }

    fn assert_index_matches(list: &InventoryList) {
        let mut listed: Vec<u64> = ids(list);
        let mut indexed: Vec<u64> = list.index().ids().map(ItemId::get).collect();
        listed.sort_unstable();
        indexed.sort_unstable();
        assert_eq!(listed, indexed);
        for it in list.iter() {
            let slot = list.index().get(it.id()).unwrap();
            assert!(core::ptr::eq(list.get(slot).unwrap(), it));
        }
    }

    #[test]
    fn insert_head_puts_newest_first() {
        let mut list = InventoryList::new();
        list.insert_head(item(1, 5, 1.0)).unwrap();
        list.insert_head(item(2, 5, 1.0)).unwrap();
        list.insert_head(item(3, 5, 1.0)).unwrap();
        assert_eq!(ids(&list), vec![3, 2, 1]);
        assert_eq!(list.head().unwrap().id(), id(3));
        assert_eq!(list.count(), 3);
        assert_index_matches(&list);
    }

    #[test]
    fn duplicate_insert_is_rejected_without_change() {
        let mut list = InventoryList::new();
        list.insert_head(item(1, 5, 1.0)).unwrap();
        list.insert_head(item(2, 5, 1.0)).unwrap();

        let err = list.insert_head(item(1, 99, 9.0)).unwrap_err();
        assert_eq!(err, DomainError::DuplicateId(id(1)));
        assert_eq!(ids(&list), vec![2, 1]);
        assert_eq!(list.find_by_id(id(1)).unwrap().qty(), 5);
    }

    #[test]
    fn update_mutates_in_place_and_returns_previous() {
        let mut list = InventoryList::new();
        list.insert_head(item(1, 5, 1.0)).unwrap();
        let before = list.index().get(id(1)).unwrap();

        let previous = list
            .update_by_id(id(1), ItemFields::new("renamed", 50, 2.5).unwrap())
            .unwrap();
        assert_eq!(previous, ItemFields::new("item-1", 5, 1.0).unwrap());
        assert_eq!(list.index().get(id(1)), Some(before));
        let updated = list.find_by_id(id(1)).unwrap();
        assert_eq!((updated.name(), updated.qty(), updated.price()), ("renamed", 50, 2.5));
    }

    #[test]
    fn update_missing_or_invalid_fails_cleanly() {
        let mut list = InventoryList::new();
        list.insert_head(item(1, 5, 1.0)).unwrap();
        assert_eq!(
            list.update_by_id(id(9), ItemFields::new("x", 1, 1.0).unwrap()),
            Err(DomainError::NotFound(id(9)))
        );
        let bad = ItemFields {
            name: String::new(),
            qty: 1,
            price: 1.0,
        };
        assert!(matches!(list.update_by_id(id(1), bad), Err(DomainError::Validation(_))));
        assert_eq!(list.find_by_id(id(1)).unwrap().name(), "item-1");
    }

    #[test]
    fn delete_head_middle_and_tail() {
        let mut list = InventoryList::new();
        for raw in 1..=4 {
            list.insert_head(item(raw, 5, 1.0)).unwrap();
        }
        // [4, 3, 2, 1]
        assert_eq!(list.delete_by_id(id(3)).unwrap().id(), id(3));
        assert_eq!(ids(&list), vec![4, 2, 1]);
        list.delete_by_id(id(4)).unwrap();
        assert_eq!(ids(&list), vec![2, 1]);
        list.delete_by_id(id(1)).unwrap();
        assert_eq!(ids(&list), vec![2]);
        assert_eq!(list.delete_by_id(id(1)), Err(DomainError::NotFound(id(1))));
        assert_index_matches(&list);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = InventoryList::new();
        list.insert_head(item(1, 5, 1.0)).unwrap();
        let freed = list.index().get(id(1)).unwrap();
        list.delete_by_id(id(1)).unwrap();
        let slot = list.insert_head(item(2, 5, 1.0)).unwrap();
        assert_eq!(slot, freed);
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn rebuild_from_keeps_given_order() {
        let mut list = InventoryList::new();
        for raw in 1..=3 {
            list.insert_head(item(raw, 5, 1.0)).unwrap();
        }
        list.rebuild_from(vec![item(2, 5, 1.0), item(3, 5, 1.0), item(1, 5, 1.0)])
            .unwrap();
        assert_eq!(ids(&list), vec![2, 3, 1]);
        assert_index_matches(&list);
    }

    #[test]
    fn rebuild_from_rejects_duplicates_without_change() {
        let mut list = InventoryList::new();
        list.insert_head(item(1, 5, 1.0)).unwrap();
        let err = list
            .rebuild_from(vec![item(2, 5, 1.0), item(2, 6, 1.0)])
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateId(id(2)));
        assert_eq!(ids(&list), vec![1]);
    }

    #[test]
    fn empty_list() {
        let list = InventoryList::new();
        assert!(list.is_empty());
        assert_eq!(list.count(), 0);
        assert!(list.head().is_none());
        assert!(list.to_ordered_sequence().is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u64, u32),
        Delete(u64),
        Update(u64, u32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u64..16, 0u32..40).prop_map(|(i, q)| Op::Insert(i, q)),
            (1u64..16).prop_map(Op::Delete),
            (1u64..16, 0u32..40).prop_map(|(i, q)| Op::Update(i, q)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any mix of insert/delete/update the index holds
        /// exactly the ids in the list, each pointing at its own node.
        #[test]
        fn index_tracks_list(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut list = InventoryList::new();
            for op in ops {
                match op {
                    Op::Insert(raw, qty) => { let _ = list.insert_head(item(raw, qty, 1.0)); }
                    Op::Delete(raw) => { let _ = list.delete_by_id(id(raw)); }
                    Op::Update(raw, qty) => {
                        let _ = list.update_by_id(id(raw), ItemFields::new("u", qty, 2.0).unwrap());
                    }
                }
                assert_index_matches(&list);
                prop_assert_eq!(list.count(), list.index().len());
            }
        }
    }
}
