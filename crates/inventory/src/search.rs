//! Item lookup by id, through the hash index or by binary search.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, Entity, ItemId};

use crate::item::Item;
use crate::list::InventoryList;
use crate::sort::{SortField, sort};

/// Lookup strategy.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// O(1) through the id index.
    #[default]
    Hash,
    /// O(n log n) materialize-and-sort, then O(log n) binary search.
    BinarySearch,
}

impl LookupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupMode::Hash => "hash",
            LookupMode::BinarySearch => "binary",
        }
    }
}

impl FromStr for LookupMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(LookupMode::Hash),
            "binary" | "binary_search" | "bsearch" => Ok(LookupMode::BinarySearch),
            other => Err(DomainError::validation(format!("unknown lookup mode '{other}'"))),
        }
    }
}

/// Caller-controlled lookup mode plus the lookup itself.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Locator {
    mode: LookupMode,
}

impl Locator {
    pub fn new(mode: LookupMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LookupMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: LookupMode) {
        self.mode = mode;
    }

    /// Switch to the other mode and return it.
    pub fn toggle(&mut self) -> LookupMode {
        self.mode = match self.mode {
            LookupMode::Hash => LookupMode::BinarySearch,
            LookupMode::BinarySearch => LookupMode::Hash,
        };
        self.mode
    }

    /// Find `id` in `list` using the current mode.
    ///
    /// Both modes resolve to the same stored item.
    pub fn locate<'a>(&self, list: &'a InventoryList, id: ItemId) -> Option<&'a Item> {
        match self.mode {
            LookupMode::Hash => list.find_by_id(id),
            LookupMode::BinarySearch => {
                let by_id = sort(list.to_ordered_sequence(), SortField::Id, true);
                binary_search(&by_id, id)
            }
        }
    }
}

/// Classic three-way binary search over items sorted by ascending id.
pub fn binary_search<'a>(sorted: &[&'a Item], id: ItemId) -> Option<&'a Item> {
    if sorted.is_empty() {
        return None;
    }
    let mut low = 0usize;
    let mut high = sorted.len() - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        match sorted[mid].id().cmp(&id) {
            Ordering::Equal => return Some(sorted[mid]),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                // `high` would go below zero; the search space is exhausted.
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }
    None
}
