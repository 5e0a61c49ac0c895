//! One-way export of the current inventory for other views (statistics,
//! forecasting) to consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::list::InventoryList;

/// Aggregate figures over the whole inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub item_count: usize,
    pub total_units: u64,
    pub total_value: f64,
    pub low_stock_count: usize,
}

impl InventorySummary {
    pub fn from_items<'a>(
        items: impl IntoIterator<Item = &'a Item>,
        low_stock_threshold: u32,
    ) -> Self {
        items.into_iter().fold(
            Self {
                item_count: 0,
                total_units: 0,
                total_value: 0.0,
                low_stock_count: 0,
            },
            |mut acc, item| {
                acc.item_count += 1;
                acc.total_units += u64::from(item.qty());
                acc.total_value += item.stock_value();
                if item.is_low_stock(low_stock_threshold) {
                    acc.low_stock_count += 1;
                }
                acc
            },
        )
    }
}

/// Items in list order plus a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub export_id: Uuid,
    pub exported_at: DateTime<Utc>,
    pub summary: InventorySummary,
    pub items: Vec<Item>,
}

impl InventorySnapshot {
    pub fn capture(
        list: &InventoryList,
        low_stock_threshold: u32,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            export_id: Uuid::now_v7(),
            exported_at,
            summary: InventorySummary::from_items(list, low_stock_threshold),
            items: list.iter().cloned().collect(),
        }
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self).map_err(|e| DomainError::export(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> DomainResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DomainError::export(e.to_string()))
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw).map_err(|e| DomainError::export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockroom_core::{Entity, ItemId};

    fn list() -> InventoryList {
        let mut list = InventoryList::new();
        for (raw, qty, price) in [(1u64, 4u32, 2.5), (2, 20, 1.0), (3, 9, 10.0)] {
            let id = ItemId::new(raw).unwrap();
            list.insert_head(Item::new(id, format!("item-{raw}"), qty, price).unwrap())
                .unwrap();
        }
        list
    }

    #[test]
    fn summary_totals() {
        let summary = InventorySummary::from_items(&list(), 10);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total_units, 33);
        assert!((summary.total_value - 120.0).abs() < f64::EPSILON);
        assert_eq!(summary.low_stock_count, 2);
    }

    #[test]
    fn snapshot_keeps_list_order_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let snapshot = InventorySnapshot::capture(&list(), 10, at);
        let ids: Vec<u64> = snapshot.items.iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"exported_at\":\"2026-01-02T03:04:05Z\""));
        let back = InventorySnapshot::from_json(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn snapshot_with_invalid_item_is_rejected() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut value = serde_json::to_value(InventorySnapshot::capture(&list(), 10, at)).unwrap();
        value["items"][0]["name"] = serde_json::json!("  ");
        value["items"][0]["price"] = serde_json::json!(-1.0);

        let err = InventorySnapshot::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, DomainError::Export(msg) if msg.contains("name cannot be empty")));
    }

    #[test]
    fn malformed_snapshot_is_an_export_error() {
        assert!(matches!(
            InventorySnapshot::from_json("{\"items\": 3}"),
            Err(DomainError::Export(_))
        ));
    }
}
