//! Built-in starter catalog.

use stockroom_core::{DomainError, DomainResult, ItemId};

use crate::item::Item;

/// `(id, name, qty, price)` rows in insertion order.
///
/// Rows are head-inserted, so the last row ends up at the front of the list.
pub const SEED_CATALOG: &[(u64, &str, u32, f64)] = &[
    (105, "Keyboard", 12, 899.0),
    (212, "SSD 256GB", 7, 2499.0),
    (87, "USB Cable", 25, 199.0),
    (450, "Laptop Stand", 9, 1299.0),
    (333, "Bluetooth Mouse", 18, 699.0),
    (178, "Webcam 1080p", 11, 1599.0),
    (512, "Pendrive 64GB", 30, 549.0),
    (35, "Headphones", 14, 1099.0),
    (619, "Gaming Keyboard", 16, 2999.0),
    (742, "HDMI Cable", 22, 249.0),
    (381, "LED Desk Lamp", 10, 999.0),
    (894, "Portable Speaker", 19, 1799.0),
    (556, "Smartwatch Band", 28, 149.0),
    (928, "Laptop Charger 65W", 8, 1899.0),
    (40, "Hard Drive 1TB", 5, 3299.0),
    (771, "Ethernet Cable 10m", 27, 350.0),
    (489, "Bluetooth Earbuds", 15, 1599.0),
    (630, "Monitor 24-inch", 6, 8999.0),
    (44, "Graphic Tablet", 7, 4599.0),
    (807, "USB Hub 4-Port", 17, 399.0),
    (290, "Power Bank 20000mAh", 13, 1899.0),
    (931, "WiFi Router", 11, 2499.0),
    (168, "MicroSD 128GB", 24, 699.0),
    (402, "Wireless Charger", 10, 1199.0),
    (31, "Action Camera", 8, 4999.0),
    (849, "Laptop Sleeve 15-inch", 20, 499.0),
    (915, "Portable HDD 2TB", 9, 5499.0),
    (287, "Phone Holder", 33, 149.0),
    (678, "Mini Tripod", 14, 299.0),
];

/// Materialize [`SEED_CATALOG`] in insertion order.
pub fn seed_items() -> DomainResult<Vec<Item>> {
    SEED_CATALOG
        .iter()
        .map(|&(raw, name, qty, price)| {
            let id = ItemId::new(raw).ok_or_else(|| DomainError::invalid_id("seed id is zero"))?;
            Item::new(id, name, qty, price)
        })
        .collect()
}
