use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ItemId};

/// Quantity below which an item counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Mutable fields of an item.
///
/// Used both as the input of an update and as the snapshot of the values an
/// update replaced (so it can be undone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItemFields")]
pub struct ItemFields {
    pub name: String,
    pub qty: u32,
    pub price: f64,
}

impl ItemFields {
    pub fn new(name: impl Into<String>, qty: u32, price: f64) -> DomainResult<Self> {
        let fields = Self {
            name: name.into(),
            qty,
            price,
        };
        fields.validate()?;
        Ok(fields)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation(
                "price must be a finite non-negative number",
            ));
        }
        Ok(())
    }
}

/// Wire shape of [`ItemFields`]; decoded values are validated before use.
#[derive(Deserialize)]
struct RawItemFields {
    name: String,
    qty: u32,
    price: f64,
}

impl TryFrom<RawItemFields> for ItemFields {
    type Error = DomainError;

    fn try_from(raw: RawItemFields) -> Result<Self, Self::Error> {
        ItemFields::new(raw.name, raw.qty, raw.price)
    }
}

/// Wire shape of [`Item`] (flat: id next to the fields).
#[derive(Deserialize)]
struct RawItem {
    id: ItemId,
    name: String,
    qty: u32,
    price: f64,
}

impl TryFrom<RawItem> for Item {
    type Error = DomainError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::new(raw.id, raw.name, raw.qty, raw.price)
    }
}

/// A stock item.
///
/// Identity is `id`; the remaining fields only change through
/// [`InventoryList::update_by_id`](crate::InventoryList::update_by_id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    id: ItemId,
    #[serde(flatten)]
    fields: ItemFields,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, qty: u32, price: f64) -> DomainResult<Self> {
        Ok(Self {
            id,
            fields: ItemFields::new(name, qty, price)?,
        })
    }

    pub fn from_fields(id: ItemId, fields: ItemFields) -> DomainResult<Self> {
        fields.validate()?;
        Ok(Self { id, fields })
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn qty(&self) -> u32 {
        self.fields.qty
    }

    pub fn price(&self) -> f64 {
        self.fields.price
    }

    pub fn fields(&self) -> &ItemFields {
        &self.fields
    }

    /// Stock value of this line (`qty * price`).
    pub fn stock_value(&self) -> f64 {
        f64::from(self.fields.qty) * self.fields.price
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.fields.qty < threshold
    }

    /// Replace all mutable fields, returning the previous values.
    pub(crate) fn replace_fields(&mut self, fields: ItemFields) -> ItemFields {
        core::mem::replace(&mut self.fields, fields)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}
