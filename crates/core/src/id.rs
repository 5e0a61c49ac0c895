//! Strongly-typed identifiers used across the inventory core.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stock item.
///
/// Ids are assigned by the caller and are never zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(NonZeroU64);

impl ItemId {
    /// Returns `None` for zero.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<NonZeroU64> for ItemId {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.get()
    }
}

impl TryFrom<u64> for ItemId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| DomainError::invalid_id("ItemId: must be non-zero"))
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = u64::from_str(s.trim())
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Self::try_from(raw)
    }
}
