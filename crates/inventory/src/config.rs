//! Runtime configuration for the inventory core.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

use crate::alerts::ALERT_CAPACITY;
use crate::item::LOW_STOCK_THRESHOLD;
use crate::undo::UNDO_CAPACITY;

pub const ENV_UNDO_CAPACITY: &str = "STOCKROOM_UNDO_CAPACITY";
pub const ENV_ALERT_CAPACITY: &str = "STOCKROOM_ALERT_CAPACITY";
pub const ENV_LOW_STOCK_THRESHOLD: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const ENV_SEED_CATALOG: &str = "STOCKROOM_SEED_CATALOG";

/// Capacities and thresholds for an [`Inventory`](crate::Inventory).
///
/// Missing fields take their defaults, so a host can embed a partial table of
/// this in its own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InventoryConfig {
    /// Depth of the undo history.
    pub undo_capacity: usize,
    /// Maximum number of low-stock alerts reported at once.
    pub alert_capacity: usize,
    /// Items with a quantity below this are low stock.
    pub low_stock_threshold: u32,
    /// Preload the built-in catalog on construction.
    pub seed_catalog: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            undo_capacity: UNDO_CAPACITY,
            alert_capacity: ALERT_CAPACITY,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            seed_catalog: true,
        }
    }
}

impl InventoryConfig {
    /// Read `STOCKROOM_*` environment variables over the defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup.
    ///
    /// Unparseable values fall back to the default with a warning; the result
    /// is then validated.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            undo_capacity: parse_or(&lookup, ENV_UNDO_CAPACITY, defaults.undo_capacity),
            alert_capacity: parse_or(&lookup, ENV_ALERT_CAPACITY, defaults.alert_capacity),
            low_stock_threshold: parse_or(
                &lookup,
                ENV_LOW_STOCK_THRESHOLD,
                defaults.low_stock_threshold,
            ),
            seed_catalog: parse_or(&lookup, ENV_SEED_CATALOG, defaults.seed_catalog),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.undo_capacity == 0 {
            return Err(DomainError::validation("undo_capacity must be at least 1"));
        }
        if self.alert_capacity == 0 {
            return Err(DomainError::validation("alert_capacity must be at least 1"));
        }
        Ok(())
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = %raw, "invalid configuration value; using default");
        default
    })
}
