//! `stockroom-core` — foundation building blocks for the inventory core.
//!
//! This crate contains **pure** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
