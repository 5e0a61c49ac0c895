//! `stockroom-console` — a line-oriented front end over the inventory core.
//!
//! Parsing lives in [`command`]; [`session`] runs parsed commands against one
//! [`Inventory`](stockroom_inventory::Inventory) and renders plain-text output.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::{Outcome, Session};
