//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the inventory core.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: an operation that returns one of
/// these has not modified any state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item with this id is already stored.
    #[error("item {0} already exists")]
    DuplicateId(ItemId),

    /// No item with this id is stored.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// Undo was requested with an empty operation log.
    #[error("nothing to undo")]
    EmptyLog,

    /// A bounded queue rejected an entry.
    #[error("queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    /// A value failed validation (e.g. empty name, negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A snapshot could not be serialized for export.
    #[error("export failed: {0}")]
    Export(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn duplicate(id: ItemId) -> Self {
        Self::DuplicateId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_id() {
        let id = ItemId::new(42).unwrap();
        assert_eq!(DomainError::duplicate(id).to_string(), "item 42 already exists");
        assert_eq!(DomainError::not_found(id).to_string(), "item 42 not found");
        assert_eq!(
            DomainError::QueueFull { capacity: 100 }.to_string(),
            "queue is full (capacity 100)"
        );
    }
}
