//! Error types for the Oubliette engine.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Lookup misses are deliberately *not* errors: `find_by_name` and friends
//! return `Option`, and an unrecognized input line is a normal parse
//! outcome. The kinds below cover creation failures, capacity limits, and
//! caller bugs such as appending the wrong payload kind to a list.

use thiserror::Error;

use crate::item_id::ItemId;
use crate::kind::ContainerKind;

/// Convenience alias for results with Oubliette errors.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Oubliette operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a missing-field creation failure.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::new(ErrorKind::MissingField(field))
    }

    /// Creates an invalid-pattern creation failure.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        })
    }

    /// Creates a duplicate-name registration failure.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateName(name.into()))
    }

    /// Creates a container kind mismatch error.
    #[must_use]
    pub fn kind_mismatch(expected: ContainerKind, actual: ContainerKind) -> Self {
        Self::new(ErrorKind::KindMismatch { expected, actual })
    }

    /// Creates a capacity exceeded error.
    #[must_use]
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::new(ErrorKind::CapacityExceeded { capacity })
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(id: ItemId) -> Self {
        Self::new(ErrorKind::ItemNotFound(id))
    }

    /// Creates a stale item reference error.
    #[must_use]
    pub fn stale_item(id: ItemId) -> Self {
        Self::new(ErrorKind::StaleItem(id))
    }

    /// Creates a room not found error.
    #[must_use]
    pub fn room_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::RoomNotFound(name.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required field was empty at creation time.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A command pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern source that failed to compile.
        pattern: String,
        /// The compiler's explanation.
        reason: String,
    },

    /// A name collided with an already registered one.
    #[error("duplicate name: {0:?}")]
    DuplicateName(String),

    /// Append of the wrong payload kind to a non-empty list.
    ///
    /// This indicates a caller bug, not a runtime condition; it is kept
    /// distinct from the recoverable kinds so callers can escalate it.
    #[error("container kind mismatch: list holds {expected}, got {actual}")]
    KindMismatch {
        /// The kind the list already holds.
        expected: ContainerKind,
        /// The kind that was appended.
        actual: ContainerKind,
    },

    /// A fixed-capacity collection is full.
    #[error("capacity exceeded: {capacity}")]
    CapacityExceeded {
        /// The configured capacity.
        capacity: usize,
    },

    /// Item was not found in the registry.
    #[error("item not found: {0:?}")]
    ItemNotFound(ItemId),

    /// Item reference is stale (generation mismatch).
    #[error("stale item reference: {0:?}")]
    StaleItem(ItemId),

    /// Room was not found in the world.
    #[error("room not found: {0:?}")]
    RoomNotFound(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
