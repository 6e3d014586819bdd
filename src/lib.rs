//! Oubliette - a small text-adventure engine
//!
//! This crate re-exports all layers of the Oubliette system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: oubliette_runtime    — Game loop, line editor, demo world
//! Layer 2: oubliette_parser     — Input normalization and command recognition
//! Layer 1: oubliette_storage    — Container lists, items, rooms, world state
//! Layer 0: oubliette_foundation — Core types (ItemId, ContainerKind, Error)
//! ```

pub use oubliette_foundation as foundation;
pub use oubliette_parser as parser;
pub use oubliette_runtime as runtime;
pub use oubliette_storage as storage;
