//! Core types shared by every layer of Oubliette.
//!
//! This crate provides:
//! - [`ItemId`] - Generational item identifiers
//! - [`ContainerKind`] - The four payload kinds a container list can hold
//! - [`Error`] - Categorized error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod item_id;
mod kind;

pub use error::{Error, ErrorKind, Result};
pub use item_id::ItemId;
pub use kind::ContainerKind;
