//! Container lists, items, rooms, backpack, and world state for Oubliette.
//!
//! This crate provides:
//! - [`ContainerList`] - The generic ownership-aware singly linked list
//! - [`Item`] / [`ItemRegistry`] - Item data and the arena that owns it
//! - [`Room`] / [`World`] - Locations and the room graph
//! - [`Backpack`] - The player's fixed-capacity inventory
//! - [`Command`] - A named command with a compiled recognition pattern

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod backpack;
pub mod command;
pub mod container;
pub mod item;
pub mod registry;
pub mod room;
pub mod world;

pub use backpack::Backpack;
pub use command::{Command, CommandMatch};
pub use container::{ContainerEntry, ContainerList};
pub use item::{Item, ItemFlags, ItemHandle};
pub use registry::ItemRegistry;
pub use room::{Direction, Room};
pub use world::World;
