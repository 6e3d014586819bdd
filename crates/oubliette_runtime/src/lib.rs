//! Game loop, line editing, and the demo world for Oubliette.
//!
//! This crate provides:
//! - [`Game`] - The state machine that turns recognized commands into
//!   world changes
//! - [`LineEditor`] / [`RustylineEditor`] - Console input abstraction
//! - [`demo`] - The built-in demo dungeon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod game;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use game::{Game, GameState, WinCondition};
