//! Free-text command parser for Oubliette.
//!
//! Transforms player input like `"  TAKE   brass lamp "` into a
//! recognized command with captured arguments:
//!
//! ```text
//! "  TAKE   brass lamp "
//!          │
//!          ▼  normalize (trim, collapse whitespace, lowercase)
//! "take brass lamp"
//!          │
//!          ▼  scan registered commands in order; first match wins
//! take: ^(?:take|get|grab)\s+(.+)$  →  groups ["take brass lamp", "brass lamp"]
//!          │
//!          ▼  log to history, return the match
//! ParseResult::Recognized(CommandMatch { name: "take", .. })
//! ```
//!
//! # Modules
//!
//! - [`parser`] - Normalization, first-match-wins scan, input history
//! - [`stdlib`] - The standard adventure command set

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parser;
pub mod stdlib;

pub use parser::{ParseResult, Parser, normalize};

// Re-export the command types for convenience
pub use oubliette_storage::{Command, CommandMatch};
