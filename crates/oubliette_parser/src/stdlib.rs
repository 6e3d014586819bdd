//! The standard adventure command set.
//!
//! Patterns are anchored and compiled case-insensitively; each command
//! carries the synonyms players actually type (`take`/`get`/`grab`,
//! `l` for `look`). The order below is the scan order: bare direction
//! words come before the general `go <direction>` form, and every
//! single-letter synonym lives on the specific command that owns it.

use oubliette_foundation::Result;
use oubliette_storage::Command;

/// Builds the standard command set in registration order.
///
/// # Errors
///
/// Returns an error if a pattern fails to compile. The patterns are
/// fixed, so this only fires on a build-time mistake; callers treat it
/// as fatal to initialization.
pub fn standard_commands() -> Result<Vec<Command>> {
    Ok(vec![
        Command::new("north", "Walk north.", r"^(?:north|n)$", 0)?,
        Command::new("south", "Walk south.", r"^(?:south|s)$", 0)?,
        Command::new("east", "Walk east.", r"^(?:east|e)$", 0)?,
        Command::new("west", "Walk west.", r"^(?:west|w)$", 0)?,
        Command::new(
            "go",
            "Walk in a direction, e.g. 'go north'.",
            r"^(?:go|walk|head)\s+(north|south|east|west|n|s|e|w)$",
            2,
        )?,
        Command::new("look", "Describe the current room.", r"^(?:look|l)(?:\s+around)?$", 0)?,
        Command::new(
            "examine",
            "Take a closer look at something, e.g. 'examine chest'.",
            r"^(?:examine|x|inspect)\s+(.+)$",
            2,
        )?,
        Command::new(
            "take",
            "Pick something up, e.g. 'take lamp'.",
            r"^(?:take|get|grab)\s+(.+)$",
            2,
        )?,
        Command::new(
            "drop",
            "Put something down, e.g. 'drop lamp'.",
            r"^(?:drop|discard)\s+(.+)$",
            2,
        )?,
        Command::new("use", "Use something you see or carry.", r"^use\s+(.+)$", 2)?,
        Command::new("open", "Open something, e.g. 'open chest'.", r"^open\s+(.+)$", 2)?,
        Command::new(
            "inventory",
            "List what you are carrying.",
            r"^(?:inventory|inv|i)$",
            0,
        )?,
        Command::new("help", "Show this list of commands.", r"^(?:help|\?)$", 0)?,
        Command::new("restart", "Start the game over.", r"^restart$", 0)?,
        Command::new("quit", "Leave the game.", r"^(?:quit|q|exit)$", 0)?,
    ])
}
