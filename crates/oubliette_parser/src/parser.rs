//! The command parser: normalization, recognition, history.

use oubliette_foundation::{Error, Result};
use oubliette_storage::{Command, CommandMatch, ContainerEntry, ContainerList};

use crate::stdlib;

/// Result of parsing one line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseResult {
    /// A command matched; holds its name and captured groups.
    Recognized(CommandMatch),
    /// No registered command matched. The input was still logged to
    /// history so failed attempts are auditable.
    NotRecognized,
    /// The input was empty after normalization. Not logged to history.
    Empty,
}

/// Recognizes free-text input against a registered command set.
///
/// The parser owns two container lists: the commands it understands
/// (fixed after initialization by convention) and the history of every
/// non-empty input line it has seen, matched or not.
///
/// Commands are tried in registration order and the first match wins —
/// no scoring, no longest-match. Registration order is therefore part of
/// the observable contract: register specific patterns before general
/// ones that could also match.
#[derive(Debug, Default)]
pub struct Parser {
    commands: ContainerList,
    history: ContainerList,
}

impl Parser {
    /// Creates a parser with no commands registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser pre-populated with the standard adventure
    /// command set.
    ///
    /// # Errors
    ///
    /// Returns an error if a standard pattern fails to compile; this is
    /// fatal to game initialization.
    pub fn with_standard_commands() -> Result<Self> {
        let mut parser = Self::new();
        for command in stdlib::standard_commands()? {
            parser.register(command)?;
        }
        Ok(parser)
    }

    /// Registers a command at the end of the scan order.
    ///
    /// # Errors
    ///
    /// Returns a `DuplicateName` error if a command with the same name
    /// (ignoring case) is already registered.
    pub fn register(&mut self, command: Command) -> Result<()> {
        if self.commands.find_by_name(command.name()).is_some() {
            return Err(Error::duplicate_name(command.name()));
        }
        self.commands.push(ContainerEntry::Command(command))?;
        Ok(())
    }

    /// Parses one line of player input.
    ///
    /// The line is normalized (trimmed, internal whitespace collapsed,
    /// lowercased), then tried against each registered command in order.
    /// Every non-empty line is appended to history — the normalized
    /// form, since that is what was actually matched. Empty lines are
    /// neither matched nor logged.
    pub fn parse_input(&mut self, raw: &str) -> ParseResult {
        let input = normalize(raw);
        if input.is_empty() {
            return ParseResult::Empty;
        }

        let matched = self
            .commands
            .iter()
            .filter_map(ContainerEntry::as_command)
            .find_map(|command| command.try_match(&input));

        // Cannot fail: the input is non-empty and history only ever
        // holds text.
        let _ = self.history.push(ContainerEntry::Text(input));

        match matched {
            Some(m) => ParseResult::Recognized(m),
            None => ParseResult::NotRecognized,
        }
    }

    /// Iterates over the registered commands in scan order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter().filter_map(ContainerEntry::as_command)
    }

    /// Iterates over the logged input lines, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().filter_map(ContainerEntry::as_text)
    }

    /// Returns the number of logged input lines.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// Normalizes raw input: trims, collapses internal whitespace runs to a
/// single space, and lowercases.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
