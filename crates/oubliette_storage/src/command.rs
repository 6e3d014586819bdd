//! Recognized commands and their match results.

use regex::RegexBuilder;

use oubliette_foundation::{Error, Result};

/// A named command with a compiled recognition pattern.
///
/// The pattern is compiled case-insensitively at creation. Matching
/// never mutates the command: captures come back as a fresh
/// [`CommandMatch`] per attempt, so a command can be matched repeatedly
/// (or shared) without stale-capture hazards.
#[derive(Debug)]
pub struct Command {
    name: String,
    description: String,
    pattern: regex::Regex,
    group_count: usize,
}

impl Command {
    /// Creates a command.
    ///
    /// `group_count` is the number of capture slots to extract on a
    /// match, *including* slot 0, which is the whole matched text (the
    /// convention of POSIX `regexec`). Zero is valid for commands that
    /// only need recognition, no extraction.
    ///
    /// # Errors
    ///
    /// Returns a `MissingField` error if `name` or `description` is
    /// empty, or an `InvalidPattern` error if `pattern` does not compile.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        pattern: &str,
        group_count: usize,
    ) -> Result<Self> {
        let name = name.into();
        let description = description.into();
        if name.is_empty() {
            return Err(Error::missing_field("name"));
        }
        if description.is_empty() {
            return Err(Error::missing_field("description"));
        }
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self {
            name,
            description,
            pattern: compiled,
            group_count,
        })
    }

    /// Returns the command's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the command's description (shown by `help`).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of capture slots extracted on a match.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Attempts to match `text` against the pattern.
    ///
    /// On success, returns a [`CommandMatch`] holding up to
    /// `group_count` captured substrings; slot 0 is the whole match and
    /// slot `i` the i-th parenthesized group. Capture groups that did
    /// not participate in the match come back as empty strings.
    #[must_use]
    pub fn try_match(&self, text: &str) -> Option<CommandMatch> {
        let captures = self.pattern.captures(text)?;
        let groups = captures
            .iter()
            .take(self.group_count)
            .map(|group| group.map_or_else(String::new, |m| m.as_str().to_string()))
            .collect();
        Some(CommandMatch {
            name: self.name.clone(),
            groups,
        })
    }
}

/// The result of a successful match: the command's name plus its
/// captured groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandMatch {
    name: String,
    groups: Vec<String>,
}

impl CommandMatch {
    /// Returns the name of the matched command.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the captured group at `index`, if it was extracted.
    ///
    /// Slot 0 is the whole match; arguments start at slot 1.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).map(String::as_str)
    }

    /// Returns all extracted groups.
    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}
