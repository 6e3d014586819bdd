//! Container payload kinds.

use std::fmt;

/// The kind of payload a container node holds.
///
/// Every node in one logical list shares the same kind; this is enforced
/// at append time. The kind also fixes the ownership rule for the payload:
/// `Room`, `Command`, and `Text` payloads are owned by their list, while
/// `Item` payloads are non-owning handles into the world's item registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// A game location, owned by the world list.
    Room,
    /// A handle to an item owned by the item registry.
    Item,
    /// A recognized command, owned by the parser's command list.
    Command,
    /// A line of raw text, owned by the history list.
    Text,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room => write!(f, "room"),
            Self::Item => write!(f, "item"),
            Self::Command => write!(f, "command"),
            Self::Text => write!(f, "text"),
        }
    }
}
