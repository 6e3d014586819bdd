//! The generic container list.
//!
//! Every list in the engine is a [`ContainerList`]: the world's rooms, a
//! room's items, the player's backpack, the parser's commands, and the
//! input history all use the same singly linked, insertion-ordered,
//! tail-append structure. A list is homogeneous in its payload kind; the
//! first append fixes the kind and later appends of a different kind are
//! rejected without mutating the list.
//!
//! Ownership is a property of the payload variant, not of caller
//! convention: `Room`, `Command`, and `Text` entries are owned by their
//! node and drop with it, while `Item` entries are generational handles
//! into the world's [`ItemRegistry`](crate::registry::ItemRegistry) —
//! clearing or dropping an item list never touches the items themselves.

use oubliette_foundation::{ContainerKind, Error, ItemId, Result};

use crate::command::Command;
use crate::item::ItemHandle;
use crate::room::Room;

/// A payload stored in one container node.
#[derive(Debug)]
pub enum ContainerEntry {
    /// A room, exclusively owned by the list (the world list).
    Room(Room),
    /// A non-owning handle to an item in the registry (room and backpack
    /// lists).
    Item(ItemHandle),
    /// A command, exclusively owned by the list (the parser's command
    /// list).
    Command(Command),
    /// A line of heap-allocated text, owned by the list (the history
    /// list).
    Text(String),
}

impl ContainerEntry {
    /// Returns the kind tag of this payload.
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        match self {
            Self::Room(_) => ContainerKind::Room,
            Self::Item(_) => ContainerKind::Item,
            Self::Command(_) => ContainerKind::Command,
            Self::Text(_) => ContainerKind::Text,
        }
    }

    /// Returns the name this payload is looked up by.
    ///
    /// For text entries the text itself serves as the name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Room(room) => room.name(),
            Self::Item(handle) => handle.name(),
            Self::Command(command) => command.name(),
            Self::Text(text) => text,
        }
    }

    /// Returns the room payload, if this is a room entry.
    #[must_use]
    pub fn as_room(&self) -> Option<&Room> {
        match self {
            Self::Room(room) => Some(room),
            _ => None,
        }
    }

    /// Returns the room payload mutably, if this is a room entry.
    pub fn as_room_mut(&mut self) -> Option<&mut Room> {
        match self {
            Self::Room(room) => Some(room),
            _ => None,
        }
    }

    /// Returns the item handle, if this is an item entry.
    #[must_use]
    pub fn as_item(&self) -> Option<&ItemHandle> {
        match self {
            Self::Item(handle) => Some(handle),
            _ => None,
        }
    }

    /// Returns the command payload, if this is a command entry.
    #[must_use]
    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Self::Command(command) => Some(command),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a text entry.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether the payload is empty and must be rejected at append time.
    ///
    /// Rooms, items, and commands validate their fields at construction,
    /// so only text entries can arrive empty.
    fn is_empty_payload(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

#[derive(Debug)]
struct Node {
    entry: ContainerEntry,
    next: Option<Box<Node>>,
}

/// A singly linked, kind-homogeneous, insertion-ordered list of containers.
///
/// Lists start empty and untyped; the first successful [`push`] fixes the
/// payload kind for the rest of the list's lifetime (until [`clear`]
/// empties it again).
///
/// [`push`]: ContainerList::push
/// [`clear`]: ContainerList::clear
#[derive(Debug, Default)]
pub struct ContainerList {
    head: Option<Box<Node>>,
    len: usize,
}

impl ContainerList {
    /// Creates a new empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the payload kind of this list, or `None` if it is empty.
    #[must_use]
    pub fn kind(&self) -> Option<ContainerKind> {
        self.head.as_ref().map(|node| node.entry.kind())
    }

    /// Returns the number of entries in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends an entry at the tail and returns a reference to it.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::MissingField`] if the payload is empty (an
    /// empty text line), or [`ErrorKind::KindMismatch`] if the list is
    /// non-empty and holds a different kind. Neither failure mutates the
    /// list.
    ///
    /// [`ErrorKind::MissingField`]: oubliette_foundation::ErrorKind::MissingField
    /// [`ErrorKind::KindMismatch`]: oubliette_foundation::ErrorKind::KindMismatch
    pub fn push(&mut self, entry: ContainerEntry) -> Result<&ContainerEntry> {
        if entry.is_empty_payload() {
            return Err(Error::missing_field("text"));
        }
        if let Some(kind) = self.kind() {
            if kind != entry.kind() {
                return Err(Error::kind_mismatch(kind, entry.kind()));
            }
        }

        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        let node = cursor.insert(Box::new(Node { entry, next: None }));
        self.len += 1;
        Ok(&node.entry)
    }

    /// Removes every entry from the list.
    ///
    /// Owned payloads (rooms, commands, text) are dropped with their
    /// nodes; item handles are dropped without touching the registry.
    /// Safe to call on an empty list. Nodes are unlinked iteratively so
    /// long histories cannot overflow the stack on drop.
    pub fn clear(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
        self.len = 0;
    }

    /// Finds the first entry whose name matches, ignoring ASCII case.
    ///
    /// Duplicate names are permitted; the earliest entry in list order
    /// wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ContainerEntry> {
        self.iter()
            .find(|entry| entry.name().eq_ignore_ascii_case(name))
    }

    /// Finds the first entry whose name matches, mutably.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut ContainerEntry> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.entry.name().eq_ignore_ascii_case(name) {
                return Some(&mut node.entry);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the first entry matching the predicate and returns its
    /// payload intact.
    ///
    /// The payload is handed back to the caller untouched; for item
    /// entries the registry is unaffected. Returns `None` if no entry
    /// matches.
    pub fn detach(
        &mut self,
        mut pred: impl FnMut(&ContainerEntry) -> bool,
    ) -> Option<ContainerEntry> {
        let mut cursor = &mut self.head;
        loop {
            let mut node = cursor.take()?;
            if pred(&node.entry) {
                *cursor = node.next.take();
                self.len -= 1;
                return Some(node.entry);
            }
            *cursor = Some(node);
            let Some(node) = cursor else {
                return None;
            };
            cursor = &mut node.next;
        }
    }

    /// Unlinks the entry holding the given item handle, by id identity.
    ///
    /// The item itself stays alive in the registry.
    pub fn detach_item(&mut self, id: ItemId) -> Option<ItemHandle> {
        let entry =
            self.detach(|entry| matches!(entry, ContainerEntry::Item(handle) if handle.id() == id))?;
        match entry {
            ContainerEntry::Item(handle) => Some(handle),
            _ => None,
        }
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for ContainerList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a ContainerList {
    type Item = &'a ContainerEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`ContainerList`].
#[derive(Debug)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ContainerEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.entry)
    }
}
