//! Game locations and the directions between them.

use std::fmt;

use oubliette_foundation::{Error, ItemId, Result};

use crate::container::{ContainerEntry, ContainerList};
use crate::item::ItemHandle;

/// A compass direction out of a room.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// All four directions, for iterating exits in display order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Parses a direction word or its one-letter synonym, ignoring case.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "north" | "n" => Some(Self::North),
            "south" | "s" => Some(Self::South),
            "east" | "e" => Some(Self::East),
            "west" | "w" => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
            Self::East => write!(f, "east"),
            Self::West => write!(f, "west"),
        }
    }
}

/// A game location.
///
/// A room has up to four exits, one per direction, each naming the
/// neighboring room. The graph is arbitrary: exits need not be
/// symmetric and cycles are fine. Names are resolved against the world
/// at move time.
///
/// The item list holds non-owning handles; items themselves live in the
/// world's registry.
#[derive(Debug)]
pub struct Room {
    name: String,
    description: String,
    exits: [Option<String>; 4],
    items: ContainerList,
}

impl Room {
    /// Creates a new room.
    ///
    /// # Errors
    ///
    /// Returns a `MissingField` error if `name` or `description` is
    /// empty.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let description = description.into();
        if name.is_empty() {
            return Err(Error::missing_field("name"));
        }
        if description.is_empty() {
            return Err(Error::missing_field("description"));
        }
        Ok(Self {
            name,
            description,
            exits: [None, None, None, None],
            items: ContainerList::new(),
        })
    }

    /// Returns the room's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the exit in one direction to the named room.
    pub fn set_exit(&mut self, direction: Direction, to: impl Into<String>) {
        self.exits[direction as usize] = Some(to.into());
    }

    /// Sets all four exits at once; `None` means no exit that way.
    pub fn set_exits(
        &mut self,
        north: Option<&str>,
        south: Option<&str>,
        east: Option<&str>,
        west: Option<&str>,
    ) {
        self.exits = [
            north.map(str::to_string),
            south.map(str::to_string),
            east.map(str::to_string),
            west.map(str::to_string),
        ];
    }

    /// Returns the name of the room in the given direction, if any.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits[direction as usize].as_deref()
    }

    /// Adds an item handle to the room.
    ///
    /// # Errors
    ///
    /// Propagates a `KindMismatch` if the room's list was corrupted into
    /// holding a different kind (a caller bug).
    pub fn add_item(&mut self, handle: ItemHandle) -> Result<()> {
        self.items.push(ContainerEntry::Item(handle))?;
        Ok(())
    }

    /// Removes an item from the room by id, leaving the item itself
    /// untouched.
    ///
    /// No-op returning `None` if the item is not here.
    pub fn take_item(&mut self, id: ItemId) -> Option<ItemHandle> {
        self.items.detach_item(id)
    }

    /// Finds an item in the room by name, ignoring case.
    #[must_use]
    pub fn find_item(&self, name: &str) -> Option<&ItemHandle> {
        self.items.find_by_name(name)?.as_item()
    }

    /// Iterates over the item handles in the room.
    pub fn items(&self) -> impl Iterator<Item = &ItemHandle> {
        self.items.iter().filter_map(ContainerEntry::as_item)
    }

    /// Returns the number of items in the room.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
