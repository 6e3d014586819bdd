//! World state: the room list and the item registry.

use oubliette_foundation::{Error, ItemId, Result};

use crate::container::{ContainerEntry, ContainerList};
use crate::item::Item;
use crate::registry::ItemRegistry;
use crate::room::Room;

/// The game world: every room and every item.
///
/// The room list exclusively owns its rooms and the registry exclusively
/// owns its items; dropping the world drops both. Rooms reference each
/// other by name and reference items by handle, so there is no shared
/// ownership anywhere in the graph.
#[derive(Debug, Default)]
pub struct World {
    rooms: ContainerList,
    items: ItemRegistry,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room to the world.
    ///
    /// # Errors
    ///
    /// Returns a `DuplicateName` error if a room with the same name
    /// (ignoring case) already exists.
    pub fn add_room(&mut self, room: Room) -> Result<()> {
        if self.rooms.find_by_name(room.name()).is_some() {
            return Err(Error::duplicate_name(room.name()));
        }
        self.rooms.push(ContainerEntry::Room(room))?;
        Ok(())
    }

    /// Returns the room with the given name, ignoring case.
    #[must_use]
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.find_by_name(name)?.as_room()
    }

    /// Returns the room with the given name, mutably.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.find_by_name_mut(name)?.as_room_mut()
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Iterates over the rooms in insertion order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter_map(ContainerEntry::as_room)
    }

    /// Registers an item with the world and returns its id.
    pub fn spawn_item(&mut self, item: Item) -> ItemId {
        self.items.insert(item)
    }

    /// Returns a registered item by id; stale ids miss.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Places a registered item into the named room.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` for a stale or unknown id, or
    /// `RoomNotFound` if no such room exists.
    pub fn place_item(&mut self, room_name: &str, id: ItemId) -> Result<()> {
        let handle = self.items.handle(id).ok_or_else(|| Error::item_not_found(id))?;
        let room = self
            .room_mut(room_name)
            .ok_or_else(|| Error::room_not_found(room_name))?;
        room.add_item(handle)
    }

    /// Returns the registry owning every item.
    #[must_use]
    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }
}
