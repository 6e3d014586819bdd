//! The player's fixed-capacity inventory.

use oubliette_foundation::{Error, ItemId, Result};

use crate::container::{ContainerEntry, ContainerList};
use crate::item::ItemHandle;

/// A fixed-capacity, counted collection of item handles.
///
/// Like room item lists, the backpack never owns items; dropping it
/// leaves every item alive in the registry.
#[derive(Debug)]
pub struct Backpack {
    capacity: usize,
    items: ContainerList,
}

impl Backpack {
    /// Creates an empty backpack with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: ContainerList::new(),
        }
    }

    /// Adds an item handle.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the backpack is full.
    pub fn add(&mut self, handle: ItemHandle) -> Result<()> {
        if self.is_full() {
            return Err(Error::capacity_exceeded(self.capacity));
        }
        self.items.push(ContainerEntry::Item(handle))?;
        Ok(())
    }

    /// Removes an item by id, returning its handle; the item itself is
    /// untouched. No-op returning `None` if absent.
    pub fn remove(&mut self, id: ItemId) -> Option<ItemHandle> {
        self.items.detach_item(id)
    }

    /// Finds a carried item by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ItemHandle> {
        self.items.find_by_name(name)?.as_item()
    }

    /// Iterates over the carried item handles.
    pub fn iter(&self) -> impl Iterator<Item = &ItemHandle> {
        self.items.iter().filter_map(ContainerEntry::as_item)
    }

    /// Returns the number of carried items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is carried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if no more items fit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}
