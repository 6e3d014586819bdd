//! Item ownership arena with generational indices.
//!
//! The `ItemRegistry` is the single owning scope for every item in a
//! world. Rooms and the backpack only hold [`ItemHandle`]s; moving an
//! item between lists never copies or frees it, and destroying a list
//! never reaches into the registry.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use oubliette_foundation::ItemId;

use crate::item::{Item, ItemHandle};

#[derive(Debug)]
struct Slot {
    /// Even generations are free, odd generations are alive.
    generation: u32,
    item: Option<Item>,
}

/// Owns every item and tracks generations to detect stale handles.
///
/// Indices are reused from a free list; reuse bumps the generation so a
/// handle to a removed item misses instead of aliasing its replacement.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    slots: Vec<Slot>,
    free_list: Vec<u64>,
    live_count: usize,
}

impl ItemRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item and returns its id.
    ///
    /// Reuses indices from the free list when available.
    pub fn insert(&mut self, item: Item) -> ItemId {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            // Increment generation (was even/free, now odd/alive)
            slot.generation += 1;
            slot.item = Some(item);
            ItemId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u64;
            // New items start at generation 1 (odd = alive)
            self.slots.push(Slot {
                generation: 1,
                item: Some(item),
            });
            ItemId::new(index, 1)
        }
    }

    /// Returns the item for a live id, or `None` for stale or unknown
    /// ids.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.item.as_ref()
    }

    /// Removes an item, returning it to the caller.
    ///
    /// The index goes back on the free list and the generation bumps, so
    /// existing handles to the item become stale.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let item = slot.item.take()?;
        slot.generation += 1;
        self.free_list.push(id.index);
        self.live_count -= 1;
        Some(item)
    }

    /// Builds a list handle for a live item.
    #[must_use]
    pub fn handle(&self, id: ItemId) -> Option<ItemHandle> {
        self.get(id).map(|item| ItemHandle::new(id, item.name()))
    }

    /// Checks if an id refers to a live item.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of live items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Iterates over all live items with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.item
                .as_ref()
                .map(|item| (ItemId::new(index as u64, slot.generation), item))
        })
    }
}
