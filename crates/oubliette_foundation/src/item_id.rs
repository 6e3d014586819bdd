//! Generational item identifiers.

use std::fmt;

/// Identifies an item in the world's registry.
///
/// An id pairs a registry slot index with the generation the slot had
/// when the item was created. The registry bumps a slot's generation
/// every time the slot is freed, so an id held across the item's
/// removal (say, in a room list or the backpack) stops matching instead
/// of silently picking up whatever item reuses the slot. Absence is
/// always expressed as `Option`, never as a reserved id value.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ItemId {
    /// Slot index in the registry.
    pub index: u64,
    /// Generation of the slot at creation time.
    pub generation: u32,
}

impl ItemId {
    /// Creates an id from a slot index and generation.
    #[must_use]
    pub const fn new(index: u64, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({}v{})", self.index, self.generation)
    }
}
