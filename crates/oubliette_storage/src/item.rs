//! Game items and the handles that reference them.

use std::ops::BitOr;

use oubliette_foundation::{Error, ItemId, Result};

/// Property flags describing what can be done with an item.
///
/// Flags combine with `|`: `ItemFlags::MOVABLE | ItemFlags::USABLE`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemFlags(u32);

impl ItemFlags {
    /// No extra properties.
    pub const NONE: Self = Self(0);
    /// Item can be carried in the backpack.
    pub const MOVABLE: Self = Self(1);
    /// Item can be used.
    pub const USABLE: Self = Self(1 << 1);
    /// Item can be examined.
    pub const EXAMINABLE: Self = Self(1 << 2);
    /// Item can be opened or closed.
    pub const OPENABLE: Self = Self(1 << 3);

    /// Returns true if every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ItemFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A game item.
///
/// Items are owned by the world's [`ItemRegistry`](crate::registry::ItemRegistry);
/// rooms and the backpack refer to them through [`ItemHandle`]s.
#[derive(Debug)]
pub struct Item {
    name: String,
    description: String,
    flags: ItemFlags,
}

impl Item {
    /// Creates a new item.
    ///
    /// # Errors
    ///
    /// Returns a `MissingField` error if `name` or `description` is empty.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        flags: ItemFlags,
    ) -> Result<Self> {
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
            flags,
        })
    }

    /// Returns the item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the item's property flags.
    #[must_use]
    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    /// Whether the item can be carried.
    #[must_use]
    pub fn is_movable(&self) -> bool {
        self.flags.contains(ItemFlags::MOVABLE)
    }

    /// Whether the item can be used.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.flags.contains(ItemFlags::USABLE)
    }

    /// Whether the item can be examined.
    #[must_use]
    pub fn is_examinable(&self) -> bool {
        self.flags.contains(ItemFlags::EXAMINABLE)
    }

    /// Whether the item can be opened.
    #[must_use]
    pub fn is_openable(&self) -> bool {
        self.flags.contains(ItemFlags::OPENABLE)
    }
}

/// A non-owning reference to an item in the registry.
///
/// The name is cached so item lists can answer name lookups without a
/// registry in hand; item names are immutable after creation, so the
/// cache cannot go stale. Identity (for removal) is the generational id
/// alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemHandle {
    id: ItemId,
    name: String,
}

impl ItemHandle {
    /// Creates a handle from an id and the item's name.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the generational id of the referenced item.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the cached name of the referenced item.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
