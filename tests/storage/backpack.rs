//! Backpack tests against registry-backed items.

use oubliette::foundation::ErrorKind;
use oubliette::storage::{Backpack, Item, ItemFlags, ItemRegistry};

fn registry_with(names: &[&str]) -> (ItemRegistry, Vec<oubliette::foundation::ItemId>) {
    let mut registry = ItemRegistry::new();
    let ids = names
        .iter()
        .map(|name| {
            registry.insert(Item::new(*name, format!("a {name}"), ItemFlags::MOVABLE).unwrap())
        })
        .collect();
    (registry, ids)
}

#[test]
fn pick_up_and_drop_round_trip_through_the_registry() {
    let (registry, ids) = registry_with(&["lamp"]);
    let id = ids[0];

    let mut backpack = Backpack::new(3);
    backpack.add(registry.handle(id).unwrap()).unwrap();
    assert_eq!(backpack.len(), 1);
    assert!(backpack.find("LAMP").is_some());

    let handle = backpack.remove(id).unwrap();
    assert!(backpack.is_empty());
    drop(handle);

    // Carrying and dropping never touched the item itself.
    assert_eq!(registry.get(id).unwrap().name(), "lamp");
}

#[test]
fn capacity_is_enforced_across_removals() {
    let (registry, ids) = registry_with(&["lamp", "key", "rope"]);

    let mut backpack = Backpack::new(2);
    backpack.add(registry.handle(ids[0]).unwrap()).unwrap();
    backpack.add(registry.handle(ids[1]).unwrap()).unwrap();

    let err = backpack.add(registry.handle(ids[2]).unwrap()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CapacityExceeded { capacity: 2 }));

    // Dropping one makes room for the one that was refused.
    backpack.remove(ids[0]).unwrap();
    backpack.add(registry.handle(ids[2]).unwrap()).unwrap();
    assert!(backpack.is_full());

    let carried: Vec<&str> = backpack.iter().map(|h| h.name()).collect();
    assert_eq!(carried, ["key", "rope"]);
}

#[test]
fn stale_handles_do_not_match_respawned_items() {
    let (mut registry, ids) = registry_with(&["lamp"]);
    let old = ids[0];

    let mut backpack = Backpack::new(1);
    backpack.add(registry.handle(old).unwrap()).unwrap();

    // Destroy the item while a handle to it is still carried, then
    // reuse its slot.
    registry.remove(old).unwrap();
    let new = registry.insert(Item::new("coin", "a coin", ItemFlags::MOVABLE).unwrap());
    assert_eq!(new.index, old.index);
    assert_ne!(new.generation, old.generation);

    // The carried handle still answers to its old id, not the new one.
    assert!(backpack.remove(new).is_none());
    assert!(backpack.remove(old).is_some());
}
