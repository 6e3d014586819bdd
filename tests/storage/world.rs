//! World-level tests: rooms, exits, and item placement together.

use oubliette::foundation::ErrorKind;
use oubliette::storage::{Direction, Item, ItemFlags, Room, World};

fn keep() -> World {
    let mut world = World::new();

    let mut cellar = Room::new("Cellar", "A damp cellar.").unwrap();
    cellar.set_exit(Direction::North, "Corridor");
    world.add_room(cellar).unwrap();

    let mut corridor = Room::new("Corridor", "A narrow corridor.").unwrap();
    corridor.set_exit(Direction::South, "Cellar");
    corridor.set_exit(Direction::East, "Armory");
    world.add_room(corridor).unwrap();

    let mut armory = Room::new("Armory", "Empty weapon racks.").unwrap();
    armory.set_exit(Direction::West, "Corridor");
    world.add_room(armory).unwrap();

    world
}

#[test]
fn exits_walk_the_graph_by_name() {
    let world = keep();

    let mut here = "Cellar".to_string();
    for direction in [Direction::North, Direction::East] {
        let next = world
            .room(&here)
            .unwrap()
            .exit(direction)
            .expect("exit should be open");
        here = world.room(next).unwrap().name().to_string();
    }
    assert_eq!(here, "Armory");

    // Asymmetry is allowed: the armory has no exit north.
    assert!(world.room("Armory").unwrap().exit(Direction::North).is_none());
}

#[test]
fn dangling_exit_is_just_a_wall() {
    let mut world = World::new();
    let mut attic = Room::new("Attic", "Dust and cobwebs.").unwrap();
    attic.set_exit(Direction::North, "Nowhere");
    world.add_room(attic).unwrap();

    let next = world.room("Attic").unwrap().exit(Direction::North).unwrap();
    assert!(world.room(next).is_none());
}

#[test]
fn moving_an_item_between_rooms_keeps_one_owner() {
    let mut world = keep();
    let id = world.spawn_item(Item::new("sword", "A short sword.", ItemFlags::MOVABLE).unwrap());
    world.place_item("Armory", id).unwrap();

    // Carry it from the armory to the cellar.
    let handle = world.room_mut("Armory").unwrap().take_item(id).unwrap();
    world.room_mut("Cellar").unwrap().add_item(handle).unwrap();

    assert_eq!(world.room("Armory").unwrap().item_count(), 0);
    assert_eq!(world.room("Cellar").unwrap().find_item("sword").unwrap().id(), id);
    assert_eq!(world.items().len(), 1);
}

#[test]
fn placing_a_destroyed_item_fails_cleanly() {
    let mut world = keep();
    let id = world.spawn_item(Item::new("torch", "A pitch torch.", ItemFlags::MOVABLE).unwrap());

    // Simulate the item being consumed before placement.
    assert!(world.item(id).is_some());
    let stale = oubliette::foundation::ItemId::new(id.index, id.generation + 2);

    let err = world.place_item("Cellar", stale).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ItemNotFound(_)));
    assert_eq!(world.room("Cellar").unwrap().item_count(), 0);
}

#[test]
fn duplicate_room_names_are_rejected_ignoring_case() {
    let mut world = keep();
    let twin = Room::new("ARMORY", "Another armory.").unwrap();
    let err = world.add_room(twin).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateName(_)));
    assert_eq!(world.room_count(), 3);
}
