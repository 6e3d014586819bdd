//! Container list tests.
//!
//! The spine of the engine: one list type, four payload kinds, with
//! ownership decided by the kind.

use oubliette::foundation::{ContainerKind, ErrorKind, ItemId};
use oubliette::storage::{
    Command, ContainerEntry, ContainerList, Item, ItemFlags, ItemHandle, ItemRegistry, Room,
};

fn text(s: &str) -> ContainerEntry {
    ContainerEntry::Text(s.to_string())
}

#[test]
fn one_list_type_serves_all_four_kinds() {
    let mut rooms = ContainerList::new();
    rooms
        .push(ContainerEntry::Room(Room::new("Cellar", "Dark.").unwrap()))
        .unwrap();
    assert_eq!(rooms.kind(), Some(ContainerKind::Room));

    let mut items = ContainerList::new();
    items
        .push(ContainerEntry::Item(ItemHandle::new(
            ItemId::new(0, 1),
            "lamp",
        )))
        .unwrap();
    assert_eq!(items.kind(), Some(ContainerKind::Item));

    let mut commands = ContainerList::new();
    commands
        .push(ContainerEntry::Command(
            Command::new("look", "Look around.", r"^look$", 0).unwrap(),
        ))
        .unwrap();
    assert_eq!(commands.kind(), Some(ContainerKind::Command));

    let mut history = ContainerList::new();
    history.push(text("take lamp")).unwrap();
    assert_eq!(history.kind(), Some(ContainerKind::Text));
}

#[test]
fn append_wrong_kind_fails_without_mutating() {
    let mut list = ContainerList::new();
    list.push(ContainerEntry::Item(ItemHandle::new(
        ItemId::new(0, 1),
        "lamp",
    )))
    .unwrap();

    let room = Room::new("Cellar", "Dark.").unwrap();
    let err = list.push(ContainerEntry::Room(room)).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::KindMismatch {
            expected: ContainerKind::Item,
            actual: ContainerKind::Room,
        }
    ));
    assert_eq!(list.len(), 1);
}

#[test]
fn find_by_name_is_case_insensitive_across_kinds() {
    let mut list = ContainerList::new();
    list.push(ContainerEntry::Item(ItemHandle::new(
        ItemId::new(0, 1),
        "Chest",
    )))
    .unwrap();

    for lookup in ["chest", "CHEST", "ChEsT"] {
        let found = list.find_by_name(lookup).expect("lookup should hit");
        assert_eq!(found.name(), "Chest");
    }
}

#[test]
fn find_by_name_first_wins_on_duplicates() {
    let mut list = ContainerList::new();
    list.push(ContainerEntry::Item(ItemHandle::new(
        ItemId::new(0, 1),
        "coin",
    )))
    .unwrap();
    list.push(ContainerEntry::Item(ItemHandle::new(
        ItemId::new(1, 1),
        "coin",
    )))
    .unwrap();

    let first = list.find_by_name("coin").unwrap().as_item().unwrap();
    assert_eq!(first.id(), ItemId::new(0, 1));
}

#[test]
fn detach_leaves_the_payload_alive_and_unchanged() {
    let mut registry = ItemRegistry::new();
    let id = registry.insert(
        Item::new("lamp", "A brass lamp.", ItemFlags::MOVABLE | ItemFlags::USABLE).unwrap(),
    );

    let mut list = ContainerList::new();
    list.push(ContainerEntry::Item(registry.handle(id).unwrap()))
        .unwrap();

    let handle = list.detach_item(id).expect("detach should hit");
    assert!(list.is_empty());

    // The handle still reads as before and the registry still owns the
    // item with all fields intact.
    assert_eq!(handle.name(), "lamp");
    let item = registry.get(id).expect("item must survive detach");
    assert_eq!(item.name(), "lamp");
    assert_eq!(item.description(), "A brass lamp.");
    assert!(item.is_movable());
}

#[test]
fn clearing_a_non_owning_list_never_touches_the_registry() {
    let mut registry = ItemRegistry::new();
    let mut list = ContainerList::new();
    let mut ids = Vec::new();
    for name in ["lamp", "key", "rope"] {
        let id = registry.insert(Item::new(name, format!("a {name}"), ItemFlags::NONE).unwrap());
        ids.push(id);
        list.push(ContainerEntry::Item(registry.handle(id).unwrap()))
            .unwrap();
    }

    list.clear();
    drop(list);

    assert_eq!(registry.len(), 3);
    for id in ids {
        assert!(registry.get(id).is_some());
    }
}

#[test]
fn owning_list_drops_its_payloads_with_it() {
    // Rooms are owned by their list: once pushed, the room is gone when
    // the list is cleared. Observable as the list going empty and the
    // name lookup missing afterwards.
    let mut list = ContainerList::new();
    list.push(ContainerEntry::Room(Room::new("Cellar", "Dark.").unwrap()))
        .unwrap();
    list.push(ContainerEntry::Room(Room::new("Crypt", "Cold.").unwrap()))
        .unwrap();

    assert!(list.find_by_name("crypt").is_some());
    list.clear();
    assert!(list.find_by_name("crypt").is_none());
    assert_eq!(list.len(), 0);
}

#[test]
fn empty_text_payload_is_rejected() {
    let mut list = ContainerList::new();
    let err = list.push(text("")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingField("text")));
    assert!(list.is_empty());
}

#[test]
fn long_lists_drop_without_overflowing() {
    // The drop path unlinks iteratively; a deep recursive drop would
    // blow the stack here.
    let mut list = ContainerList::new();
    for i in 0..100_000 {
        list.push(text(&format!("line {i}"))).unwrap();
    }
    drop(list);
}
