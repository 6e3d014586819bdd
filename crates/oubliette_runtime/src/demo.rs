//! The built-in demo dungeon.
//!
//! Six rooms under a ruined keep. The player starts in the cellar and
//! wins by opening the chest in the crypt while carrying the rusty key
//! from the armory.

use oubliette_foundation::Result;
use oubliette_storage::{Item, ItemFlags, Room, World};

use crate::game::{Game, WinCondition};

/// Backpack capacity for the demo game.
const BACKPACK_CAPACITY: usize = 3;

/// Builds the demo world and wraps it in a ready-to-play game.
///
/// # Errors
///
/// Returns an error only on a defect in the demo data itself (an empty
/// field or a bad standard pattern); callers treat it as fatal.
pub fn demo_game() -> Result<Game> {
    let world = demo_world()?;
    let game = Game::new(world, "Cellar", BACKPACK_CAPACITY)?.with_win_condition(WinCondition {
        target: "chest".to_string(),
        key: Some("rusty key".to_string()),
        locked_message: "The chest is locked. Its keyhole is crusted with rust.".to_string(),
        victory_message:
            "The rusty key grinds, then turns. Inside lies the lost crown of the oubliette. \
             You have won!"
                .to_string(),
    });
    Ok(game)
}

/// Builds the demo world: rooms, exits, and items.
///
/// # Errors
///
/// Returns an error only on a defect in the demo data itself.
pub fn demo_world() -> Result<World> {
    let mut world = World::new();

    let mut cellar = Room::new(
        "Cellar",
        "A damp stone cellar. Water drips somewhere in the dark.",
    )?;
    cellar.set_exits(Some("Corridor"), None, None, None);
    world.add_room(cellar)?;

    let mut corridor = Room::new(
        "Corridor",
        "A narrow corridor of rough-hewn stone. Doorways open on every side.",
    )?;
    corridor.set_exits(Some("Chapel"), Some("Cellar"), Some("Armory"), Some("Store Room"));
    world.add_room(corridor)?;

    let mut armory = Room::new(
        "Armory",
        "Racks that once held weapons line the walls, mostly empty now.",
    )?;
    armory.set_exits(None, None, None, Some("Corridor"));
    world.add_room(armory)?;

    let mut store_room = Room::new(
        "Store Room",
        "Collapsed shelves and burst barrels. It smells of old vinegar.",
    )?;
    store_room.set_exits(None, None, Some("Corridor"), None);
    world.add_room(store_room)?;

    let mut chapel = Room::new(
        "Chapel",
        "A small chapel. Faded frescoes peel from the ceiling.",
    )?;
    chapel.set_exits(None, Some("Corridor"), None, Some("Crypt"));
    world.add_room(chapel)?;

    let mut crypt = Room::new(
        "Crypt",
        "Cold and silent. Stone coffins stand in rows beneath the low vault.",
    )?;
    crypt.set_exits(None, None, Some("Chapel"), None);
    world.add_room(crypt)?;

    let lantern = world.spawn_item(Item::new(
        "lantern",
        "A dented brass lantern. It still holds a little oil.",
        ItemFlags::MOVABLE | ItemFlags::USABLE | ItemFlags::EXAMINABLE,
    )?);
    world.place_item("Cellar", lantern)?;

    let key = world.spawn_item(Item::new(
        "rusty key",
        "A heavy iron key, orange with rust. The bow is shaped like a crown.",
        ItemFlags::MOVABLE | ItemFlags::USABLE | ItemFlags::EXAMINABLE,
    )?);
    world.place_item("Armory", key)?;

    let sword = world.spawn_item(Item::new(
        "sword",
        "A short sword, notched but serviceable.",
        ItemFlags::MOVABLE | ItemFlags::EXAMINABLE,
    )?);
    world.place_item("Armory", sword)?;

    let bottle = world.spawn_item(Item::new(
        "wine bottle",
        "A dusty bottle. The label has long since rotted away.",
        ItemFlags::MOVABLE | ItemFlags::USABLE | ItemFlags::EXAMINABLE,
    )?);
    world.place_item("Store Room", bottle)?;

    let altar = world.spawn_item(Item::new(
        "altar",
        "A plain stone altar. Someone has scratched 'THE CROWN LIES BELOW' into it.",
        ItemFlags::EXAMINABLE,
    )?);
    world.place_item("Chapel", altar)?;

    let chest = world.spawn_item(Item::new(
        "chest",
        "An iron-bound chest with a rusted lock.",
        ItemFlags::OPENABLE | ItemFlags::EXAMINABLE,
    )?);
    world.place_item("Crypt", chest)?;

    Ok(world)
}
