//! The game state machine.
//!
//! Owns the parser, the world, and the player's backpack, and turns
//! recognized commands into world changes and response text. Rendering
//! is plain strings so the loop and the tests share one code path.

use oubliette_foundation::{Error, Result};
use oubliette_parser::{CommandMatch, ParseResult, Parser};
use oubliette_storage::{Backpack, Direction, ItemHandle, Room, World};

use crate::editor::{LineEditor, ReadResult};

/// The lifecycle states of one game session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// The game is running and accepting commands.
    Playing,
    /// The player quit (or the input stream ended).
    GameOver,
    /// The player won.
    Solved,
    /// The player asked to start over; the caller rebuilds the game.
    Restart,
}

/// What it takes to win: opening a particular item, optionally while
/// carrying another.
#[derive(Clone, Debug)]
pub struct WinCondition {
    /// Name of the openable item that ends the game.
    pub target: String,
    /// Name of the item that must be carried to open the target, if any.
    pub key: Option<String>,
    /// Shown when the target is opened without the key.
    pub locked_message: String,
    /// Shown on victory.
    pub victory_message: String,
}

/// One game session: world, parser, backpack, and current location.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    parser: Parser,
    world: World,
    current_room: String,
    backpack: Backpack,
    win: Option<WinCondition>,
}

impl Game {
    /// Creates a game over the given world with the standard command
    /// set registered.
    ///
    /// # Errors
    ///
    /// Returns a `RoomNotFound` error if `start_room` does not exist, or
    /// a creation failure if the standard command set cannot be built;
    /// both are fatal to initialization.
    pub fn new(world: World, start_room: &str, backpack_capacity: usize) -> Result<Self> {
        if world.room(start_room).is_none() {
            return Err(Error::room_not_found(start_room));
        }
        Ok(Self {
            state: GameState::Playing,
            parser: Parser::with_standard_commands()?,
            world,
            current_room: start_room.to_string(),
            backpack: Backpack::new(backpack_capacity),
            win: None,
        })
    }

    /// Attaches a win condition.
    #[must_use]
    pub fn with_win_condition(mut self, win: WinCondition) -> Self {
        self.win = Some(win);
        self
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns the player's backpack.
    #[must_use]
    pub fn backpack(&self) -> &Backpack {
        &self.backpack
    }

    /// Returns the parser driving this session.
    #[must_use]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Returns the name of the room the player is in.
    #[must_use]
    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    /// Feeds one line of player input through the parser and, if it was
    /// recognized, executes it.
    ///
    /// Returns the response text, or `None` for input that was empty
    /// after normalization (the front end stays silent rather than
    /// complaining about blank lines).
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        match self.parser.parse_input(line) {
            ParseResult::Recognized(m) => Some(self.execute(&m)),
            ParseResult::NotRecognized => Some("I don't understand that.".to_string()),
            ParseResult::Empty => None,
        }
    }

    /// Executes a recognized command and returns the response text.
    pub fn execute(&mut self, m: &CommandMatch) -> String {
        match m.name() {
            "north" => self.walk(Direction::North),
            "south" => self.walk(Direction::South),
            "east" => self.walk(Direction::East),
            "west" => self.walk(Direction::West),
            "go" => match m.group(1).and_then(Direction::parse) {
                Some(direction) => self.walk(direction),
                None => "Go where?".to_string(),
            },
            "look" => self.describe_room(),
            "examine" => self.examine(m.group(1).unwrap_or_default()),
            "take" => self.take(m.group(1).unwrap_or_default()),
            "drop" => self.drop_item(m.group(1).unwrap_or_default()),
            "use" => self.use_item(m.group(1).unwrap_or_default()),
            "open" => self.open(m.group(1).unwrap_or_default()),
            "inventory" => self.inventory(),
            "help" => self.help(),
            "restart" => {
                self.state = GameState::Restart;
                "Starting over...".to_string()
            }
            "quit" => {
                self.state = GameState::GameOver;
                "Goodbye.".to_string()
            }
            _ => "Nothing happens.".to_string(),
        }
    }

    /// Runs the interactive loop until the session leaves `Playing`.
    ///
    /// Returns the final state so the caller can distinguish a restart
    /// request from a quit or a win.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn play(&mut self, editor: &mut impl LineEditor) -> Result<GameState> {
        println!("{}\n", self.describe_room());

        while self.state == GameState::Playing {
            match editor.read_line("> ")? {
                ReadResult::Line(line) => {
                    editor.add_history(&line);
                    if let Some(response) = self.handle_line(&line) {
                        println!("{response}\n");
                    }
                }
                ReadResult::Interrupted => println!("(Type 'quit' to leave.)"),
                ReadResult::Eof => self.state = GameState::GameOver,
            }
        }

        Ok(self.state)
    }

    /// Describes the current room: description, visible items, open
    /// exits.
    #[must_use]
    pub fn describe_room(&self) -> String {
        let Some(room) = self.here() else {
            return "There is nothing here.".to_string();
        };

        let mut out = format!("-- {} --\n{}", room.name(), room.description());

        let items: Vec<_> = room.items().map(ItemHandle::name).collect();
        if !items.is_empty() {
            out.push_str(&format!("\nYou see: {}.", items.join(", ")));
        }

        let exits: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|direction| room.exit(*direction).is_some())
            .map(|direction| direction.to_string())
            .collect();
        if exits.is_empty() {
            out.push_str("\nThere are no exits.");
        } else {
            out.push_str(&format!("\nExits: {}.", exits.join(", ")));
        }

        out
    }

    fn here(&self) -> Option<&Room> {
        self.world.room(&self.current_room)
    }

    fn walk(&mut self, direction: Direction) -> String {
        let Some(destination) = self
            .here()
            .and_then(|room| room.exit(direction))
            .map(str::to_string)
        else {
            return "You can't go that way.".to_string();
        };
        // A dangling exit name is treated as a wall.
        if self.world.room(&destination).is_none() {
            return "You can't go that way.".to_string();
        }
        self.current_room = destination;
        self.describe_room()
    }

    /// Finds a named item the player can reach: the room first, then
    /// the backpack.
    fn reachable(&self, name: &str) -> Option<ItemHandle> {
        self.here()
            .and_then(|room| room.find_item(name))
            .or_else(|| self.backpack.find(name))
            .cloned()
    }

    fn examine(&self, name: &str) -> String {
        let Some(handle) = self.reachable(name) else {
            return format!("You see no {name} here.");
        };
        match self.world.item(handle.id()) {
            Some(item) if item.is_examinable() => item.description().to_string(),
            Some(item) => format!("There is nothing special about the {}.", item.name()),
            None => format!("You see no {name} here."),
        }
    }

    fn take(&mut self, name: &str) -> String {
        let Some(handle) = self.here().and_then(|room| room.find_item(name)).cloned() else {
            return format!("You see no {name} here.");
        };
        let (item_name, movable) = match self.world.item(handle.id()) {
            Some(item) => (item.name().to_string(), item.is_movable()),
            None => return format!("You see no {name} here."),
        };
        if !movable {
            return format!("The {item_name} won't budge.");
        }
        if self.backpack.is_full() {
            return "Your backpack is full.".to_string();
        }
        let Some(handle) = self
            .world
            .room_mut(&self.current_room)
            .and_then(|room| room.take_item(handle.id()))
        else {
            return format!("You see no {name} here.");
        };
        match self.backpack.add(handle) {
            Ok(()) => format!("You take the {item_name}."),
            Err(e) => e.to_string(),
        }
    }

    fn drop_item(&mut self, name: &str) -> String {
        let Some(handle) = self.backpack.find(name).cloned() else {
            return format!("You are not carrying a {name}.");
        };
        let Some(handle) = self.backpack.remove(handle.id()) else {
            return format!("You are not carrying a {name}.");
        };
        let item_name = handle.name().to_string();
        match self
            .world
            .room_mut(&self.current_room)
            .map(|room| room.add_item(handle))
        {
            Some(Ok(())) => format!("You drop the {item_name}."),
            Some(Err(e)) => e.to_string(),
            None => "There is nowhere to drop that.".to_string(),
        }
    }

    fn use_item(&mut self, name: &str) -> String {
        let Some(handle) = self.reachable(name) else {
            return format!("You see no {name} here.");
        };
        match self.world.item(handle.id()) {
            Some(item) if item.is_usable() => {
                format!("You fiddle with the {}, but nothing happens.", item.name())
            }
            Some(item) => format!("You can't use the {}.", item.name()),
            None => format!("You see no {name} here."),
        }
    }

    fn open(&mut self, name: &str) -> String {
        let Some(handle) = self.reachable(name) else {
            return format!("You see no {name} here.");
        };
        let item_name = match self.world.item(handle.id()) {
            Some(item) if item.is_openable() => item.name().to_string(),
            Some(item) => return format!("You can't open the {}.", item.name()),
            None => return format!("You see no {name} here."),
        };

        if let Some(win) = &self.win {
            if win.target.eq_ignore_ascii_case(&item_name) {
                let has_key = win
                    .key
                    .as_deref()
                    .is_none_or(|key| self.backpack.find(key).is_some());
                if has_key {
                    self.state = GameState::Solved;
                    return win.victory_message.clone();
                }
                return win.locked_message.clone();
            }
        }
        format!("You open the {item_name} and find nothing inside.")
    }

    fn inventory(&self) -> String {
        if self.backpack.is_empty() {
            return "You are carrying nothing.".to_string();
        }
        let names: Vec<_> = self.backpack.iter().map(ItemHandle::name).collect();
        format!(
            "You are carrying ({}/{}): {}.",
            self.backpack.len(),
            self.backpack.capacity(),
            names.join(", ")
        )
    }

    fn help(&self) -> String {
        let mut out = String::from("Commands:");
        for command in self.parser.commands() {
            out.push_str(&format!("\n  {:<10} {}", command.name(), command.description()));
        }
        out
    }
}
