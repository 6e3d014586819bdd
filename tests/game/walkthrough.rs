//! Full sessions of the demo dungeon.

use oubliette::foundation::Result;
use oubliette::runtime::demo::demo_game;
use oubliette::runtime::{GameState, LineEditor, ReadResult};

/// Feeds a fixed script of lines, then EOF.
struct Script {
    lines: Vec<String>,
    index: usize,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| (*s).to_string()).collect(),
            index: 0,
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        if self.index < self.lines.len() {
            let line = self.lines[self.index].clone();
            self.index += 1;
            Ok(ReadResult::Line(line))
        } else {
            Ok(ReadResult::Eof)
        }
    }

    fn add_history(&mut self, _line: &str) {}
}

#[test]
fn the_demo_dungeon_can_be_won() {
    let mut game = demo_game().unwrap();
    let mut editor = Script::new(&[
        "take lantern",
        "north",
        "east",
        "take rusty key",
        "west",
        "north",
        "west",
        "open chest",
    ]);

    let state = game.play(&mut editor).unwrap();
    assert_eq!(state, GameState::Solved);
    assert_eq!(game.current_room(), "Crypt");
}

#[test]
fn opening_the_chest_without_the_key_does_not_win() {
    let mut game = demo_game().unwrap();
    let mut editor = Script::new(&["north", "north", "west", "open chest", "quit"]);

    let state = game.play(&mut editor).unwrap();
    assert_eq!(state, GameState::GameOver);
}

#[test]
fn backpack_capacity_limits_looting() {
    let mut game = demo_game().unwrap();
    // The demo backpack holds three items; the fourth take must fail
    // and leave the item in its room.
    for line in [
        "take lantern",
        "north",
        "east",
        "take rusty key",
        "take sword",
        "west",
        "west",
    ] {
        game.handle_line(line);
    }
    assert_eq!(game.backpack().len(), 3);
    assert_eq!(game.current_room(), "Store Room");

    let response = game.handle_line("take wine bottle").unwrap();
    assert_eq!(response, "Your backpack is full.");
    assert!(
        game.world()
            .room("Store Room")
            .unwrap()
            .find_item("wine bottle")
            .is_some()
    );
}

#[test]
fn scenery_refuses_to_move_or_open() {
    let mut game = demo_game().unwrap();
    for line in ["north", "north"] {
        game.handle_line(line);
    }
    assert_eq!(game.current_room(), "Chapel");

    assert_eq!(
        game.handle_line("take altar").unwrap(),
        "The altar won't budge."
    );
    assert_eq!(
        game.handle_line("open altar").unwrap(),
        "You can't open the altar."
    );
    let description = game.handle_line("examine altar").unwrap();
    assert!(description.contains("CROWN"));
}

#[test]
fn restart_hands_control_back_to_the_caller() {
    let mut game = demo_game().unwrap();
    let mut editor = Script::new(&["take lantern", "restart"]);

    let state = game.play(&mut editor).unwrap();
    assert_eq!(state, GameState::Restart);
    // The session keeps its state; rebuilding is the caller's job.
    assert_eq!(game.backpack().len(), 1);
}

#[test]
fn interrupt_is_a_nudge_not_an_exit() {
    struct Interrupting {
        sent: bool,
    }

    impl LineEditor for Interrupting {
        fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
            if self.sent {
                Ok(ReadResult::Eof)
            } else {
                self.sent = true;
                Ok(ReadResult::Interrupted)
            }
        }

        fn add_history(&mut self, _line: &str) {}
    }

    let mut game = demo_game().unwrap();
    let mut editor = Interrupting { sent: false };
    // Ctrl+C keeps the session alive; only the EOF afterwards ends it.
    let state = game.play(&mut editor).unwrap();
    assert_eq!(state, GameState::GameOver);
}

#[test]
fn a_session_logs_everything_the_player_typed() {
    let mut game = demo_game().unwrap();
    for line in ["look", "sing loudly", "  ", "take lantern"] {
        game.handle_line(line);
    }

    let history: Vec<_> = game.parser().history().collect();
    assert_eq!(history, vec!["look", "sing loudly", "take lantern"]);
}
