//! Oubliette CLI entry point.

use oubliette_runtime::{GameState, RustylineEditor, demo};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "-V" | "--version" => {
                println!("oubliette {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    let mut editor = RustylineEditor::new()?;
    println!("OUBLIETTE");
    println!("Type 'help' for the list of commands.\n");

    loop {
        let mut game = demo::demo_game()?;
        match game.play(&mut editor)? {
            GameState::Restart => {
                println!("\n--- A new descent begins ---\n");
            }
            GameState::Solved => {
                println!("Thanks for playing!");
                return Ok(());
            }
            _ => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn print_help() {
    println!("oubliette - a small text adventure");
    println!();
    println!("Usage: oubliette [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help");
    println!("  -V, --version  Show version");
}
