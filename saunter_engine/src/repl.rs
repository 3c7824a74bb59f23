//! The read-eval-print loop.
//!
//! Thin glue between the input backend, the parser, and room dispatch:
//! prompt, read a line, parse it, hand the command to the current room, and
//! print the wrapped reply. Everything interesting happens in the modules
//! this one stitches together.

mod input;

use anyhow::Result;
use log::info;
use saunter_data::Command;

use crate::output::wrap;
use crate::parser::Parser;
use crate::room::World;
use crate::style::GameStyle;

pub use input::{InputEvent, InputManager};

/// Control flow signal used by the loop to exit.
enum ReplControl {
    Continue,
    Quit,
}

/// Words that end the session before parsing begins.
const QUIT_WORDS: &[&str] = &["quit", "exit", "q"];

/// Run the read-eval-print loop until the player quits.
///
/// # Errors
/// Propagates input backend failures; parse and dispatch never fail.
pub fn run_repl(world: &mut World, parser: &Parser) -> Result<()> {
    let mut input_manager = InputManager::new(parser.vocabulary());
    let mut turn: u64 = 0;

    loop {
        turn += 1;
        let prompt = format!("\n[{turn}]>> ").prompt_style().to_string();

        let event = input_manager.read_line(&prompt)?;
        let line = match event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                info!("EOF on input; ending session");
                break;
            },
            InputEvent::Interrupted => {
                println!("{}", "Command canceled.".aside_style());
                continue;
            },
        };

        if let ReplControl::Quit = handle_line(world, parser, &line) {
            break;
        }
    }
    Ok(())
}

/// Parse and dispatch one line, printing the reply. Split from the loop so
/// the session flow can be tested without a terminal.
fn handle_line(world: &mut World, parser: &Parser, line: &str) -> ReplControl {
    let trimmed = line.trim();
    if QUIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
        info!("player quit after input '{trimmed}'");
        println!("{}", "Until next time.".description_style());
        return ReplControl::Quit;
    }

    let command = parser.parse_command(line);
    info!("parsed '{}' -> {:?}", command.full_text, command.verb);
    print_profanity_aside(&command);

    let reply = world.dispatch(&command);
    println!("{}", wrap(&reply).description_style());
    ReplControl::Continue
}

fn print_profanity_aside(command: &Command) {
    if command.profanity_detected {
        let aside = format!("(There's no call for \"{}\" talk here.)", command.profanity);
        println!("{}", aside.aside_style());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::Room;

    fn hall_world() -> World {
        let mut world = World::new();
        world.add_room(Room::new("Hall", "A draughty hall."));
        world
    }

    #[test]
    fn quit_words_end_the_session() {
        let parser = Parser::new();
        for word in ["quit", "exit", "q", "  QUIT  "] {
            let mut world = hall_world();
            assert!(matches!(
                handle_line(&mut world, &parser, word),
                ReplControl::Quit
            ));
        }
    }

    #[test]
    fn ordinary_commands_continue_the_session() {
        let parser = Parser::new();
        let mut world = hall_world();
        assert!(matches!(
            handle_line(&mut world, &parser, "look around"),
            ReplControl::Continue
        ));
    }
}
