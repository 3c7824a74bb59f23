#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Saunter **
//! Interactive fiction engine demo binary.
//!
//! Seeds a tiny two-room world and a handful of nouns, then hands control to
//! the REPL. Real games supply their own rooms, logic overrides, and
//! vocabulary on top of `saunter_engine` as a library.

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use saunter_engine::room::{Room, RoomLogic, World};
use saunter_engine::style::GameStyle;
use saunter_engine::{Command, Parser, run_repl};

/// The hall knows about its loose floorboard key.
struct HallLogic {
    key_taken: bool,
}

impl RoomLogic for HallLogic {
    fn handle_command(&mut self, command: &Command) -> Option<String> {
        if command.verb.is_take() && command.noun_1 == "key" {
            if self.key_taken {
                return Some("You already have the key.".to_string());
            }
            self.key_taken = true;
            return Some("You prise the rusty key from under the floorboard.".to_string());
        }
        None
    }
}

fn build_world() -> World {
    let mut hall = Room::new(
        "Entrance Hall",
        "A draughty hall. A loose floorboard hides something rusty.",
    );
    hall.add_exit("north", "Study");

    let mut study = Room::new("Study", "Bookshelves lean at alarming angles.");
    study.add_exit("south", "Entrance Hall");

    let mut world = World::new();
    world.add_room(hall);
    world.add_room(study);
    world.set_room_logic("Entrance Hall", Box::new(HallLogic { key_taken: false }));
    world
}

fn build_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    let nouns = &mut parser.vocabulary_mut().nouns;
    for noun in ["key", "floorboard", "bookshelf", "book", "door"] {
        nouns.add(noun, noun).with_context(|| format!("while registering demo noun '{noun}'"))?;
    }
    Ok(parser)
}

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: building demo world...");
    let mut world = build_world();
    let parser = build_parser().context("while building demo parser")?;
    info!("Demo world ready. Starting the game!");

    println!("{:^84}", "SAUNTER: A STROLL THROUGH TWO ROOMS".bright_yellow().underline());
    println!(
        "\n{}\n",
        "Type commands like \"look\", \"go north\", or \"take key\". \"quit\" leaves.".description_style()
    );

    run_repl(&mut world, &parser)
}
