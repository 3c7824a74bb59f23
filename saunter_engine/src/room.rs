//! Rooms and the command-dispatch contract.
//!
//! The parser's output is handed to the room the player currently occupies.
//! Authors attach a [`RoomLogic`] override to any room that needs bespoke
//! behavior; everything it declines falls through to the engine's default
//! handling (movement along exits, look, and a shrug for the rest).
//! World-graph features beyond that (doors, locks, inventories) belong to
//! the game layer, not this crate.

use std::collections::HashMap;

use log::info;
use saunter_data::{Command, VerbCode};
use serde::{Deserialize, Serialize};

/// Per-room command handling override.
///
/// Return `Some(reply)` to handle the command, or `None` to fall through to
/// the engine's default dispatch.
pub trait RoomLogic {
    fn handle_command(&mut self, command: &Command) -> Option<String>;
}

/// A location the player can occupy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub description: String,
    /// Canonical direction → destination room name.
    #[serde(default)]
    pub exits: HashMap<String, String>,
}

impl Room {
    /// Create a room with no exits.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            exits: HashMap::new(),
        }
    }

    /// Add an exit in the given canonical direction.
    pub fn add_exit(&mut self, direction: &str, destination: &str) {
        self.exits.insert(direction.to_string(), destination.to_string());
    }

    /// Full description of the room, including its exits.
    pub fn describe(&self) -> String {
        if self.exits.is_empty() {
            return format!("{}\n{}", self.name, self.description);
        }
        let mut exits: Vec<&str> = self.exits.keys().map(String::as_str).collect();
        exits.sort_unstable();
        format!("{}\n{}\nExits: {}.", self.name, self.description, exits.join(", "))
    }
}

/// The set of rooms, their logic overrides, and the player's position.
#[derive(Default)]
pub struct World {
    rooms: HashMap<String, Room>,
    logic: HashMap<String, Box<dyn RoomLogic>>,
    current: String,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. The first room added becomes the starting location.
    pub fn add_room(&mut self, room: Room) {
        if self.current.is_empty() {
            self.current = room.name.clone();
        }
        self.rooms.insert(room.name.clone(), room);
    }

    /// Attach a logic override to the named room.
    pub fn set_room_logic(&mut self, room_name: &str, logic: Box<dyn RoomLogic>) {
        self.logic.insert(room_name.to_string(), logic);
    }

    /// The room the player currently occupies, if the world is non-empty.
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.current)
    }

    /// Dispatch a parsed command to the current room and return the reply.
    ///
    /// The room's [`RoomLogic`] override gets first refusal; whatever it
    /// declines is handled by the engine defaults.
    pub fn dispatch(&mut self, command: &Command) -> String {
        if let Some(logic) = self.logic.get_mut(&self.current) {
            if let Some(reply) = logic.handle_command(command) {
                return reply;
            }
        }
        self.default_dispatch(command)
    }

    fn default_dispatch(&mut self, command: &Command) -> String {
        match command.verb {
            VerbCode::Go => self.try_move(&command.noun_1),
            VerbCode::Look => self
                .current_room()
                .map_or_else(|| "There is nothing here at all.".to_string(), Room::describe),
            VerbCode::Hint => "Try looking around, or moving with compass directions.".to_string(),
            VerbCode::NoCommand => "I didn't catch that.".to_string(),
            _ => format!("You can't do that here ({}).", command.full_text),
        }
    }

    fn try_move(&mut self, direction: &str) -> String {
        if direction.is_empty() {
            return "Go where?".to_string();
        }
        let Some(room) = self.current_room() else {
            return "There is nowhere to go.".to_string();
        };
        let destination = room.exits.get(direction).cloned();
        match destination.and_then(|dest| self.rooms.get(&dest).map(|room| (dest, room.describe()))) {
            Some((dest, reply)) => {
                info!("player moves {direction} to '{dest}'");
                self.current = dest;
                reply
            },
            None => format!("You can't go {direction} from here."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn two_room_world() -> World {
        let mut hall = Room::new("Hall", "A draughty hall.");
        hall.add_exit("north", "Study");
        let mut study = Room::new("Study", "Books everywhere.");
        study.add_exit("south", "Hall");
        let mut world = World::new();
        world.add_room(hall);
        world.add_room(study);
        world
    }

    #[test]
    fn first_room_is_start() {
        let world = two_room_world();
        assert_eq!(world.current_room().unwrap().name, "Hall");
    }

    #[test]
    fn movement_follows_exits() {
        let mut world = two_room_world();
        let parser = Parser::new();
        let reply = world.dispatch(&parser.parse_command("go north"));
        assert!(reply.contains("Study"));
        assert_eq!(world.current_room().unwrap().name, "Study");
    }

    #[test]
    fn blocked_direction_reports_failure() {
        let mut world = two_room_world();
        let parser = Parser::new();
        let reply = world.dispatch(&parser.parse_command("go west"));
        assert!(reply.contains("can't go west"));
        assert_eq!(world.current_room().unwrap().name, "Hall");
    }

    #[test]
    fn look_describes_current_room() {
        let mut world = two_room_world();
        let parser = Parser::new();
        let reply = world.dispatch(&parser.parse_command("look"));
        assert!(reply.contains("draughty"));
        assert!(reply.contains("Exits: north."));
    }

    struct Echo;
    impl RoomLogic for Echo {
        fn handle_command(&mut self, command: &Command) -> Option<String> {
            command.verb.is_take().then(|| "You pocket it.".to_string())
        }
    }

    #[test]
    fn room_logic_overrides_and_falls_through() {
        let mut world = two_room_world();
        world.set_room_logic("Hall", Box::new(Echo));
        let mut parser = Parser::new();
        parser.vocabulary_mut().nouns.add("coin", "coin").unwrap();

        let reply = world.dispatch(&parser.parse_command("take coin"));
        assert_eq!(reply, "You pocket it.");

        // Echo declines "look"; default dispatch answers
        let reply = world.dispatch(&parser.parse_command("look"));
        assert!(reply.contains("draughty"));
    }
}
