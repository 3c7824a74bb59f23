#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SAUNTER_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod directions;
pub mod fuzzy;
pub mod output;
pub mod parser;
pub mod profanity;
pub mod repl;
pub mod room;
pub mod sanitize;
pub mod style;

// Re-exports for convenience
pub use directions::direction_command;
pub use parser::Parser;
pub use repl::run_repl;
pub use room::{Room, RoomLogic, World};
pub use sanitize::{Sanitized, sanitize};
pub use saunter_data::{Command, PrepositionCode, VerbCode, Vocabulary};
