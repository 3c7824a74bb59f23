//! Shared data model for Saunter games.
//!
//! Holds the parsed [`Command`] representation handed to room logic and the
//! synonym [`vocab`] tables that reduce free-text player input to canonical
//! game values. The engine crate owns the parsing pipeline; this crate owns
//! the vocabulary it parses against.

pub mod command;
pub mod vocab;

pub use command::{Command, PrepositionCode, VerbCode};
pub use vocab::{AdjectiveTable, NounTable, PrepositionTable, VerbTable, VocabError, Vocabulary};
