//! Canonical command representation.
//!
//! A [`Command`] is the structured result of parsing one line of player
//! input: a verb, up to three noun phrases (each with an optional adjective),
//! up to two prepositions linking them, and a profanity annotation. Room
//! logic pattern-matches on these fields to produce a reply.

use serde::{Deserialize, Serialize};

/// Closed set of verbs the engine dispatches on.
///
/// `NoCommand` is the sentinel for "nothing recognized"; it is the default
/// and the value an unparseable line carries back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, variantly::Variantly)]
pub enum VerbCode {
    #[default]
    NoCommand,
    Go,
    Take,
    Use,
    Look,
    Drop,
    Hint,
    Attack,
    Visit,
    Eat,
}

/// Closed set of prepositions recognized between noun slots.
///
/// `NotRecognised` is the sentinel for an unfilled or unmatched slot.
/// `Up` and `From` are distinct variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrepositionCode {
    #[default]
    NotRecognised,
    Into,
    Against,
    To,
    In,
    On,
    Through,
    Over,
    Under,
    Across,
    Behind,
    At,
    Up,
    From,
    With,
}

/// Structured result of parsing one line of player input.
///
/// Built fresh on every parse; consumers may copy fields but should treat a
/// returned value as immutable. `Command::default()` is the documented empty
/// state: `NoCommand`, all strings empty, both prepositions `NotRecognised`,
/// no profanity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Sanitized form of the original input line.
    pub full_text: String,
    pub verb: VerbCode,
    #[serde(default)]
    pub adjective_1: String,
    #[serde(default)]
    pub noun_1: String,
    #[serde(default)]
    pub preposition_1: PrepositionCode,
    #[serde(default)]
    pub adjective_2: String,
    #[serde(default)]
    pub noun_2: String,
    #[serde(default)]
    pub preposition_2: PrepositionCode,
    #[serde(default)]
    pub adjective_3: String,
    #[serde(default)]
    pub noun_3: String,
    /// True if the profanity filter matched anywhere in the input.
    #[serde(default)]
    pub profanity_detected: bool,
    /// First profane term matched, verbatim from the filter list. Empty if none.
    #[serde(default)]
    pub profanity: String,
}

impl Command {
    /// Create an empty command (all sentinel values).
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no verb was recognized in the input.
    pub fn is_empty(&self) -> bool {
        self.verb.is_no_command() && self.noun_1.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_is_all_sentinels() {
        let cmd = Command::new();
        assert_eq!(cmd.verb, VerbCode::NoCommand);
        assert_eq!(cmd.preposition_1, PrepositionCode::NotRecognised);
        assert_eq!(cmd.preposition_2, PrepositionCode::NotRecognised);
        assert!(cmd.full_text.is_empty());
        assert!(cmd.adjective_1.is_empty() && cmd.noun_1.is_empty());
        assert!(cmd.adjective_2.is_empty() && cmd.noun_2.is_empty());
        assert!(cmd.adjective_3.is_empty() && cmd.noun_3.is_empty());
        assert!(!cmd.profanity_detected);
        assert!(cmd.profanity.is_empty());
    }

    #[test]
    fn up_and_from_are_distinct() {
        assert_ne!(PrepositionCode::Up, PrepositionCode::From);
    }

    #[test]
    fn variantly_predicates_work() {
        assert!(VerbCode::NoCommand.is_no_command());
        assert!(VerbCode::Go.is_go());
        assert!(!VerbCode::Take.is_go());
    }
}
