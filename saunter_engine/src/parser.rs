//! Natural-language command parser.
//!
//! Reduces a raw line of player input to a [`Command`] by walking a fixed
//! slot grammar: Verb → \[Adj\] Noun → Prep → \[Adj\] Noun → Prep → \[Adj\] Noun.
//! The walk is a single forward scan with skip-on-mismatch semantics in every
//! state, which tolerates filler words ("I say old chap, could you use the
//! key on the door...") without backtracking or reordering. Unparseable
//! input is not an error: it comes back as a command full of sentinel values.
//!
//! A [`Parser`] holds only configuration (its vocabulary and the profanity
//! toggle); all scratch state lives on the stack of [`Parser::parse_command`],
//! so one instance can be shared freely across calls.

use log::debug;
use saunter_data::{Command, PrepositionCode, Vocabulary};

use crate::directions::direction_command;
use crate::profanity::first_profanity;
use crate::sanitize::sanitize;

/// Cursor for the slot grammar. Strictly forward; no state ever transitions
/// backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Verb,
    Noun1,
    Preposition1,
    Noun2,
    Preposition2,
    Noun3,
    Done,
}

/// Configurable command parser.
///
/// Owns its four synonym tables by composition. Construct with the built-in
/// seed vocabulary via [`Parser::new`], or inject a caller-built
/// [`Vocabulary`] (test doubles, per-game word lists) via
/// [`Parser::with_vocabulary`].
#[derive(Debug, Clone)]
pub struct Parser {
    vocabulary: Vocabulary,
    profanity_filter: bool,
}

impl Parser {
    /// Parser with the default seeded vocabulary and the profanity filter on.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::seeded())
    }

    /// Parser over a caller-supplied vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            profanity_filter: true,
        }
    }

    /// Enable or disable the profanity scan. Disabled means the scan is
    /// skipped entirely, not that matches are suppressed.
    pub fn set_profanity_filter(&mut self, enabled: bool) {
        self.profanity_filter = enabled;
    }

    /// Current profanity-filter setting.
    pub fn profanity_filter(&self) -> bool {
        self.profanity_filter
    }

    /// The parser's synonym tables.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Mutable access to the synonym tables, for registering game-specific
    /// nouns and other vocabulary after construction.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    /// Parse one line of player input into a [`Command`].
    ///
    /// Never fails: unrecognized words are skipped and an unparseable line
    /// yields a command of sentinel values. Each call builds a fresh command;
    /// nothing is retained between calls.
    pub fn parse_command(&self, raw: &str) -> Command {
        let clean = sanitize(raw);
        if clean.tokens.is_empty() {
            return Command::new();
        }

        let mut command = Command::new();

        if self.profanity_filter {
            if let Some(term) = first_profanity(&clean.lower) {
                debug!("profanity flagged: '{term}'");
                command.profanity_detected = true;
                command.profanity = term.to_string();
            }
        }

        if let [token] = clean.tokens.as_slice() {
            self.parse_single_word(token, &mut command);
        } else {
            self.run_state_machine(&clean.tokens, &mut command);
        }

        command.full_text = clean.lower;
        command
    }

    /// Single-token line: try the direction shortcut first, then fall back
    /// to a plain verb lookup ("look", "inventory"-style one-worders).
    fn parse_single_word(&self, token: &str, command: &mut Command) {
        let shortcut = direction_command(token);
        if shortcut.verb.is_go() {
            debug!("direction shortcut: '{token}' -> {}", shortcut.noun_1);
            command.verb = shortcut.verb;
            command.noun_1 = shortcut.noun_1;
            return;
        }
        command.verb = self.vocabulary.verbs.lookup(token);
        debug!("single word '{token}' -> {:?}", command.verb);
    }

    /// Feed the token sequence through the slot grammar, left to right.
    fn run_state_machine(&self, tokens: &[String], command: &mut Command) {
        let mut state = SlotState::Verb;

        for token in tokens {
            state = match state {
                SlotState::Verb => self.consume_verb(token, command),
                SlotState::Noun1 => {
                    self.consume_noun(token, command, SlotState::Noun1, SlotState::Preposition1)
                },
                SlotState::Preposition1 => {
                    self.consume_preposition(token, command, SlotState::Preposition1, SlotState::Noun2)
                },
                SlotState::Noun2 => {
                    self.consume_noun(token, command, SlotState::Noun2, SlotState::Preposition2)
                },
                SlotState::Preposition2 => {
                    self.consume_preposition(token, command, SlotState::Preposition2, SlotState::Noun3)
                },
                SlotState::Noun3 => self.consume_noun(token, command, SlotState::Noun3, SlotState::Done),
                // all slots filled; trailing tokens are discarded
                SlotState::Done => break,
            };
        }
    }

    /// Verb state: resolve and advance, or skip leading filler.
    fn consume_verb(&self, token: &str, command: &mut Command) -> SlotState {
        let verb = self.vocabulary.verbs.lookup(token);
        if verb.is_no_command() {
            debug!("skipping '{token}' while seeking verb");
            return SlotState::Verb;
        }
        debug!("verb '{token}' -> {verb:?}");
        command.verb = verb;
        SlotState::Noun1
    }

    /// Noun state: an adjective is recorded without advancing; a resolved
    /// noun fills the slot and advances; anything else is skipped.
    fn consume_noun(&self, token: &str, command: &mut Command, stay: SlotState, next: SlotState) -> SlotState {
        if self.vocabulary.adjectives.exists(token) {
            debug!("adjective '{token}' recorded in {stay:?}");
            *adjective_slot(command, stay) = token.to_string();
            return stay;
        }
        if let Some(canonical) = self.vocabulary.nouns.lookup(token) {
            debug!("noun '{token}' -> '{canonical}' fills {stay:?}");
            *noun_slot(command, stay) = canonical.to_string();
            return next;
        }
        debug!("skipping '{token}' in {stay:?}");
        stay
    }

    /// Preposition state: resolve and advance, or skip.
    fn consume_preposition(
        &self,
        token: &str,
        command: &mut Command,
        stay: SlotState,
        next: SlotState,
    ) -> SlotState {
        let prep = self.vocabulary.prepositions.lookup(token);
        if prep == PrepositionCode::NotRecognised {
            debug!("skipping '{token}' in {stay:?}");
            return stay;
        }
        debug!("preposition '{token}' -> {prep:?}");
        *preposition_slot(command, stay) = prep;
        next
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn noun_slot(command: &mut Command, state: SlotState) -> &mut String {
    match state {
        SlotState::Noun1 => &mut command.noun_1,
        SlotState::Noun2 => &mut command.noun_2,
        SlotState::Noun3 => &mut command.noun_3,
        _ => unreachable!("noun slot requested for {state:?}"),
    }
}

fn adjective_slot(command: &mut Command, state: SlotState) -> &mut String {
    match state {
        SlotState::Noun1 => &mut command.adjective_1,
        SlotState::Noun2 => &mut command.adjective_2,
        SlotState::Noun3 => &mut command.adjective_3,
        _ => unreachable!("adjective slot requested for {state:?}"),
    }
}

fn preposition_slot(command: &mut Command, state: SlotState) -> &mut PrepositionCode {
    match state {
        SlotState::Preposition1 => &mut command.preposition_1,
        SlotState::Preposition2 => &mut command.preposition_2,
        _ => unreachable!("preposition slot requested for {state:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saunter_data::VerbCode;

    fn parser_with_nouns(nouns: &[&str]) -> Parser {
        let mut parser = Parser::new();
        for noun in nouns {
            parser.vocabulary_mut().nouns.add(noun, noun).unwrap();
        }
        parser
    }

    #[test]
    fn empty_input_returns_default_command() {
        let parser = Parser::new();
        let cmd = parser.parse_command("");
        assert_eq!(cmd, Command::new());
        assert_eq!(cmd.full_text, "");
        assert_eq!(cmd.verb, VerbCode::NoCommand);
    }

    #[test]
    fn single_direction_token() {
        let parser = Parser::new();
        let cmd = parser.parse_command("NE");
        assert_eq!(cmd.verb, VerbCode::Go);
        assert_eq!(cmd.noun_1, "northeast");
        assert_eq!(cmd.full_text, "ne");
        assert_eq!(cmd.preposition_1, PrepositionCode::NotRecognised);
        assert!(cmd.noun_2.is_empty());
    }

    #[test]
    fn single_verb_token() {
        let parser = Parser::new();
        let cmd = parser.parse_command("look");
        assert_eq!(cmd.verb, VerbCode::Look);
        assert_eq!(cmd.full_text, "look");
        assert!(cmd.noun_1.is_empty());
    }

    #[test]
    fn single_unknown_token() {
        let parser = Parser::new();
        let cmd = parser.parse_command("xyzzy");
        assert_eq!(cmd.verb, VerbCode::NoCommand);
        assert_eq!(cmd.full_text, "xyzzy");
    }

    #[test]
    fn go_north() {
        let parser = Parser::new();
        let cmd = parser.parse_command("Go North");
        assert_eq!(cmd.verb, VerbCode::Go);
        assert_eq!(cmd.noun_1, "north");
        assert_eq!(cmd.full_text, "go north");
    }

    #[test]
    fn verb_synonym_with_preposition_and_second_noun() {
        let parser = parser_with_nouns(&["key", "floor"]);
        let cmd = parser.parse_command("Grab Key from floor");
        assert_eq!(cmd.verb, VerbCode::Take);
        assert_eq!(cmd.noun_1, "key");
        assert_eq!(cmd.preposition_1, PrepositionCode::From);
        assert_eq!(cmd.noun_2, "floor");
    }

    #[test]
    fn leading_filler_before_verb_is_skipped() {
        let parser = parser_with_nouns(&["key", "door"]);
        let cmd = parser.parse_command("I say old chap could you use the key on the door");
        assert_eq!(cmd.verb, VerbCode::Use);
        assert_eq!(cmd.noun_1, "key");
        assert_eq!(cmd.preposition_1, PrepositionCode::On);
        assert_eq!(cmd.noun_2, "door");
    }

    #[test]
    fn spurious_verb_in_noun_state_is_swallowed() {
        let parser = parser_with_nouns(&["key", "door"]);
        let cmd = parser.parse_command("could you please use the use key on door");
        assert_eq!(cmd.verb, VerbCode::Use);
        assert_eq!(cmd.noun_1, "key");
        assert_eq!(cmd.preposition_1, PrepositionCode::On);
        assert_eq!(cmd.noun_2, "door");
    }

    #[test]
    fn adjectives_fill_slots_without_consuming_them() {
        let parser = parser_with_nouns(&["key", "door", "ledge"]);
        let cmd = parser.parse_command("use fat key on door under ledge");
        assert_eq!(cmd.verb, VerbCode::Use);
        assert_eq!(cmd.adjective_1, "fat");
        assert_eq!(cmd.noun_1, "key");
        assert_eq!(cmd.preposition_1, PrepositionCode::On);
        assert_eq!(cmd.adjective_2, "");
        assert_eq!(cmd.noun_2, "door");
        assert_eq!(cmd.preposition_2, PrepositionCode::Under);
        assert_eq!(cmd.adjective_3, "");
        assert_eq!(cmd.noun_3, "ledge");
    }

    #[test]
    fn tokens_after_noun_3_are_ignored() {
        let parser = parser_with_nouns(&["key", "door", "ledge", "mat"]);
        let cmd = parser.parse_command("use key on door under ledge behind mat");
        assert_eq!(cmd.noun_3, "ledge");
        // "behind mat" falls off the end of the grammar
        assert_eq!(cmd.preposition_2, PrepositionCode::Under);
    }

    #[test]
    fn profanity_annotates_without_blocking_parse() {
        let parser = Parser::new();
        let cmd = parser.parse_command("watch 2 girls 1 cup on tv");
        assert!(cmd.profanity_detected);
        assert_eq!(cmd.profanity, "2 girls 1 cup");
        // "watch" still resolves as a verb
        assert_eq!(cmd.verb, VerbCode::Look);
        assert_eq!(cmd.full_text, "watch 2 girls 1 cup on tv");
    }

    #[test]
    fn profanity_filter_can_be_disabled() {
        let mut parser = Parser::new();
        parser.set_profanity_filter(false);
        let cmd = parser.parse_command("watch 2 girls 1 cup on tv");
        assert!(!cmd.profanity_detected);
        assert!(cmd.profanity.is_empty());
    }

    #[test]
    fn unparseable_sentence_is_not_an_error() {
        let parser = Parser::new();
        let cmd = parser.parse_command("colorless green ideas sleep furiously");
        assert_eq!(cmd.verb, VerbCode::NoCommand);
        assert!(cmd.noun_1.is_empty());
        assert_eq!(cmd.full_text, "colorless green ideas sleep furiously");
    }

    #[test]
    fn parser_is_reusable_across_calls() {
        let parser = parser_with_nouns(&["key"]);
        let first = parser.parse_command("take key");
        assert_eq!(first.noun_1, "key");
        // nothing from the first parse may leak into the second
        let second = parser.parse_command("look");
        assert_eq!(second.verb, VerbCode::Look);
        assert!(second.noun_1.is_empty());
        assert_eq!(second.full_text, "look");
    }

    #[test]
    fn injected_empty_vocabulary_recognizes_nothing() {
        let parser = Parser::with_vocabulary(Vocabulary::empty());
        let cmd = parser.parse_command("take the key");
        assert_eq!(cmd.verb, VerbCode::NoCommand);
        assert!(cmd.noun_1.is_empty());
    }

    #[test]
    fn punctuation_heavy_input_parses() {
        let parser = parser_with_nouns(&["key"]);
        let cmd = parser.parse_command("Take the Key,, please!!");
        assert_eq!(cmd.verb, VerbCode::Take);
        assert_eq!(cmd.noun_1, "key");
        assert_eq!(cmd.full_text, "take the key please");
    }
}
