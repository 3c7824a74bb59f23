//! Synonym vocabularies.
//!
//! Four tables reduce surface words to canonical game values: verbs map to
//! [`VerbCode`], prepositions to [`PrepositionCode`], nouns to a canonical
//! noun string, and adjectives are a plain membership set. Lookups never
//! fail; a missing key yields the type's sentinel (or `None`/`false`).
//! Adding an entry with an empty or already-registered key is rejected with
//! a [`VocabError`] so a mapping is never silently lost.
//!
//! The default seed vocabulary is built once into shared statics and cloned
//! into each [`Vocabulary`], so parser instances never repeat the seeding
//! work.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::{PrepositionCode, VerbCode};

/// Errors raised when mutating a synonym table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabError {
    /// Table keys must be non-empty.
    #[error("synonym key may not be empty")]
    EmptyKey,
    /// Each surface word maps to exactly one canonical value.
    #[error("synonym '{0}' is already registered")]
    DuplicateKey(String),
}

fn check_key(key: &str, taken: bool) -> Result<(), VocabError> {
    if key.is_empty() {
        return Err(VocabError::EmptyKey);
    }
    if taken {
        return Err(VocabError::DuplicateKey(key.to_string()));
    }
    Ok(())
}

/// Surface word → [`VerbCode`] mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerbTable {
    entries: HashMap<String, VerbCode>,
}

impl VerbTable {
    /// Create an empty table (no seed vocabulary).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a synonym for a verb.
    ///
    /// # Errors
    /// Rejects empty and duplicate keys.
    pub fn add(&mut self, key: &str, verb: VerbCode) -> Result<(), VocabError> {
        check_key(key, self.entries.contains_key(key))?;
        self.entries.insert(key.to_string(), verb);
        Ok(())
    }

    /// Look up a word; unknown words yield [`VerbCode::NoCommand`].
    pub fn lookup(&self, key: &str) -> VerbCode {
        self.entries.get(key).copied().unwrap_or(VerbCode::NoCommand)
    }

    /// Number of registered synonyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no synonyms are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered surface words (used for REPL completion).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Surface word → canonical noun mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NounTable {
    entries: HashMap<String, String>,
}

impl NounTable {
    /// Create an empty table (no seed vocabulary).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a synonym for a noun.
    ///
    /// # Errors
    /// Rejects empty and duplicate keys.
    pub fn add(&mut self, key: &str, canonical: &str) -> Result<(), VocabError> {
        check_key(key, self.entries.contains_key(key))?;
        self.entries.insert(key.to_string(), canonical.to_string());
        Ok(())
    }

    /// Look up a word's canonical noun, if registered.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of registered synonyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no synonyms are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered surface words (used for REPL completion).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Surface word → [`PrepositionCode`] mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepositionTable {
    entries: HashMap<String, PrepositionCode>,
}

impl PrepositionTable {
    /// Create an empty table (no seed vocabulary).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a synonym for a preposition.
    ///
    /// # Errors
    /// Rejects empty and duplicate keys.
    pub fn add(&mut self, key: &str, prep: PrepositionCode) -> Result<(), VocabError> {
        check_key(key, self.entries.contains_key(key))?;
        self.entries.insert(key.to_string(), prep);
        Ok(())
    }

    /// Look up a word; unknown words yield [`PrepositionCode::NotRecognised`].
    pub fn lookup(&self, key: &str) -> PrepositionCode {
        self.entries
            .get(key)
            .copied()
            .unwrap_or(PrepositionCode::NotRecognised)
    }

    /// Number of registered synonyms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no synonyms are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Membership set of recognized adjectives.
///
/// Adjectives carry no canonical value; the parser records the surface word
/// as typed, so this table only answers "is this word an adjective?".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjectiveTable {
    entries: HashSet<String>,
}

impl AdjectiveTable {
    /// Create an empty table (no seed vocabulary).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adjective.
    ///
    /// # Errors
    /// Rejects empty and duplicate keys.
    pub fn add(&mut self, key: &str) -> Result<(), VocabError> {
        check_key(key, self.entries.contains(key))?;
        self.entries.insert(key.to_string());
        Ok(())
    }

    /// True if the word is a registered adjective.
    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Number of registered adjectives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no adjectives are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The four synonym tables a parser consults, as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    pub verbs: VerbTable,
    pub nouns: NounTable,
    pub prepositions: PrepositionTable,
    pub adjectives: AdjectiveTable,
}

impl Vocabulary {
    /// A vocabulary carrying the built-in seed tables: full verb and
    /// preposition synonyms, compass-direction nouns, and the curated
    /// adjective list.
    pub fn seeded() -> Self {
        Self {
            verbs: SEED_VERBS.clone(),
            nouns: SEED_NOUNS.clone(),
            prepositions: SEED_PREPOSITIONS.clone(),
            adjectives: SEED_ADJECTIVES.clone(),
        }
    }

    /// A vocabulary with all four tables empty, for test doubles or games
    /// that build their word lists from scratch.
    pub fn empty() -> Self {
        Self {
            verbs: VerbTable::new(),
            nouns: NounTable::new(),
            prepositions: PrepositionTable::new(),
            adjectives: AdjectiveTable::new(),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Built-in verb synonyms.
const VERB_SEED: &[(&str, VerbCode)] = &[
    ("go", VerbCode::Go),
    ("walk", VerbCode::Go),
    ("run", VerbCode::Go),
    ("move", VerbCode::Go),
    ("travel", VerbCode::Go),
    ("head", VerbCode::Go),
    ("climb", VerbCode::Go),
    ("enter", VerbCode::Go),
    ("saunter", VerbCode::Go),
    ("take", VerbCode::Take),
    ("grab", VerbCode::Take),
    ("get", VerbCode::Take),
    ("pick", VerbCode::Take),
    ("pickup", VerbCode::Take),
    ("steal", VerbCode::Take),
    ("collect", VerbCode::Take),
    ("fetch", VerbCode::Take),
    ("use", VerbCode::Use),
    ("apply", VerbCode::Use),
    ("employ", VerbCode::Use),
    ("insert", VerbCode::Use),
    ("operate", VerbCode::Use),
    ("look", VerbCode::Look),
    ("examine", VerbCode::Look),
    ("inspect", VerbCode::Look),
    ("view", VerbCode::Look),
    ("stare", VerbCode::Look),
    ("watch", VerbCode::Look),
    ("read", VerbCode::Look),
    ("search", VerbCode::Look),
    ("drop", VerbCode::Drop),
    ("discard", VerbCode::Drop),
    ("release", VerbCode::Drop),
    ("leave", VerbCode::Drop),
    ("hint", VerbCode::Hint),
    ("hints", VerbCode::Hint),
    ("help", VerbCode::Hint),
    ("clue", VerbCode::Hint),
    ("attack", VerbCode::Attack),
    ("hit", VerbCode::Attack),
    ("fight", VerbCode::Attack),
    ("kill", VerbCode::Attack),
    ("punch", VerbCode::Attack),
    ("strike", VerbCode::Attack),
    ("stab", VerbCode::Attack),
    ("smash", VerbCode::Attack),
    ("visit", VerbCode::Visit),
    ("eat", VerbCode::Eat),
    ("consume", VerbCode::Eat),
    ("devour", VerbCode::Eat),
    ("swallow", VerbCode::Eat),
    ("taste", VerbCode::Eat),
    ("drink", VerbCode::Eat),
];

/// Built-in preposition synonyms.
const PREPOSITION_SEED: &[(&str, PrepositionCode)] = &[
    ("into", PrepositionCode::Into),
    ("against", PrepositionCode::Against),
    ("to", PrepositionCode::To),
    ("in", PrepositionCode::In),
    ("inside", PrepositionCode::In),
    ("on", PrepositionCode::On),
    ("onto", PrepositionCode::On),
    ("upon", PrepositionCode::On),
    ("through", PrepositionCode::Through),
    ("over", PrepositionCode::Over),
    ("under", PrepositionCode::Under),
    ("beneath", PrepositionCode::Under),
    ("below", PrepositionCode::Under),
    ("across", PrepositionCode::Across),
    ("behind", PrepositionCode::Behind),
    ("at", PrepositionCode::At),
    ("up", PrepositionCode::Up),
    ("from", PrepositionCode::From),
    ("with", PrepositionCode::With),
    ("using", PrepositionCode::With),
];

/// Built-in noun synonyms: compass directions only. Game worlds register
/// their own object nouns on top of these.
const NOUN_SEED: &[(&str, &str)] = &[
    ("north", "north"),
    ("n", "north"),
    ("south", "south"),
    ("s", "south"),
    ("east", "east"),
    ("e", "east"),
    ("west", "west"),
    ("w", "west"),
    ("northeast", "northeast"),
    ("ne", "northeast"),
    ("northwest", "northwest"),
    ("nw", "northwest"),
    ("southeast", "southeast"),
    ("se", "southeast"),
    ("southwest", "southwest"),
    ("sw", "southwest"),
    ("up", "up"),
    ("u", "up"),
    ("down", "down"),
    ("d", "down"),
    ("forward", "forward"),
    ("f", "forward"),
    ("backward", "backward"),
    ("b", "backward"),
    ("left", "left"),
    ("l", "left"),
    ("right", "right"),
    ("r", "right"),
];

/// Built-in adjective list: appearance, personality, and size words players
/// are likely to attach to object nouns.
const ADJECTIVE_SEED: &[&str] = &[
    // appearance
    "shiny", "rusty", "dull", "bright", "dark", "pale", "gleaming", "glowing", "faded",
    "red", "blue", "green", "golden", "silver", "black", "white", "grey", "brown",
    "wooden", "metal", "stone", "glass", "dirty", "clean", "smooth", "rough", "polished",
    "striped", "spotted", "plain", "fancy", "ornate", "beautiful", "ugly", "pretty",
    "handsome", "cracked", "broken", "sturdy", "fragile", "wet", "dry", "slimy", "sticky",
    "fuzzy", "hairy", "bald", "sharp", "blunt", "soft", "hard", "warm", "cold", "hot",
    "frozen", "burnt", "twisted", "straight", "crooked", "curved", "flat", "round",
    "square", "hollow", "solid", "empty", "full",
    // personality
    "angry", "happy", "sad", "friendly", "grumpy", "kind", "cruel", "wise", "foolish",
    "brave", "cowardly", "sneaky", "noisy", "quiet", "strange", "odd", "mysterious",
    "magical", "sleepy", "cheerful", "gloomy", "nervous", "calm", "fierce", "gentle",
    // size
    "big", "small", "large", "little", "tiny", "huge", "fat", "thin", "tall", "short",
    "long", "wide", "narrow", "heavy", "light", "gigantic", "enormous", "massive",
    "miniature", "slender", "stout", "old", "new", "young", "ancient",
];

lazy_static! {
    static ref SEED_VERBS: VerbTable = {
        let mut table = VerbTable::new();
        for &(word, verb) in VERB_SEED {
            table.add(word, verb).expect("verb seed contains a duplicate");
        }
        table
    };
    static ref SEED_NOUNS: NounTable = {
        let mut table = NounTable::new();
        for &(word, canonical) in NOUN_SEED {
            table.add(word, canonical).expect("noun seed contains a duplicate");
        }
        table
    };
    static ref SEED_PREPOSITIONS: PrepositionTable = {
        let mut table = PrepositionTable::new();
        for &(word, prep) in PREPOSITION_SEED {
            table.add(word, prep).expect("preposition seed contains a duplicate");
        }
        table
    };
    static ref SEED_ADJECTIVES: AdjectiveTable = {
        let mut table = AdjectiveTable::new();
        for &word in ADJECTIVE_SEED {
            table.add(word).expect("adjective seed contains a duplicate");
        }
        table
    };
}
