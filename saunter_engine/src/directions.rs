//! Bare-direction command shortcut.
//!
//! A single direction word ("north", "ne", "l") is by far the most common
//! thing players type, so it gets a direct lookup that bypasses the state
//! machine entirely and yields a ready-made Go command.

use saunter_data::{Command, VerbCode};

/// Map a direction word or abbreviation to its canonical direction.
pub fn canonical_direction(word: &str) -> Option<&'static str> {
    match word {
        "north" | "n" => Some("north"),
        "south" | "s" => Some("south"),
        "east" | "e" => Some("east"),
        "west" | "w" => Some("west"),
        "northeast" | "ne" => Some("northeast"),
        "northwest" | "nw" => Some("northwest"),
        "southeast" | "se" => Some("southeast"),
        "southwest" | "sw" => Some("southwest"),
        "up" | "u" => Some("up"),
        "down" | "d" => Some("down"),
        "forward" | "f" => Some("forward"),
        "backward" | "b" => Some("backward"),
        "left" | "l" => Some("left"),
        "right" | "r" => Some("right"),
        _ => None,
    }
}

/// Build a Go command from a bare direction token.
///
/// Recognized words yield `verb = Go`, `noun_1 = canonical direction`, and
/// `full_text` set to the token. Unrecognized words yield a default command
/// with `full_text` left empty; the caller fills it in.
pub fn direction_command(word: &str) -> Command {
    let mut command = Command::new();
    if let Some(direction) = canonical_direction(word) {
        command.verb = VerbCode::Go;
        command.noun_1 = direction.to_string();
        command.full_text = word.to_string();
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use saunter_data::PrepositionCode;

    #[test]
    fn full_words_map_to_themselves() {
        for word in [
            "north", "south", "east", "west", "northeast", "northwest", "southeast", "southwest",
            "up", "down", "forward", "backward", "left", "right",
        ] {
            let cmd = direction_command(word);
            assert_eq!(cmd.verb, VerbCode::Go, "direction '{word}'");
            assert_eq!(cmd.noun_1, word);
            assert_eq!(cmd.full_text, word);
        }
    }

    #[test]
    fn abbreviations_map_to_canonical() {
        let pairs = [
            ("n", "north"),
            ("s", "south"),
            ("e", "east"),
            ("w", "west"),
            ("ne", "northeast"),
            ("nw", "northwest"),
            ("se", "southeast"),
            ("sw", "southwest"),
            ("u", "up"),
            ("d", "down"),
            ("f", "forward"),
            ("b", "backward"),
            ("l", "left"),
            ("r", "right"),
        ];
        for (abbrev, canonical) in pairs {
            let cmd = direction_command(abbrev);
            assert_eq!(cmd.verb, VerbCode::Go, "abbreviation '{abbrev}'");
            assert_eq!(cmd.noun_1, canonical);
            assert_eq!(cmd.full_text, abbrev);
        }
    }

    #[test]
    fn unknown_word_yields_default_with_empty_full_text() {
        let cmd = direction_command("sideways");
        assert_eq!(cmd.verb, VerbCode::NoCommand);
        assert!(cmd.noun_1.is_empty());
        assert!(cmd.full_text.is_empty());
        assert_eq!(cmd.preposition_1, PrepositionCode::NotRecognised);
    }
}
