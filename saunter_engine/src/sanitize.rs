//! Input sanitization.
//!
//! First stage of the parse pipeline: lowercase the line, strip punctuation,
//! and split it into tokens. Everything downstream (profanity scan, direction
//! shortcut, the state machine) works on the output of [`sanitize`].

/// A cleaned input line plus its token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// Lowercased, punctuation-free form of the input, tokens joined with
    /// single spaces. Re-sanitizing this string is a no-op.
    pub lower: String,
    /// The individual words, in order. Never contains empty strings.
    pub tokens: Vec<String>,
}

/// Lowercase a raw input line, remove every character that is not a letter,
/// digit, or whitespace, and split the remainder into tokens.
///
/// Punctuation is deleted rather than replaced, so `"key,,"` becomes `"key"`.
/// Empty input yields an empty string and no tokens.
pub fn sanitize(raw: &str) -> Sanitized {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    // split_whitespace coalesces runs, so punctuation-only gaps can't leak
    // empty tokens into the state machine
    let tokens: Vec<String> = cleaned.split_whitespace().map(str::to_string).collect();
    let lower = tokens.join(" ");

    Sanitized { lower, tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let clean = sanitize("Take the Key,, from the ground.");
        assert_eq!(clean.lower, "take the key from the ground");
        assert_eq!(
            clean.tokens,
            vec!["take", "the", "key", "from", "the", "ground"]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        let clean = sanitize("");
        assert_eq!(clean.lower, "");
        assert!(clean.tokens.is_empty());
    }

    #[test]
    fn punctuation_only_input_yields_nothing() {
        let clean = sanitize("?!... ,,,");
        assert_eq!(clean.lower, "");
        assert!(clean.tokens.is_empty());
    }

    #[test]
    fn no_empty_tokens_from_punctuation_gaps() {
        let clean = sanitize("use -- the ... key!!");
        assert!(clean.tokens.iter().all(|t| !t.is_empty()));
        assert_eq!(clean.tokens, vec!["use", "the", "key"]);
    }

    #[test]
    fn digits_survive() {
        let clean = sanitize("room 101");
        assert_eq!(clean.tokens, vec!["room", "101"]);
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize("  I say, Old Chap -- USE the key!  ");
        let twice = sanitize(&once.lower);
        assert_eq!(once, twice);
    }
}
