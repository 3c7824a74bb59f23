//! Fuzzy word-matching primitives.
//!
//! Not on the parse path. These are offered to game authors for
//! "did you mean ...?" affordances: classic Levenshtein edit distance and a
//! Metaphone-style phonetic key so "Stephen" and "Steven" compare equal.

use thiserror::Error;

/// Invalid-argument failures from the distance utilities.
///
/// Unrecognized or unmatchable words are never errors anywhere in the
/// engine; these fire only for input that is invalid outright.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FuzzyError {
    /// Both arguments to a distance or phonetic function must be non-empty.
    #[error("fuzzy matching requires non-empty input")]
    EmptyInput,
    /// The word contained no letters to encode.
    #[error("'{0}' contains no letters to encode")]
    NoLetters(String),
}

/// Classic dynamic-programming Levenshtein distance over case-folded input.
///
/// Full `(n+1) x (m+1)` table; counts insertions, deletions, and
/// substitutions. Symmetric, and zero for equal strings.
///
/// # Errors
/// [`FuzzyError::EmptyInput`] if either argument is empty.
pub fn levenshtein(a: &str, b: &str) -> Result<usize, FuzzyError> {
    if a.is_empty() || b.is_empty() {
        return Err(FuzzyError::EmptyInput);
    }
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }
    Ok(table[a.len()][b.len()])
}

const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

fn is_vowel(c: Option<char>) -> bool {
    c.is_some_and(|c| VOWELS.contains(&c))
}

/// Metaphone-style phonetic key for a word.
///
/// Deterministic transliteration to a consonant skeleton: vowels survive
/// only at position 0, doubled letters collapse, and a fixed per-letter rule
/// table handles the multi-letter contexts (PH→F, TH→0, C before E/I/Y→S,
/// silent GH, X→KS, and so on). Words that sound alike produce identical
/// keys despite differing spelling.
///
/// # Errors
/// [`FuzzyError::EmptyInput`] for an empty word, [`FuzzyError::NoLetters`]
/// if nothing alphabetic remains to encode.
pub fn metaphone(word: &str) -> Result<String, FuzzyError> {
    if word.is_empty() {
        return Err(FuzzyError::EmptyInput);
    }
    let mut letters: Vec<char> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if letters.is_empty() {
        return Err(FuzzyError::NoLetters(word.to_string()));
    }

    // initial-cluster exceptions: silent first letter in KN/GN/PN/WR/AE,
    // X sounds like S, WH sounds like W
    match (letters.first().copied(), letters.get(1).copied()) {
        (Some('K' | 'G' | 'P'), Some('N')) | (Some('W'), Some('R')) | (Some('A'), Some('E')) => {
            letters.remove(0);
        },
        (Some('X'), _) => letters[0] = 'S',
        (Some('W'), Some('H')) => {
            letters.remove(1);
        },
        _ => {},
    }

    let mut key = String::new();
    let mut i = 0;
    while i < letters.len() {
        let c = letters[i];
        // doubled letters collapse to one sound
        if i > 0 && letters[i - 1] == c {
            i += 1;
            continue;
        }
        let prev = if i > 0 { Some(letters[i - 1]) } else { None };
        let next = letters.get(i + 1).copied();
        let after = letters.get(i + 2).copied();

        let mut consumed = 1;
        match c {
            'A' | 'E' | 'I' | 'O' | 'U' => {
                if i == 0 {
                    key.push(c);
                }
            },
            'B' => {
                // silent terminal B after M, as in "lamb"
                if !(next.is_none() && prev == Some('M')) {
                    key.push('B');
                }
            },
            'C' => {
                if next == Some('I') && after == Some('A') {
                    key.push('X');
                } else if next == Some('H') {
                    key.push('X');
                    consumed = 2;
                } else if matches!(next, Some('I' | 'E' | 'Y')) {
                    key.push('S');
                } else {
                    key.push('K');
                }
            },
            'D' => {
                if next == Some('G') && matches!(after, Some('E' | 'I' | 'Y')) {
                    key.push('J');
                    consumed = 2;
                } else {
                    key.push('T');
                }
            },
            'G' => {
                if next == Some('H') {
                    if is_vowel(after) {
                        key.push('K');
                    }
                    // silent otherwise, as in "night"
                    consumed = 2;
                } else if matches!(next, Some('E' | 'I' | 'Y')) {
                    key.push('J');
                } else {
                    key.push('K');
                }
            },
            'H' => {
                // voiced only between vowels
                if is_vowel(prev) && is_vowel(next) {
                    key.push('H');
                }
            },
            'K' => {
                if prev != Some('C') {
                    key.push('K');
                }
            },
            'P' => {
                if next == Some('H') {
                    key.push('F');
                    consumed = 2;
                } else {
                    key.push('P');
                }
            },
            'Q' => key.push('K'),
            'S' => {
                if next == Some('H') {
                    key.push('X');
                    consumed = 2;
                } else if next == Some('I') && matches!(after, Some('O' | 'A')) {
                    key.push('X');
                } else {
                    key.push('S');
                }
            },
            'T' => {
                if next == Some('H') {
                    key.push('0');
                    consumed = 2;
                } else if next == Some('I') && matches!(after, Some('O' | 'A')) {
                    key.push('X');
                } else {
                    key.push('T');
                }
            },
            'V' => key.push('F'),
            'W' | 'Y' => {
                if is_vowel(next) {
                    key.push(c);
                }
            },
            'X' => key.push_str("KS"),
            'Z' => key.push('S'),
            // F, J, L, M, N, R pass straight through
            other => key.push(other),
        }
        i += consumed;
    }
    Ok(key)
}

/// Pick the closest candidate to a (possibly misspelled) word.
///
/// A candidate qualifies if it is within two edits, or if it shares the
/// word's phonetic key ("stefen" suggests "stephen"). Among qualifiers the
/// smallest edit distance wins, with a shared phonetic key breaking ties.
/// Returns `None` when nothing comes close.
pub fn did_you_mean<'a>(word: &str, candidates: &[&'a str]) -> Option<&'a str> {
    const MAX_EDITS: usize = 2;
    let word_key = metaphone(word).ok()?;

    let mut best: Option<(&'a str, usize, bool)> = None;
    for &candidate in candidates {
        let Ok(distance) = levenshtein(word, candidate) else {
            continue;
        };
        let sounds_alike = metaphone(candidate).is_ok_and(|key| key == word_key);
        if distance > MAX_EDITS && !sounds_alike {
            continue;
        }
        let better = match best {
            Some((_, best_distance, best_sound)) => {
                distance < best_distance || (distance == best_distance && sounds_alike && !best_sound)
            },
            None => true,
        };
        if better {
            best = Some((candidate, distance, sounds_alike));
        }
    }
    best.map(|(candidate, _, _)| candidate)
}
