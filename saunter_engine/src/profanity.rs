//! Profanity detection.
//!
//! Scans sanitized input for the first profane word or phrase from a fixed
//! built-in list. Advisory only: the match is reported on the parsed
//! [`Command`](saunter_data::Command) and parsing continues regardless.
//! Callers decide what, if anything, to do about it.

/// Built-in profane terms, already in sanitized form (lowercase, no
/// punctuation). Multi-word phrases are matched as a unit.
const PROFANE_TERMS: &[&str] = &[
    "2 girls 1 cup",
    "arse",
    "arsehole",
    "ass",
    "asshole",
    "bastard",
    "bitch",
    "bollocks",
    "bugger",
    "crap",
    "dammit",
    "damn",
    "fuck",
    "fucking",
    "piss",
    "prick",
    "shit",
    "shite",
    "twat",
    "wanker",
];

/// Find the first profane term occurring in already-sanitized text.
///
/// Matches on word boundaries within the space-joined token form, so "hit"
/// inside "shitake" does not trip the filter. Returns the matched term
/// verbatim from the list, or `None`.
pub fn first_profanity(lower: &str) -> Option<&'static str> {
    let mut earliest: Option<(usize, &'static str)> = None;
    for term in PROFANE_TERMS {
        if let Some(pos) = find_word(lower, term) {
            let better = match earliest {
                // same start: prefer the longer phrase
                Some((best, held)) => pos < best || (pos == best && term.len() > held.len()),
                None => true,
            };
            if better {
                earliest = Some((pos, term));
            }
        }
    }
    earliest.map(|(_, term)| term)
}

/// Position of `term` in `text` with both ends on a word boundary, if any.
fn find_word(text: &str, term: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(offset) = text[search_from..].find(term) {
        let start = search_from + offset;
        let end = start + term.len();
        let bounded_left = start == 0 || text.as_bytes()[start - 1] == b' ';
        let bounded_right = end == text.len() || text.as_bytes()[end] == b' ';
        if bounded_left && bounded_right {
            return Some(start);
        }
        search_from = start + 1;
    }
    None
}
