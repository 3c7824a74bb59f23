//! Console output wrapping.

use textwrap::{fill, termwidth};

/// Widest line we'll print even on a very wide terminal.
const MAX_COLUMNS: usize = 84;

/// Wrap reply text to the terminal width (capped at [`MAX_COLUMNS`]).
pub fn wrap(text: &str) -> String {
    wrap_to(text, termwidth().min(MAX_COLUMNS))
}

/// Wrap reply text to an explicit column width.
pub fn wrap_to(text: &str, columns: usize) -> String {
    fill(text, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_lines_are_wrapped() {
        let text = "a torch flickers on the wall and shadows dance across the flagstones of the hall";
        let wrapped = wrap_to(text, 20);
        assert!(wrapped.lines().all(|line| line.len() <= 20));
        assert!(wrapped.lines().count() > 1);
    }

    #[test]
    fn short_lines_pass_through() {
        assert_eq!(wrap_to("hello", 20), "hello");
    }
}
