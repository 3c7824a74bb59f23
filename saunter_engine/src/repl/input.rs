//! Terminal input handling for the Saunter REPL.
//!
//! Wraps rustyline configuration, history persistence, and tab completion
//! seeded from the parser's vocabulary. Falls back to a plain stdin reader
//! when no interactive terminal is available.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::Helper;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use saunter_data::Vocabulary;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Words too short or too grammatical to be worth completing.
const EXCLUDED_TERMS: &[&str] = &[
    "", "a", "an", "b", "d", "e", "f", "l", "n", "r", "s", "u", "w", "ne", "nw", "se", "sw", "the",
];

type ReplEditor = rustyline::Editor<SaunterHelper, DefaultHistory>;

/// Completion helper backed by the vocabulary's surface words.
#[derive(Default)]
struct SaunterHelper {
    terms: Vec<String>,
}

impl Helper for SaunterHelper {}

impl Completer for SaunterHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_word_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let mut pairs = Vec::new();
        for term in &self.terms {
            if term.starts_with(&lower) {
                pairs.push(Pair {
                    display: term.clone(),
                    replacement: term.clone(),
                });
            }
        }
        Ok((start, pairs))
    }
}

impl Hinter for SaunterHelper {
    type Hint = String;
}

impl Highlighter for SaunterHelper {}

impl Validator for SaunterHelper {}

/// Start and content of the word under the cursor.
fn current_word_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let start = slice.rfind(char::is_whitespace).map_or(0, |i| i + 1);
    (start, slice[start..].to_string())
}

/// Collect completion terms from a vocabulary: verbs, nouns, and the "quit"
/// meta-command, minus abbreviations and articles.
fn build_completion_terms(vocabulary: &Vocabulary) -> Vec<String> {
    let mut terms: Vec<String> = vocabulary
        .verbs
        .words()
        .chain(vocabulary.nouns.words())
        .filter(|word| !EXCLUDED_TERMS.contains(word))
        .map(str::to_string)
        .collect();
    terms.push("quit".to_string());
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Helper responsible for managing the interactive input backend.
///
/// Prefers `rustyline` when an interactive terminal is available, falling
/// back to a basic stdin reader otherwise.
pub struct InputManager {
    backend: Backend,
}

impl InputManager {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new(build_completion_terms(vocabulary)) {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend
    /// reports an unrecoverable error, switch to plain stdin and retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(RustylineInput),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new(terms: Vec<String>) -> io::Result<Self> {
        let mut editor = rustyline::Editor::<SaunterHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(SaunterHelper { terms }));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent() {
                if let Err(err) = fs::create_dir_all(dir) {
                    warn!("failed to create history directory {}: {}", dir.display(), err);
                }
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {}", path.display(), other);
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref() {
                        if let Err(err) = self.editor.save_history(path) {
                            warn!("failed to persist history to {}: {}", path.display(), err);
                        }
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("saunter_engine");
    path.push("history.txt");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert!(matches!(result, InputEvent::Interrupted));
    }

    #[test]
    fn converts_readline_eof() {
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert!(matches!(result, InputEvent::Eof));
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/saunter-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("saunter_engine/history.txt")));
    }

    #[test]
    fn completion_terms_include_vocabulary_words() {
        let terms = build_completion_terms(&Vocabulary::seeded());
        assert!(terms.iter().any(|term| term == "take"));
        assert!(terms.iter().any(|term| term == "north"));
        assert!(terms.iter().any(|term| term == "quit"));
    }

    #[test]
    fn completion_terms_exclude_abbreviations() {
        let terms = build_completion_terms(&Vocabulary::seeded());
        assert!(!terms.iter().any(|term| term == "n"));
        assert!(!terms.iter().any(|term| term == "sw"));
    }

    #[test]
    fn word_prefix_tracks_last_word() {
        let (start, prefix) = current_word_prefix("take ke", 7);
        assert_eq!(start, 5);
        assert_eq!(prefix, "ke");
    }
}
