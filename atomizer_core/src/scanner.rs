//! The scanning state machine.
//!
//! One call to [`Scanner::next_atom`] drives an explicit tagged state
//! through a bounded loop until exactly one atom is complete, then returns
//! with the state reset to `Scanning`. The only state that survives across
//! calls is the quoted-text pair (`active_delimiter`, `at_string_end`),
//! which makes a quoted string span three atoms over three calls: opening
//! quote, body, closing quote.
//!
//! # Dispatch priority
//!
//! With no quote open, the current character is classified in this order:
//! quote mark, word-start rule, space/tab, carriage return, line feed,
//! `'0'` (possible base prefix), nonzero digit, then the fixed punctuation
//! map with `Unknown` as the fallback. The word-start rule outranks the
//! built-in classes so caller-supplied rules can claim characters the
//! defaults treat as whitespace or digits.

use crate::atom::{Atom, AtomKind};
use crate::classify::WordRules;
use crate::cursor::{Cursor, Position};
use crate::source::Source;

/// Scan-loop options packed into a single byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ScannerOptions(u8);

impl ScannerOptions {
    /// Emit `Space`/`Tab` atoms instead of silently skipping whitespace runs.
    pub const EMIT_WHITESPACE: u8 = 1 << 0;
    /// Collapse CR and CR+LF into a single `Newline` atom kind.
    pub const NORMALIZE_NEWLINES: u8 = 1 << 1;

    /// No flags set.
    pub const EMPTY: Self = ScannerOptions(0);

    /// Create options from raw bits.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        ScannerOptions(bits)
    }

    /// Get the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if a specific flag is set.
    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set a flag in place.
    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Copy of these options with `flag` set.
    #[inline]
    pub const fn with(self, flag: u8) -> Self {
        ScannerOptions(self.0 | flag)
    }

    /// Copy of these options with `flag` cleared.
    #[inline]
    pub const fn without(self, flag: u8) -> Self {
        ScannerOptions(self.0 & !flag)
    }

    /// Check if whitespace runs are emitted as atoms.
    #[inline]
    pub const fn emits_whitespace(self) -> bool {
        self.contains(Self::EMIT_WHITESPACE)
    }

    /// Check if CR and CR+LF collapse into `Newline`.
    #[inline]
    pub const fn normalizes_newlines(self) -> bool {
        self.contains(Self::NORMALIZE_NEWLINES)
    }
}

/// Defaults: newlines normalized, whitespace skipped.
impl Default for ScannerOptions {
    fn default() -> Self {
        ScannerOptions(Self::NORMALIZE_NEWLINES)
    }
}

// Compile-time assertion: ScannerOptions is exactly 1 byte.
const _: () = assert!(std::mem::size_of::<ScannerOptions>() == 1);

/// Internal machine state. Reset to `Scanning` at the start of every call;
/// every other variant completes an atom within the same call.
#[derive(Clone, Copy, Debug)]
enum State {
    Scanning,
    WordChunk,
    IntegerPrefix,
    NumberChunk,
    StringStart,
    StringBody(char),
    StringEnd(char),
    Whitespace,
    Newline,
    CarriageReturn,
    Punctuation,
}

/// Pull-based atomizer over a borrowed code-point sequence.
///
/// Single-owner, single-threaded: every call mutates the cursor and the
/// transient string-scanning fields in place. Concurrent scans use
/// independent instances.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    options: ScannerOptions,
    rules: WordRules,
    /// Quote character of the currently open string, if any.
    active_delimiter: Option<char>,
    /// Set after a body atom; the next call consumes the closing quote.
    at_string_end: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default word rules.
    pub fn new(source: &'a Source, options: ScannerOptions) -> Self {
        Self::with_rules(source, options, WordRules::default())
    }

    /// Create a scanner with caller-supplied word rules.
    pub fn with_rules(source: &'a Source, options: ScannerOptions, rules: WordRules) -> Self {
        Self {
            cursor: source.cursor(),
            options,
            rules,
            active_delimiter: None,
            at_string_end: false,
        }
    }

    /// The options this scanner was built with.
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Produce the next atom.
    ///
    /// Never fails: unmapped characters come back as `Unknown` and end of
    /// input as a zero-length `Eof` atom. Calls after EOF keep returning
    /// identical `Eof` atoms.
    pub fn next_atom(&mut self) -> Atom {
        let mut state = State::Scanning;
        loop {
            // EOF outranks everything, including an open quote: a string
            // left unterminated right at a quote mark yields no body atom.
            if self.cursor.is_eof() {
                return Atom::new(AtomKind::Eof, self.cursor.position(), 0);
            }
            state = match state {
                State::Scanning => self.dispatch(),
                State::WordChunk => return self.word_chunk(),
                State::IntegerPrefix => return self.integer_prefix(),
                State::NumberChunk => return self.number_chunk(),
                State::StringStart => return self.string_start(),
                State::StringBody(delim) => return self.string_body(delim),
                State::StringEnd(delim) => return self.string_end(delim),
                State::Whitespace => {
                    if self.options.emits_whitespace() {
                        return self.whitespace_run();
                    }
                    // Swallow the whole mixed run and classify whatever
                    // follows it.
                    self.cursor.eat_whitespace();
                    State::Scanning
                }
                State::Newline => return self.newline(),
                State::CarriageReturn => return self.carriage_return(),
                State::Punctuation => return self.punctuation(),
            };
        }
    }

    /// Classify the current character without consuming it.
    fn dispatch(&self) -> State {
        match self.active_delimiter {
            Some(delim) if self.at_string_end => return State::StringEnd(delim),
            Some(delim) => return State::StringBody(delim),
            None => {}
        }
        let ch = self.cursor.current();
        if AtomKind::quote_kind(ch).is_some() {
            State::StringStart
        } else if (self.rules.starts_word)(ch) {
            State::WordChunk
        } else if ch == ' ' || ch == '\t' {
            State::Whitespace
        } else if ch == '\r' {
            State::CarriageReturn
        } else if ch == '\n' {
            State::Newline
        } else if ch == '0' {
            State::IntegerPrefix
        } else if ch.is_ascii_digit() {
            State::NumberChunk
        } else {
            State::Punctuation
        }
    }

    /// Close out an atom spanning `start` to the current position.
    fn finish(&self, kind: AtomKind, start: Position) -> Atom {
        Atom::new(kind, start, self.cursor.pos() - start.offset)
    }

    // --- Chunk states -----------------------------------------------------

    fn word_chunk(&mut self) -> Atom {
        let start = self.cursor.position();
        self.cursor.advance(); // the word-start character
        self.cursor.eat_while(self.rules.continues_word);
        self.finish(AtomKind::Word, start)
    }

    /// Resolve a leading `'0'`: base prefix or plain decimal run.
    fn integer_prefix(&mut self) -> Atom {
        let start = self.cursor.position();
        self.cursor.advance(); // the '0'
        match self.cursor.current() {
            'b' | 'B' => {
                self.cursor.advance();
                self.finish(AtomKind::BinaryPrefix, start)
            }
            'x' | 'X' => {
                self.cursor.advance();
                self.finish(AtomKind::HexPrefix, start)
            }
            'o' | 'O' => {
                self.cursor.advance();
                self.finish(AtomKind::OctalPrefix, start)
            }
            _ => {
                // Not a prefix: the '0' was the first digit of an ordinary
                // decimal run ("012" is one Number, never a prefix).
                self.cursor.eat_while(|ch| ch.is_ascii_digit());
                self.finish(AtomKind::Number, start)
            }
        }
    }

    fn number_chunk(&mut self) -> Atom {
        let start = self.cursor.position();
        self.cursor.eat_while(|ch| ch.is_ascii_digit());
        self.finish(AtomKind::Number, start)
    }

    // --- String states ----------------------------------------------------

    fn string_start(&mut self) -> Atom {
        let start = self.cursor.position();
        let delim = self.cursor.current();
        self.cursor.advance();
        self.active_delimiter = Some(delim);
        let kind = AtomKind::quote_kind(delim).unwrap_or(AtomKind::Unknown);
        self.finish(kind, start)
    }

    /// Consume the body up to (not including) the closing delimiter.
    ///
    /// There is no escaping: the delimiter ends the body even when preceded
    /// by a backslash. A raw line terminator inside the body counts as one
    /// column, not a new line. At EOF the body is emitted as-is and the
    /// delimiter is cleared, so no closing quote atom follows.
    fn string_body(&mut self, delim: char) -> Atom {
        let start = self.cursor.position();
        self.cursor.eat_until(delim);
        if self.cursor.is_eof() {
            self.active_delimiter = None;
        } else {
            self.at_string_end = true;
        }
        self.finish(AtomKind::String, start)
    }

    fn string_end(&mut self, delim: char) -> Atom {
        let start = self.cursor.position();
        self.cursor.advance(); // the closing delimiter
        self.active_delimiter = None;
        self.at_string_end = false;
        let kind = AtomKind::quote_kind(delim).unwrap_or(AtomKind::Unknown);
        self.finish(kind, start)
    }

    // --- Trivia states ----------------------------------------------------

    /// Maximal run of one whitespace character as a single atom.
    ///
    /// Runs do not mix: `" \t "` is Space, Tab, Space.
    fn whitespace_run(&mut self) -> Atom {
        let start = self.cursor.position();
        let ch = self.cursor.current();
        let kind = if ch == ' ' {
            AtomKind::Space
        } else {
            AtomKind::Tab
        };
        self.cursor.eat_while(|c| c == ch);
        self.finish(kind, start)
    }

    fn newline(&mut self) -> Atom {
        let start = self.cursor.position();
        self.cursor.advance_newline();
        self.finish(AtomKind::Newline, start)
    }

    fn carriage_return(&mut self) -> Atom {
        let start = self.cursor.position();
        if self.options.normalizes_newlines() {
            if self.cursor.peek() == '\n' {
                // CR+LF collapses into one Newline atom of length 2. The
                // LF carries the line accounting.
                self.cursor.advance();
                self.cursor.advance_newline();
            } else {
                self.cursor.advance_newline();
            }
            self.finish(AtomKind::Newline, start)
        } else {
            // Raw CR atom; a following LF is scanned separately, so only
            // the Newline atom advances the line counter.
            self.cursor.advance();
            self.finish(AtomKind::CarriageReturn, start)
        }
    }

    // --- Fallback ---------------------------------------------------------

    /// Exactly one character: its mapped punctuation kind, or `Unknown`.
    fn punctuation(&mut self) -> Atom {
        let start = self.cursor.position();
        let ch = self.cursor.current();
        self.cursor.advance();
        let kind = AtomKind::from_punct(ch).unwrap_or(AtomKind::Unknown);
        self.finish(kind, start)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Atom;

    /// Yields atoms up to, but not including, the final `Eof`.
    fn next(&mut self) -> Option<Atom> {
        let atom = self.next_atom();
        if atom.kind == AtomKind::Eof {
            None
        } else {
            Some(atom)
        }
    }
}

/// Convenience function: scan a string with default options and rules.
///
/// Returns every atom except the final `Eof`. For streaming access or
/// custom options, construct a [`Source`] + [`Scanner`] directly.
pub fn atomize(text: &str) -> Vec<Atom> {
    let source = Source::new(text);
    let mut scanner = Scanner::new(&source, ScannerOptions::default());
    let mut atoms = Vec::new();
    loop {
        let atom = scanner.next_atom();
        if atom.kind == AtomKind::Eof {
            break;
        }
        atoms.push(atom);
    }
    atoms
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
