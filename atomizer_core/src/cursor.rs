//! Code-point cursor with line/column bookkeeping.
//!
//! The cursor advances through a borrowed code-point slice one position at
//! a time and maintains the 1-based line/column of the position it sits on.
//! EOF is detected by comparing the position against the input length;
//! reading at or past the end yields `'\0'` so lookahead never needs a
//! bounds check at the call site.
//!
//! Line accounting is owned by the scanner, not the cursor: only the
//! scanner knows whether a consumed character terminates a line (a raw LF
//! inside a quoted body does not), so it chooses between [`advance`] and
//! [`advance_newline`] per character.
//!
//! [`advance`]: Cursor::advance
//! [`advance_newline`]: Cursor::advance_newline

/// Snapshot of the cursor taken at the start of an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Code-point index.
    pub offset: u32,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub col: u32,
}

/// Cursor over a borrowed code-point slice.
///
/// Created via [`Source::cursor()`](crate::Source::cursor). The cursor is
/// [`Copy`], enabling cheap snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    input: &'a [char],
    pos: u32,
    line: u32,
    col: u32,
}

// Size assertion: fat pointer (16) + 3xu32 (12) => 28 bytes on 64-bit.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a new cursor at offset 0, line 1, column 1.
    pub(crate) fn new(input: &'a [char]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// The code point at the current position, or `'\0'` at EOF.
    ///
    /// An interior NUL in the input also reads as `'\0'`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> char {
        self.input.get(self.pos as usize).copied().unwrap_or('\0')
    }

    /// The code point one position ahead, or `'\0'` past the end.
    #[inline]
    pub fn peek(&self) -> char {
        self.input
            .get(self.pos as usize + 1)
            .copied()
            .unwrap_or('\0')
    }

    /// Advance one position within the current line.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
        self.col += 1;
    }

    /// Advance one position across a line terminator: line increments,
    /// column resets to 1.
    #[inline]
    pub fn advance_newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.col = 1;
    }

    /// Returns `true` once every input code point has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.input.len()
    }

    /// Current code-point offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column.
    #[inline]
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Snapshot of offset/line/col, taken at the start of each atom.
    #[inline]
    pub fn position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            col: self.col,
        }
    }

    /// Input length in code points (saturated to `u32::MAX`).
    pub fn source_len(&self) -> u32 {
        u32::try_from(self.input.len()).unwrap_or(u32::MAX)
    }

    /// Advance while `pred` holds for the current code point.
    ///
    /// Stops at EOF regardless of the predicate, so `pred('\0')` may be
    /// anything. Never crosses a line boundary in the accounting sense:
    /// every consumed position counts as one column.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs, mixed).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|ch| ch == ' ' || ch == '\t');
    }

    /// Advance until `delim` is the current code point or EOF is reached.
    ///
    /// The delimiter itself is not consumed.
    pub fn eat_until(&mut self, delim: char) {
        self.eat_while(|ch| ch != delim);
    }
}
