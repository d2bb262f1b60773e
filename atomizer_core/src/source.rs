//! Materialized code-point buffer.
//!
//! The scanner consumes an already-materialized, randomly indexable
//! sequence of Unicode code points; `Source` is that materialization.
//! Decoding happens exactly once, up front, so every atom offset is a
//! direct index into the buffer and slicing never re-walks UTF-8.

use crate::atom::Atom;
use crate::cursor::Cursor;

/// Owned code-point sequence held for the scanner's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Source {
    points: Vec<char>,
}

impl Source {
    /// Decode a string into its code-point sequence.
    pub fn new(text: &str) -> Self {
        Self {
            points: text.chars().collect(),
        }
    }

    /// Wrap an already-decoded code-point sequence.
    pub fn from_points(points: Vec<char>) -> Self {
        Self { points }
    }

    /// Input length in code points (saturated to `u32::MAX`).
    ///
    /// Inputs longer than `u32::MAX` code points are not meaningfully
    /// scannable; callers loading untrusted gigantic inputs should reject
    /// them upstream.
    pub fn len(&self) -> u32 {
        u32::try_from(self.points.len()).unwrap_or(u32::MAX)
    }

    /// Returns `true` if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The underlying code points.
    pub fn points(&self) -> &[char] {
        &self.points
    }

    /// Create a [`Cursor`] positioned at offset 0, line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.points)
    }

    /// The input text an atom covers.
    ///
    /// # Contract
    ///
    /// `atom` must have been produced by a scanner over this source, so its
    /// code-point range is in bounds.
    pub fn text_of(&self, atom: &Atom) -> String {
        let start = atom.offset as usize;
        let end = start + atom.len as usize;
        debug_assert!(
            end <= self.points.len(),
            "atom range {start}..{end} exceeds source length {}",
            self.points.len()
        );
        self.points[start..end].iter().collect()
    }
}
