//! Grammar-agnostic lexical pre-scanner ("atomizer").
//!
//! Converts a materialized sequence of Unicode code points into a linear
//! stream of typed, positioned [`Atom`]s using longest-match-but-least-context
//! rules: runs of one primitive class (letters, digits, quoted text) merge
//! into a single atom, and every other character is emitted standalone.
//! Combining adjacent atoms into language-level tokens (a `Bang` atom
//! followed by an adjacent `Equal` atom into "not equal", say) is the job
//! of a downstream, language-specific filter, which may rely on atom
//! offsets being strictly increasing and non-overlapping.
//!
//! The crate is standalone and dependency-free so token filters,
//! highlighters, and editor tooling can embed it without pulling in
//! anything else.
//!
//! # Example
//!
//! ```
//! use atomizer_core::{atomize, AtomKind};
//!
//! let atoms = atomize("abc123");
//! assert_eq!(atoms.len(), 2);
//! assert_eq!(atoms[0].kind, AtomKind::Word);
//! assert_eq!(atoms[1].kind, AtomKind::Number);
//! ```

pub mod atom;
pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod source;

pub use atom::{Atom, AtomKind};
pub use classify::{default_continues_word, default_starts_word, CharPredicate, WordRules};
pub use cursor::{Cursor, Position};
pub use scanner::{atomize, Scanner, ScannerOptions};
pub use source::Source;
