//! # Chord Shape Module
//!
//! Synthesize playable fingerings ("shapes") for a chord on a fretboard.
//!
//! ## Sub-modules
//! - `types` - ChordShape, StringFret, Barre, ShapeConstraints
//! - `search` - Bounded backtracking search and shape ranking
//!
//! ## Entry Points
//! - [`synthesize()`] - The single best shape
//! - [`synthesize_ranked()`] - The best `n` shapes, best first
//!
//! ## Example
//! ```rust
//! use chordfret::shape::{synthesize, ShapeConstraints};
//! use chordfret::{parse_chord_symbol, select_tuning, Fretboard};
//!
//! let board = Fretboard::build(&select_tuning("Standard")?, 12);
//! let chord = parse_chord_symbol("Em")?;
//! let shape = synthesize(&board, &chord, &ShapeConstraints::default())?;
//!
//! assert_eq!(shape.tab(), "022000");
//! assert_eq!(shape.span, 0);
//! # Ok::<(), chordfret::TheoryError>(())
//! ```
//!
//! ## Span and Open Strings
//! Only fretted strings (fret > 0) count toward span and starting fret. An
//! open string needs no finger, so `022000` has span 0 and starts at fret 2.

mod search;
mod types;

#[cfg(test)]
mod tests;

pub use search::{synthesize, synthesize_ranked};
pub use types::{Barre, ChordShape, ShapeConstraints, StringFret};
