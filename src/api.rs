//! # Public API
//!
//! The function-call surface used by front ends (the `chordfret` binary, or a
//! web layer that forwards query parameters and returns JSON).
//!
//! ## Functions
//!
//! - [`select_tuning()`] - Look up a named tuning
//! - [`build_fretboard()`] - Lay out a tuning's notes up to a fret bound
//! - [`recognise_chord()`] - Name the chord formed by a set of notes
//! - [`build_chord()`] - Build a chord from a root and a quality
//! - [`make_guitar_chord()`] - Find the best fingering of a chord on a fretboard
//!
//! Every returned value implements `serde::Serialize`.
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordfret::{build_chord, build_fretboard, make_guitar_chord, select_tuning};
//!
//! let tuning = select_tuning("Standard")?;
//! let fretboard = build_fretboard(&tuning, None);
//! let chord = build_chord("E", "minor")?;
//!
//! let shape = make_guitar_chord(&fretboard, &chord, None)?;
//! assert_eq!(shape.tab(), "022000");
//! # Ok::<(), chordfret::TheoryError>(())
//! ```

use crate::chord::{self, Chord};
use crate::error::TheoryError;
use crate::fretboard::{Fretboard, DEFAULT_MAX_FRET};
use crate::pitch::parse_spelled;
use crate::recognise;
use crate::shape::{self, ChordShape, ShapeConstraints};
use crate::tuning::{self, Tuning};

/// Look up a built-in tuning by name, ignoring case.
///
/// # Example
/// ```rust
/// use chordfret::select_tuning;
///
/// let tuning = select_tuning("drop d")?;
/// assert_eq!(tuning.strings[0].to_string(), "D2");
/// # Ok::<(), chordfret::TheoryError>(())
/// ```
///
/// # Errors
/// [`TheoryError::UnknownTuning`] when no tuning has that name.
pub fn select_tuning(tuning_name: &str) -> Result<Tuning, TheoryError> {
    tuning::select_tuning(tuning_name)
}

/// Lay out every string from the open position to `max_fret`
/// (default [`DEFAULT_MAX_FRET`]).
pub fn build_fretboard(tuning: &Tuning, max_fret: Option<u8>) -> Fretboard {
    Fretboard::build(tuning, max_fret.unwrap_or(DEFAULT_MAX_FRET))
}

/// Name the chord formed by `note_names`.
///
/// Order and duplicates do not matter. Notes spelled with flats produce a
/// chord spelled with flats.
///
/// # Example
/// ```rust
/// use chordfret::recognise_chord;
///
/// assert_eq!(recognise_chord(&["B", "E", "G"])?.name(), "Em");
/// assert_eq!(recognise_chord(&["Bb", "D", "F", "Ab"])?.name(), "Bb7");
/// # Ok::<(), chordfret::TheoryError>(())
/// ```
///
/// # Errors
/// - [`TheoryError::EmptyInput`] for an empty slice
/// - [`TheoryError::InvalidNoteName`] for a malformed note
/// - [`TheoryError::NoMatch`] when no catalog chord contains the notes
pub fn recognise_chord<S: AsRef<str>>(note_names: &[S]) -> Result<Chord, TheoryError> {
    recognise::recognise(note_names)
}

/// Build a chord from a root name and a quality identifier or symbol.
///
/// # Example
/// ```rust
/// use chordfret::build_chord;
///
/// let chord = build_chord("Db", "dominant7")?;
/// assert_eq!(chord.name(), "Db7");
/// assert_eq!(chord.note_names(), vec!["Db", "F", "Ab", "B"]);
/// # Ok::<(), chordfret::TheoryError>(())
/// ```
///
/// # Errors
/// [`TheoryError::InvalidNoteName`] or [`TheoryError::UnknownQuality`].
pub fn build_chord(root: &str, quality: &str) -> Result<Chord, TheoryError> {
    let (root, spelling) = parse_spelled(root)?;
    Ok(chord::build(root, quality)?.with_spelling(spelling))
}

/// Best fingering of `chord` on `fretboard`, with default constraints when
/// none are given.
///
/// # Errors
/// [`TheoryError::Unplayable`] when no assignment satisfies the constraints.
pub fn make_guitar_chord(
    fretboard: &Fretboard,
    chord: &Chord,
    constraints: Option<&ShapeConstraints>,
) -> Result<ChordShape, TheoryError> {
    let defaults = ShapeConstraints::default();
    shape::synthesize(fretboard, chord, constraints.unwrap_or(&defaults))
}
