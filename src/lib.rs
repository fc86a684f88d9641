//! # chordfret
//!
//! Chord recognition, chord construction, fretboard layout and fingering
//! synthesis for fretted instruments under any tuning.
//!
//! ## Modules
//! - `pitch` - Pitch classes, note names, pitch sets
//! - `catalog` - Chord qualities and their interval sets
//! - `chord` - Chords, chord building, chord-symbol parsing
//! - `recognise` - Naming the chord formed by a set of notes
//! - `tuning` - Named tunings and the tuning registry
//! - `fretboard` - Note layout per string and fret
//! - `shape` - Playable fingering search
//! - `config` - YAML configuration
//! - `api` - The front-end function surface
//!
//! All registries are immutable statics and every operation is a pure
//! function of its arguments, so calls may run concurrently without locking.

pub mod api;
pub mod catalog;
pub mod chord;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod pitch;
pub mod recognise;
pub mod shape;
pub mod tuning;

pub use api::{build_chord, build_fretboard, make_guitar_chord, recognise_chord, select_tuning};
pub use catalog::{qualities, ChordQuality};
pub use chord::{parse_chord_symbol, Chord};
pub use config::Config;
pub use error::TheoryError;
pub use fretboard::{Fretboard, DEFAULT_MAX_FRET};
pub use pitch::{format_note, parse_note, transpose, Note, PitchClass, PitchSet, Spelling};
pub use shape::{synthesize_ranked, Barre, ChordShape, ShapeConstraints, StringFret};
pub use tuning::{tuning_names, Tuning, TuningRegistry};
