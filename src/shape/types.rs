//! Chord shape type definitions
//!
//! This module defines the fingering types produced by the shape search and
//! the constraints that steer it.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

use crate::chord::Chord;
use crate::fretboard::Fretboard;
use crate::pitch::{Note, PitchSet};

/// What one string does in a shape.
///
/// Ordered so that any fret sorts before a mute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StringFret {
    Fret(u8),
    Muted,
}

impl StringFret {
    pub fn fret(self) -> Option<u8> {
        match self {
            StringFret::Fret(fret) => Some(fret),
            StringFret::Muted => None,
        }
    }

    /// Pressed behind a fret, i.e. neither open nor muted.
    pub fn fretted(self) -> Option<u8> {
        self.fret().filter(|&fret| fret > 0)
    }
}

/// Serialized as the fret number, or `"x"` when muted.
impl Serialize for StringFret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StringFret::Fret(fret) => serializer.serialize_u8(*fret),
            StringFret::Muted => serializer.serialize_str("x"),
        }
    }
}

/// Limits on which fingerings count as playable.
///
/// # Fields
/// - `max_span`: Largest distance in frets between the lowest and highest fretted string.
///   Open strings are not fretted and never widen the span.
/// - `allow_muted`: Whether strings may be left silent.
/// - `require_root`: Whether the root must sound on at least one string.
/// - `require_all_tones`: Whether every chord tone must sound.
/// - `max_fingers`: Upper bound on fingers needed, `None` for no bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeConstraints {
    pub max_span: u8,
    pub allow_muted: bool,
    pub require_root: bool,
    pub require_all_tones: bool,
    pub max_fingers: Option<u8>,
}

impl Default for ShapeConstraints {
    fn default() -> Self {
        Self {
            max_span: 4,
            allow_muted: true,
            require_root: true,
            require_all_tones: false,
            max_fingers: None,
        }
    }
}

/// One finger laid across adjacent strings at the same fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub fret: u8,
    pub from_string: usize,
    pub to_string: usize,
}

impl Barre {
    /// A barre at the lowest fretted fret, if two or more strings share it and
    /// every string underneath sounds at or above it.
    pub fn detect(frets: &[StringFret]) -> Option<Barre> {
        let fret = frets.iter().filter_map(|f| f.fretted()).min()?;
        let from_string = frets.iter().position(|f| f.fret() == Some(fret))?;
        let to_string = frets.iter().rposition(|f| f.fret() == Some(fret))?;
        if from_string == to_string {
            return None;
        }

        let covered = frets[from_string..=to_string]
            .iter()
            .all(|f| f.fret().is_some_and(|x| x >= fret));
        covered.then_some(Barre {
            fret,
            from_string,
            to_string,
        })
    }

    pub fn strings(&self) -> usize {
        self.to_string - self.from_string + 1
    }
}

/// A playable fingering of a chord.
///
/// # Fields
/// - `frets`: Per string, low to high, the fret played or `Muted`
/// - `notes`: The note each string sounds (`None` when muted)
/// - `lowest_fret` / `highest_fret`: Fretted range, `None` when every sounding string is open
/// - `span`: `highest_fret - lowest_fret`, 0 without fretted strings
/// - `muted`: Indices of muted strings
/// - `barre`: Barre at the lowest fret, when one finger can hold it
/// - `fingers`: Fingers needed, counting a barre as one
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordShape {
    pub chord: Chord,
    pub frets: Vec<StringFret>,
    pub notes: Vec<Option<Note>>,
    pub lowest_fret: Option<u8>,
    pub highest_fret: Option<u8>,
    pub span: u8,
    pub muted: Vec<usize>,
    pub barre: Option<Barre>,
    pub fingers: u8,
}

impl ChordShape {
    /// Derive all shape metadata from a fret assignment.
    pub fn new(fretboard: &Fretboard, chord: Chord, frets: Vec<StringFret>) -> Self {
        let notes = frets
            .iter()
            .enumerate()
            .map(|(string, f)| f.fret().and_then(|fret| fretboard.note(string, fret)))
            .collect();

        let (lowest_fret, highest_fret) = fretted_range(&frets);
        let span = match (lowest_fret, highest_fret) {
            (Some(low), Some(high)) => high - low,
            _ => 0,
        };
        let muted = frets
            .iter()
            .enumerate()
            .filter(|(_, f)| **f == StringFret::Muted)
            .map(|(string, _)| string)
            .collect();
        let barre = Barre::detect(&frets);
        let fingers = fingers_needed(&frets, barre.as_ref());

        ChordShape {
            chord,
            frets,
            notes,
            lowest_fret,
            highest_fret,
            span,
            muted,
            barre,
            fingers,
        }
    }

    pub fn sounded_strings(&self) -> usize {
        self.notes.iter().flatten().count()
    }

    pub fn pitch_set(&self) -> PitchSet {
        self.notes.iter().flatten().map(|note| note.pitch).collect()
    }

    /// Frets as a tab string, low string first, e.g. `"022000"` or `"x32010"`.
    /// Frets above 9 are wrapped in parentheses.
    pub fn tab(&self) -> String {
        self.frets
            .iter()
            .map(|f| match f {
                StringFret::Muted => "x".to_string(),
                StringFret::Fret(fret) if *fret > 9 => format!("({})", fret),
                StringFret::Fret(fret) => fret.to_string(),
            })
            .collect()
    }
}

/// Lowest and highest fretted fret; open and muted strings are ignored.
pub(crate) fn fretted_range(frets: &[StringFret]) -> (Option<u8>, Option<u8>) {
    let fretted = frets.iter().filter_map(|f| f.fretted());
    (fretted.clone().min(), fretted.max())
}

pub(crate) fn fingers_needed(frets: &[StringFret], barre: Option<&Barre>) -> u8 {
    let fretted = frets.iter().filter(|f| f.fretted().is_some()).count();
    let saved = match barre {
        Some(barre) => frets[barre.from_string..=barre.to_string]
            .iter()
            .filter(|f| f.fret() == Some(barre.fret))
            .count()
            .saturating_sub(1),
        None => 0,
    };
    (fretted - saved) as u8
}

/// Distinct fretted frets other than the lowest one.
pub(crate) fn extra_fret_positions(frets: &[StringFret]) -> usize {
    let distinct: BTreeSet<u8> = frets.iter().filter_map(|f| f.fretted()).collect();
    distinct.len().saturating_sub(1)
}
