//! Chords and chord construction.
//!
//! A [`Chord`] is a root plus a catalog quality. Its tones are derived, never
//! stored. Two chords are equal when root and quality match; the spelling
//! preference used for display is ignored.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::catalog::{self, ChordQuality};
use crate::error::TheoryError;
use crate::pitch::{parse_spelled, PitchClass, PitchSet, Spelling};

#[derive(Debug, Clone, Copy)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: &'static ChordQuality,
    pub spelling: Spelling,
}

impl Chord {
    pub fn new(root: PitchClass, quality: &'static ChordQuality) -> Self {
        Chord {
            root,
            quality,
            spelling: Spelling::Sharp,
        }
    }

    pub fn with_spelling(self, spelling: Spelling) -> Self {
        Chord { spelling, ..self }
    }

    /// Chord tones in interval order, root first.
    pub fn tones(&self) -> Vec<PitchClass> {
        self.quality
            .intervals
            .iter()
            .map(|&o| self.root.transpose(o as i32))
            .collect()
    }

    pub fn tone_set(&self) -> PitchSet {
        self.tones().into_iter().collect()
    }

    /// Tone names in interval order, spelled with the chord's preference.
    pub fn note_names(&self) -> Vec<&'static str> {
        self.tones()
            .into_iter()
            .map(|pc| pc.name(self.spelling))
            .collect()
    }

    /// Chord symbol, e.g. `"Em"`, `"Bb7"`, `"F#m7b5"`.
    pub fn name(&self) -> String {
        format!("{}{}", self.root.name(self.spelling), self.quality.symbol)
    }
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root && self.quality.id == other.quality.id
    }
}

impl Eq for Chord {}

impl Hash for Chord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
        self.quality.id.hash(state);
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for Chord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Chord", 4)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("root", self.root.name(self.spelling))?;
        state.serialize_field("quality", self.quality.id)?;
        state.serialize_field("notes", &self.note_names())?;
        state.end()
    }
}

/// Build the chord on `root` with the named quality.
pub fn build(root: PitchClass, quality: &str) -> Result<Chord, TheoryError> {
    Ok(Chord::new(root, catalog::lookup(quality)?))
}

/// Parse a chord symbol such as `"C"`, `"Am"`, `"F#m7"`, `"Bbmaj7"`.
///
/// The leading note name is the root; whatever follows is resolved as a
/// quality symbol or alias.
pub fn parse_chord_symbol(symbol: &str) -> Result<Chord, TheoryError> {
    let trimmed = symbol.trim();
    let root_len = root_prefix_len(trimmed)
        .ok_or_else(|| TheoryError::InvalidNoteName(symbol.to_string()))?;
    let (root_name, suffix) = trimmed.split_at(root_len);

    let (root, spelling) = parse_spelled(root_name)?;
    let quality = catalog::lookup(suffix)?;
    Ok(Chord::new(root, quality).with_spelling(spelling))
}

/// Length of the note-name prefix of a chord symbol.
fn root_prefix_len(symbol: &str) -> Option<usize> {
    let mut chars = symbol.chars();
    let letter = chars.next().filter(|c| matches!(c.to_ascii_uppercase(), 'A'..='G'))?;
    let mut len = letter.len_utf8();
    if let Some(acc) = chars.next() {
        // 'b' after the root is always a flat: no quality symbol starts with it.
        if matches!(acc, '#' | '♯' | 'b' | '♭') {
            len += acc.len_utf8();
        }
    }
    Some(len)
}
