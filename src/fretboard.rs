//! Fretboard layout.
//!
//! Every note on every string from the open position up to a fret bound.
//! Built once from a tuning and never modified.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::pitch::{Note, PitchSet, Spelling};
use crate::tuning::Tuning;

/// Enough for the fretted range most chord shapes use.
pub const DEFAULT_MAX_FRET: u8 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Fretboard {
    max_fret: u8,
    /// `grid[string][fret]`
    grid: Vec<Vec<Note>>,
}

impl Fretboard {
    /// Lay out `tuning` from fret 0 to `max_fret` inclusive.
    pub fn build(tuning: &Tuning, max_fret: u8) -> Self {
        let grid = tuning
            .strings
            .iter()
            .map(|open| (0..=max_fret).map(|fret| open.transpose(fret as i32)).collect())
            .collect();

        Fretboard { max_fret, grid }
    }

    /// Display preference for note names; positions are unaffected.
    pub fn with_spelling(mut self, spelling: Spelling) -> Self {
        for note in self.grid.iter_mut().flatten() {
            *note = note.with_spelling(spelling);
        }
        self
    }

    pub fn max_fret(&self) -> u8 {
        self.max_fret
    }

    pub fn string_count(&self) -> usize {
        self.grid.len()
    }

    pub fn note(&self, string: usize, fret: u8) -> Option<Note> {
        self.grid.get(string)?.get(fret as usize).copied()
    }

    /// Notes of one string, open first.
    pub fn string(&self, string: usize) -> Option<&[Note]> {
        self.grid.get(string).map(Vec::as_slice)
    }

    /// Frets on `string` whose pitch class is in `tones`, ascending.
    pub fn frets_in(&self, string: usize, tones: &PitchSet) -> Vec<u8> {
        self.string(string)
            .unwrap_or_default()
            .iter()
            .zip(0..=self.max_fret)
            .filter(|(note, _)| tones.contains(note.pitch))
            .map(|(_, fret)| fret)
            .collect()
    }
}

impl Serialize for Fretboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.grid.len()))?;
        for (index, notes) in self.grid.iter().enumerate() {
            let names: Vec<&str> = notes.iter().map(Note::name).collect();
            map.serialize_entry(&index, &names)?;
        }
        map.end()
    }
}
