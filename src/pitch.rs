//! # Pitch Model
//!
//! Notes as pitch classes modulo twelve, with name parsing and formatting.
//!
//! ## Key Types
//! - [`PitchClass`] - 0..=11, C = 0 through B = 11. All arithmetic wraps mod 12.
//! - [`Spelling`] - Display preference for black keys (C# vs Db). Never affects identity.
//! - [`Note`] - A pitch class plus an optional octave (scientific pitch notation, C4 = middle C).
//! - [`PitchSet`] - An order-independent set of pitch classes, stored as a 12-bit mask.
//!
//! ## Note Names
//! A letter `A`-`G` (either case), then at most one accidental (`#`, `♯`, `b`, `♭`).
//! [`Note::parse`] also accepts a trailing octave number (`E2`, `Bb3`, `C-1`).
//!
//! ```rust
//! use chordfret::pitch::{format_note, parse_note, PitchClass};
//!
//! let c_sharp = parse_note("C#")?;
//! assert_eq!(c_sharp, parse_note("Db")?);
//! assert_eq!(format_note(c_sharp, true), "C#");
//! assert_eq!(format_note(c_sharp, false), "Db");
//! assert_eq!(c_sharp.transpose(-2), PitchClass::new(11));
//! # Ok::<(), chordfret::TheoryError>(())
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::TheoryError;

pub const SEMITONES: u8 = 12;

/// Written octaves accepted by [`Note::parse`].
pub const OCTAVE_RANGE: std::ops::RangeInclusive<i8> = -1..=9;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A note identity modulo one octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wraps any value into 0..=11.
    pub const fn new(value: u8) -> Self {
        PitchClass(value % SEMITONES)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// `(self + semitones) mod 12`, always non-negative.
    pub fn transpose(self, semitones: i32) -> Self {
        let step = semitones.rem_euclid(SEMITONES as i32) as u8;
        PitchClass::new(self.0 + step)
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => SHARP_NAMES[self.0 as usize],
            Spelling::Flat => FLAT_NAMES[self.0 as usize],
        }
    }

    /// Iterate all twelve pitch classes from C upward.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..SEMITONES).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Spelling::Sharp))
    }
}

/// Preferred accidental when naming black keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    pub fn from_prefer_sharp(prefer_sharp: bool) -> Self {
        if prefer_sharp {
            Spelling::Sharp
        } else {
            Spelling::Flat
        }
    }
}

/// A pitch class with an optional octave.
///
/// The octave only matters for fretboard positions; chord identity ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub pitch: PitchClass,
    pub octave: Option<i8>,
    pub spelling: Spelling,
}

impl Note {
    pub const fn new(pitch: PitchClass, octave: Option<i8>) -> Self {
        Note {
            pitch,
            octave,
            spelling: Spelling::Sharp,
        }
    }

    /// Parse a note name with an optional trailing octave, e.g. `"E"`, `"F#3"`, `"Bb-1"`.
    ///
    /// The written octave must lie in [`OCTAVE_RANGE`]. `Cb` and `B#` cross
    /// the octave boundary, so `Cb4` is B3 and `B#3` is C4.
    pub fn parse(name: &str) -> Result<Self, TheoryError> {
        let invalid = || TheoryError::InvalidNoteName(name.to_string());
        let (semitone, spelling, rest) = split_pitch(name.trim()).ok_or_else(invalid)?;

        let octave = if rest.is_empty() {
            None
        } else {
            let written = rest.parse::<i8>().map_err(|_| invalid())?;
            if !OCTAVE_RANGE.contains(&written) {
                return Err(invalid());
            }
            Some(written + semitone.div_euclid(SEMITONES as i32) as i8)
        };

        Ok(Note {
            pitch: PitchClass::new(0).transpose(semitone),
            octave,
            spelling,
        })
    }

    /// The note `semitones` higher (or lower), carrying the octave across C.
    /// The octave saturates at the bounds of `i8`.
    pub fn transpose(self, semitones: i32) -> Self {
        let octave = self.octave.map(|oct| {
            let absolute =
                oct as i64 * SEMITONES as i64 + self.pitch.value() as i64 + semitones as i64;
            absolute
                .div_euclid(SEMITONES as i64)
                .clamp(i8::MIN as i64, i8::MAX as i64) as i8
        });
        Note {
            pitch: self.pitch.transpose(semitones),
            octave,
            spelling: self.spelling,
        }
    }

    pub fn with_spelling(self, spelling: Spelling) -> Self {
        Note { spelling, ..self }
    }

    /// Pitch-class name without the octave.
    pub fn name(&self) -> &'static str {
        self.pitch.name(self.spelling)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.octave {
            Some(octave) => write!(f, "{}{}", self.name(), octave),
            None => f.write_str(self.name()),
        }
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Splits a leading letter and accidental off `s`, returning semitones above
/// the letter's C (-1 for `Cb`, 12 for `B#`) and the remainder.
fn split_pitch(s: &str) -> Option<(i32, Spelling, &str)> {
    let mut chars = s.char_indices();
    let (_, letter) = chars.next()?;

    let base: i32 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut rest = &s[letter.len_utf8()..];
    let mut spelling = Spelling::Sharp;
    let mut offset = 0;
    if let Some(acc) = rest.chars().next() {
        match acc {
            '#' | '♯' => offset = 1,
            'b' | '♭' => {
                offset = -1;
                spelling = Spelling::Flat;
            }
            _ => {}
        }
        if offset != 0 {
            rest = &rest[acc.len_utf8()..];
        }
    }

    Some((base + offset, spelling, rest))
}

/// Parse a bare note name (no octave) to its pitch class.
pub fn parse_note(name: &str) -> Result<PitchClass, TheoryError> {
    parse_spelled(name).map(|(pitch, _)| pitch)
}

/// Like [`parse_note`], also reporting whether the name was spelled with a flat.
pub fn parse_spelled(name: &str) -> Result<(PitchClass, Spelling), TheoryError> {
    match split_pitch(name.trim()) {
        Some((semitone, spelling, "")) => Ok((PitchClass::new(0).transpose(semitone), spelling)),
        _ => Err(TheoryError::InvalidNoteName(name.to_string())),
    }
}

pub fn format_note(pc: PitchClass, prefer_sharp: bool) -> &'static str {
    pc.name(Spelling::from_prefer_sharp(prefer_sharp))
}

pub fn transpose(pc: PitchClass, semitones: i32) -> PitchClass {
    pc.transpose(semitones)
}

/// Set of pitch classes, bit `n` set when pitch class `n` is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchSet(u16);

impl PitchSet {
    pub const fn empty() -> Self {
        PitchSet(0)
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.0 |= 1 << pc.value();
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.0 & (1 << pc.value()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(&self, other: &PitchSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn intersection(&self, other: &PitchSet) -> PitchSet {
        PitchSet(self.0 & other.0)
    }

    /// Members in ascending pitch-class order.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        PitchClass::all().filter(move |pc| self.contains(*pc))
    }
}

impl FromIterator<PitchClass> for PitchSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchSet::empty();
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}
