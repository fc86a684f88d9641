//! # Chord Recognition
//!
//! Names the chord formed by an unordered collection of notes.
//!
//! ## Matching Rules
//! The input is reduced to a set of pitch classes S (duplicates and
//! enharmonic spellings collapse). Every root × catalog quality is then
//! built into a tone set T and compared:
//!
//! 1. **Exact**: S == T. Ties go to catalog priority, then lower root.
//! 2. **Subset**: S ⊆ T, for inputs that leave tones out (a triad without
//!    its fifth, a seventh chord without its fifth). Among candidates the
//!    largest overlap wins, then the chord with fewer tones, then catalog
//!    priority, then lower root.
//!
//! If no candidate contains S the result is [`TheoryError::NoMatch`].
//!
//! ## Example
//! ```rust
//! use chordfret::recognise::recognise;
//!
//! let chord = recognise(&["G", "B", "D", "F"])?;
//! assert_eq!(chord.name(), "G7");
//!
//! // No fifth: still C major
//! assert_eq!(recognise(&["E", "C"])?.name(), "C");
//! # Ok::<(), chordfret::TheoryError>(())
//! ```

use log::trace;
use std::cmp::Reverse;

use crate::catalog::qualities;
use crate::chord::Chord;
use crate::error::TheoryError;
use crate::pitch::{parse_spelled, PitchClass, PitchSet, Spelling};

pub fn recognise<S: AsRef<str>>(note_names: &[S]) -> Result<Chord, TheoryError> {
    if note_names.is_empty() {
        return Err(TheoryError::EmptyInput);
    }

    let mut input = PitchSet::empty();
    let mut spelling = Spelling::Sharp;
    for name in note_names {
        let (pitch, spelled) = parse_spelled(name.as_ref())?;
        input.insert(pitch);
        if spelled == Spelling::Flat {
            spelling = Spelling::Flat;
        }
    }

    let chord = recognise_set(input).ok_or(TheoryError::NoMatch)?;
    Ok(chord.with_spelling(spelling))
}

/// Recognise a set of pitch classes directly.
pub fn recognise_set(input: PitchSet) -> Option<Chord> {
    if input.is_empty() {
        return None;
    }

    let candidates = || {
        qualities().iter().flat_map(move |quality| {
            PitchClass::all().map(move |root| Chord::new(root, quality))
        })
    };

    let exact = candidates()
        .filter(|chord| chord.tone_set() == input)
        .min_by_key(|chord| (chord.quality.priority, chord.root));
    if let Some(chord) = exact {
        trace!("exact match {} for {:?}", chord, input);
        return Some(chord);
    }

    let partial = candidates()
        .filter(|chord| input.is_subset(&chord.tone_set()))
        .min_by_key(|chord| {
            let overlap = input.intersection(&chord.tone_set()).len();
            (
                Reverse(overlap),
                chord.quality.size(),
                chord.quality.priority,
                chord.root,
            )
        });
    if let Some(chord) = partial {
        trace!("subset match {} for {:?}", chord, input);
    }
    partial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::build;
    use crate::pitch::parse_note;

    fn pc(name: &str) -> PitchClass {
        parse_note(name).unwrap()
    }

    #[test]
    fn test_recognise_e_minor() {
        let chord = recognise(&["E", "G", "B"]).unwrap();
        assert_eq!(chord, build(pc("E"), "minor").unwrap());
    }

    #[test]
    fn test_duplicates_and_enharmonics_collapse() {
        let chord = recognise(&["C", "E", "G", "C", "B#", "Fb"]).unwrap();
        assert_eq!(chord.name(), "C");
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(recognise(&empty), Err(TheoryError::EmptyInput));
    }

    #[test]
    fn test_invalid_note() {
        assert_eq!(
            recognise(&["Z"]),
            Err(TheoryError::InvalidNoteName("Z".to_string()))
        );
    }

    #[test]
    fn test_incomplete_triad_uses_subset_rule() {
        let chord = recognise(&["C", "E"]).unwrap();
        assert_eq!(chord, build(pc("C"), "major").unwrap());
    }

    #[test]
    fn test_seventh_without_fifth() {
        let chord = recognise(&["G", "B", "F"]).unwrap();
        assert_eq!(chord, build(pc("G"), "dominant7").unwrap());
    }

    #[test]
    fn test_single_note_is_a_power_chord() {
        // C5 and F5 both hold C; the lower root wins.
        let chord = recognise(&["C"]).unwrap();
        assert_eq!(chord, build(pc("C"), "power").unwrap());
    }

    #[test]
    fn test_no_match() {
        // Chromatic cluster: no catalog chord holds three adjacent semitones.
        assert_eq!(recognise(&["C", "C#", "D"]), Err(TheoryError::NoMatch));
    }

    #[test]
    fn test_flat_input_spells_with_flats() {
        let chord = recognise(&["Eb", "G", "Bb"]).unwrap();
        assert_eq!(chord.name(), "Eb");
        assert_eq!(chord.note_names(), vec!["Eb", "G", "Bb"]);

        let sharp = recognise(&["D#", "G", "A#"]).unwrap();
        assert_eq!(sharp.name(), "D#");
        assert_eq!(sharp, chord);
    }

    #[test]
    fn test_round_trip_every_catalog_chord() {
        for quality in qualities() {
            for root in PitchClass::all() {
                let chord = Chord::new(root, quality);
                let mut names = chord.note_names();
                assert_eq!(recognise(&names).unwrap(), chord, "{}", chord);

                names.reverse();
                assert_eq!(recognise(&names).unwrap(), chord, "{} reversed", chord);

                names.rotate_left(1);
                assert_eq!(recognise(&names).unwrap(), chord, "{} rotated", chord);
            }
        }
    }
}
