//! Fingering search.
//!
//! Each string gets the frets that sound a chord tone, plus a mute when
//! allowed. Strings are assigned low to high with an explicit stack; a branch
//! is dropped as soon as its fretted positions spread wider than `max_span`.
//! Complete assignments that pass the remaining constraints are ranked, and
//! only the best `limit` are held while the search runs:
//!
//! 1. more sounding strings
//! 2. smaller span
//! 3. lower starting fret
//! 4. fewer distinct frets above the lowest one
//! 5. fewer fingers
//! 6. per-string frets, compared low string first (a mute sorts after any fret)

use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::types::{
    extra_fret_positions, fingers_needed, fretted_range, Barre, ChordShape, ShapeConstraints,
    StringFret,
};
use crate::chord::Chord;
use crate::error::TheoryError;
use crate::fretboard::Fretboard;
use crate::pitch::PitchSet;

type RankKey = (Reverse<usize>, u8, u8, usize, u8, Vec<StringFret>);

/// Find the best shape for `chord`.
pub fn synthesize(
    fretboard: &Fretboard,
    chord: &Chord,
    constraints: &ShapeConstraints,
) -> Result<ChordShape, TheoryError> {
    let mut shapes = synthesize_ranked(fretboard, chord, constraints, 1)?;
    shapes.pop().ok_or_else(|| unplayable(chord))
}

/// Up to `limit` shapes for `chord`, best first. Never empty on success.
pub fn synthesize_ranked(
    fretboard: &Fretboard,
    chord: &Chord,
    constraints: &ShapeConstraints,
    limit: usize,
) -> Result<Vec<ChordShape>, TheoryError> {
    let tones = chord.tone_set();
    let options: Vec<Vec<StringFret>> = (0..fretboard.string_count())
        .map(|string| {
            let mut candidates: Vec<StringFret> = fretboard
                .frets_in(string, &tones)
                .into_iter()
                .map(StringFret::Fret)
                .collect();
            if constraints.allow_muted {
                candidates.push(StringFret::Muted);
            }
            candidates
        })
        .collect();

    if options.is_empty() || options.iter().any(Vec::is_empty) {
        return Err(unplayable(chord));
    }

    let limit = limit.max(1);
    // Max-heap on the key: the worst kept shape sits on top.
    let mut best: BinaryHeap<RankKey> = BinaryHeap::new();
    let mut visited = 0usize;
    let mut playable = 0usize;

    // cursor[d] is the option being tried on string d; chosen holds strings 0..depth.
    let strings = options.len();
    let mut cursor = vec![0usize; strings];
    let mut chosen: Vec<StringFret> = Vec::with_capacity(strings);
    let mut depth = 0;

    loop {
        if cursor[depth] == options[depth].len() {
            if depth == 0 {
                break;
            }
            cursor[depth] = 0;
            depth -= 1;
            chosen.pop();
            cursor[depth] += 1;
            continue;
        }

        chosen.push(options[depth][cursor[depth]]);
        visited += 1;

        if !within_span(&chosen, constraints.max_span) {
            chosen.pop();
            cursor[depth] += 1;
            continue;
        }

        if depth + 1 == strings {
            if let Some(key) = rank(fretboard, chord, &tones, constraints, &chosen) {
                playable += 1;
                best.push(key);
                if best.len() > limit {
                    best.pop();
                }
            }
            chosen.pop();
            cursor[depth] += 1;
            continue;
        }

        depth += 1;
    }

    debug!("{}: visited {} partial shapes, {} playable", chord, visited, playable);

    if best.is_empty() {
        return Err(unplayable(chord));
    }

    Ok(best
        .into_sorted_vec()
        .into_iter()
        .map(|(.., frets)| ChordShape::new(fretboard, *chord, frets))
        .collect())
}

fn unplayable(chord: &Chord) -> TheoryError {
    TheoryError::Unplayable {
        chord: chord.name(),
    }
}

fn within_span(frets: &[StringFret], max_span: u8) -> bool {
    match fretted_range(frets) {
        (Some(low), Some(high)) => high - low <= max_span,
        _ => true,
    }
}

/// Ranking key for a complete assignment, or `None` if it breaks a constraint.
fn rank(
    fretboard: &Fretboard,
    chord: &Chord,
    tones: &PitchSet,
    constraints: &ShapeConstraints,
    frets: &[StringFret],
) -> Option<RankKey> {
    let sounded: PitchSet = frets
        .iter()
        .enumerate()
        .filter_map(|(string, f)| fretboard.note(string, f.fret()?))
        .map(|note| note.pitch)
        .collect();
    let sounding = frets.iter().filter(|f| f.fret().is_some()).count();

    if sounding == 0 {
        return None;
    }
    if constraints.require_root && !sounded.contains(chord.root) {
        return None;
    }
    if constraints.require_all_tones && sounded != *tones {
        return None;
    }

    let barre = Barre::detect(frets);
    let fingers = fingers_needed(frets, barre.as_ref());
    if constraints.max_fingers.is_some_and(|max| fingers > max) {
        return None;
    }

    let (lowest, highest) = fretted_range(frets);
    let lowest = lowest.unwrap_or(0);
    let span = highest.unwrap_or(0) - lowest;

    Some((
        Reverse(sounding),
        span,
        lowest,
        extra_fret_positions(frets),
        fingers,
        frets.to_vec(),
    ))
}
