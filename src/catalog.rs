//! Chord-quality catalog.
//!
//! A fixed table of qualities, each an interval set (semitones above the root)
//! plus the symbols it is written with. Table order is the recognition
//! priority: common qualities first, extended ones last.
//!
//! No two entries (at any pair of roots) share a tone set, so a tone set
//! always names exactly one chord.

use serde::Serialize;

use crate::error::TheoryError;

#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChordQuality {
    /// Stable identifier, e.g. `"dominant7"`.
    pub id: &'static str,
    /// Suffix appended to the root when naming a chord (`"m7"` in `Am7`).
    pub symbol: &'static str,
    /// Unique offsets in 0..=11, starting with 0, ascending.
    pub intervals: &'static [u8],
    /// Alternative suffixes accepted when parsing.
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    /// Position in the catalog; lower ranks win recognition ties.
    pub priority: usize,
}

impl ChordQuality {
    /// Number of distinct tones.
    pub fn size(&self) -> usize {
        self.intervals.len()
    }
}

const fn quality(
    priority: usize,
    id: &'static str,
    symbol: &'static str,
    intervals: &'static [u8],
    aliases: &'static [&'static str],
) -> ChordQuality {
    ChordQuality {
        id,
        symbol,
        intervals,
        aliases,
        priority,
    }
}

static CATALOG: [ChordQuality; 13] = [
    quality(0, "major", "", &[0, 4, 7], &["maj", "M"]),
    quality(1, "minor", "m", &[0, 3, 7], &["min", "-"]),
    quality(2, "dominant7", "7", &[0, 4, 7, 10], &["dom7"]),
    quality(3, "major7", "maj7", &[0, 4, 7, 11], &["M7", "Δ7", "Δ"]),
    quality(4, "minor7", "m7", &[0, 3, 7, 10], &["min7", "-7"]),
    quality(5, "sus4", "sus4", &[0, 5, 7], &["sus"]),
    quality(6, "diminished", "dim", &[0, 3, 6], &["°", "o"]),
    quality(7, "power", "5", &[0, 7], &[]),
    quality(8, "half-diminished7", "m7b5", &[0, 3, 6, 10], &["ø", "ø7", "min7b5"]),
    quality(9, "minor-major7", "mM7", &[0, 3, 7, 11], &["mmaj7", "minmaj7", "-M7"]),
    quality(10, "add9", "add9", &[0, 2, 4, 7], &["add2"]),
    quality(11, "dominant9", "9", &[0, 2, 4, 7, 10], &["dom9"]),
    quality(12, "minor9", "m9", &[0, 2, 3, 7, 10], &["min9", "-9"]),
];

/// All qualities in priority order.
pub fn qualities() -> &'static [ChordQuality] {
    &CATALOG
}

/// Find a quality by identifier (any case) or by symbol/alias (exact case,
/// since `M` and `m` differ).
pub fn lookup(name: &str) -> Result<&'static ChordQuality, TheoryError> {
    let trimmed = name.trim();
    let lowered = trimmed.to_ascii_lowercase();

    CATALOG
        .iter()
        .find(|q| q.id == lowered)
        .or_else(|| {
            CATALOG
                .iter()
                .find(|q| q.symbol == trimmed || q.aliases.iter().any(|a| *a == trimmed))
        })
        .ok_or_else(|| TheoryError::UnknownQuality(name.to_string()))
}

/// Interval set of the named quality.
pub fn intervals_of(name: &str) -> Result<&'static [u8], TheoryError> {
    lookup(name).map(|q| q.intervals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{PitchClass, PitchSet};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_invariants() {
        for (i, q) in qualities().iter().enumerate() {
            assert_eq!(q.priority, i, "{} out of order", q.id);
            assert_eq!(q.intervals.first(), Some(&0), "{} must start at the root", q.id);
            assert!(q.intervals.iter().all(|&o| o < 12), "{}", q.id);
            assert!(
                q.intervals.windows(2).all(|w| w[0] < w[1]),
                "{} intervals must be unique and ascending",
                q.id
            );
        }
    }

    #[test]
    fn test_common_qualities_rank_first() {
        let ids: Vec<&str> = qualities().iter().take(3).map(|q| q.id).collect();
        assert_eq!(ids, vec!["major", "minor", "dominant7"]);
    }

    #[test]
    fn test_every_tone_set_names_one_chord() {
        let mut seen = HashSet::new();
        for q in qualities() {
            for root in PitchClass::all() {
                let tones: PitchSet = q
                    .intervals
                    .iter()
                    .map(|&o| root.transpose(o as i32))
                    .collect();
                assert!(seen.insert(tones), "{}{} duplicates another chord", root, q.symbol);
            }
        }
    }

    #[test]
    fn test_lookup_by_id_symbol_and_alias() {
        assert_eq!(lookup("minor").unwrap().id, "minor");
        assert_eq!(lookup("Minor").unwrap().id, "minor");
        assert_eq!(lookup("m").unwrap().id, "minor");
        assert_eq!(lookup("M").unwrap().id, "major");
        assert_eq!(lookup("").unwrap().id, "major");
        assert_eq!(lookup("M7").unwrap().id, "major7");
        assert_eq!(lookup("ø").unwrap().id, "half-diminished7");
        assert_eq!(intervals_of("dominant7").unwrap(), &[0, 4, 7, 10]);
    }

    #[test]
    fn test_unknown_quality() {
        assert_eq!(
            intervals_of("augmented13"),
            Err(TheoryError::UnknownQuality("augmented13".to_string()))
        );
    }
}
