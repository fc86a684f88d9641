use super::types::extra_fret_positions;
use super::*;
use crate::chord::parse_chord_symbol;
use std::cmp::Reverse;
use crate::error::TheoryError;
use crate::fretboard::Fretboard;
use crate::tuning::{select_tuning, Tuning};

fn standard(max_fret: u8) -> Fretboard {
    Fretboard::build(&select_tuning("Standard").unwrap(), max_fret)
}

fn best(board: &Fretboard, symbol: &str) -> ChordShape {
    let chord = parse_chord_symbol(symbol).unwrap();
    synthesize(board, &chord, &ShapeConstraints::default()).unwrap()
}

#[test]
fn test_e_minor_open_shape() {
    let shape = best(&standard(15), "Em");

    assert_eq!(shape.tab(), "022000");
    assert_eq!(shape.span, 0);
    assert_eq!(shape.lowest_fret, Some(2));
    assert_eq!(shape.highest_fret, Some(2));
    assert!(shape.muted.is_empty());
    assert_eq!(
        shape.barre,
        Some(Barre {
            fret: 2,
            from_string: 1,
            to_string: 2
        })
    );
    assert_eq!(shape.fingers, 1);
    assert_eq!(shape.notes[0].unwrap().to_string(), "E2");
}

#[test]
fn test_c_major_open_shape() {
    // Six strings need A, D and B fretted; the lowest window is frets 1-3.
    let shape = best(&standard(15), "C");

    assert_eq!(shape.tab(), "032010");
    assert_eq!(shape.span, 2);
    assert_eq!(shape.lowest_fret, Some(1));
    assert_eq!(shape.barre, None);
    assert_eq!(shape.fingers, 3);
}

#[test]
fn test_f_major_prefers_full_barre() {
    // 103211 ties 133211 on strings, span, start and frets used;
    // the full barre needs one finger fewer.
    let shape = best(&standard(15), "F");

    assert_eq!(shape.tab(), "133211");
    assert_eq!(
        shape.barre,
        Some(Barre {
            fret: 1,
            from_string: 0,
            to_string: 5
        })
    );
    assert_eq!(shape.fingers, 4);
}

#[test]
fn test_max_fingers_constraint() {
    let board = standard(15);
    let chord = parse_chord_symbol("F").unwrap();
    let constraints = ShapeConstraints {
        max_fingers: Some(3),
        ..ShapeConstraints::default()
    };
    let shape = synthesize(&board, &chord, &constraints).unwrap();
    assert!(shape.fingers <= 3, "{} needs {} fingers", shape.tab(), shape.fingers);
}

#[test]
fn test_unplayable_without_candidates() {
    let drone = Tuning::parse("Drone", "C3").unwrap();
    let board = Fretboard::build(&drone, 0);
    let chord = parse_chord_symbol("Em").unwrap();

    assert_eq!(
        synthesize(&board, &chord, &ShapeConstraints::default()),
        Err(TheoryError::Unplayable {
            chord: "Em".to_string()
        })
    );
}

#[test]
fn test_require_root() {
    let tuning = Tuning::parse("Pair", "G3 B3").unwrap();
    let board = Fretboard::build(&tuning, 0);
    let chord = parse_chord_symbol("Em").unwrap();

    assert!(matches!(
        synthesize(&board, &chord, &ShapeConstraints::default()),
        Err(TheoryError::Unplayable { .. })
    ));

    let relaxed = ShapeConstraints {
        require_root: false,
        ..ShapeConstraints::default()
    };
    let shape = synthesize(&board, &chord, &relaxed).unwrap();
    assert_eq!(shape.tab(), "00");
}

#[test]
fn test_disallow_muting() {
    let board = standard(15);
    let chord = parse_chord_symbol("Em").unwrap();
    let strict = ShapeConstraints {
        allow_muted: false,
        ..ShapeConstraints::default()
    };
    assert_eq!(synthesize(&board, &chord, &strict).unwrap().tab(), "022000");

    // The A string has no E, G or B below fret 2.
    let short = standard(1);
    assert!(matches!(
        synthesize(&short, &chord, &strict),
        Err(TheoryError::Unplayable { .. })
    ));
    let shape = synthesize(&short, &chord, &ShapeConstraints::default()).unwrap();
    assert_eq!(shape.muted, vec![1, 2]);
    assert_eq!(shape.tab(), "0xx000");
}

#[test]
fn test_ranked_shapes_respect_constraints_and_order() {
    let board = standard(12);
    let chord = parse_chord_symbol("G7").unwrap();
    let constraints = ShapeConstraints {
        max_span: 3,
        require_all_tones: true,
        ..ShapeConstraints::default()
    };

    let shapes = synthesize_ranked(&board, &chord, &constraints, 10).unwrap();
    assert!(!shapes.is_empty() && shapes.len() <= 10);
    assert_eq!(shapes[0], synthesize(&board, &chord, &constraints).unwrap());

    for shape in &shapes {
        assert!(shape.span <= 3, "{}", shape.tab());
        assert_eq!(shape.pitch_set(), chord.tone_set(), "{}", shape.tab());
        assert!(shape.pitch_set().contains(chord.root));
    }
    for pair in shapes.windows(2) {
        assert!(pair[0].sounded_strings() >= pair[1].sounded_strings());
    }
}

#[test]
fn test_fewer_fret_positions_win_ties() {
    // Strings tuned so each one has a single fret of Cmaj7 in reach, except
    // the middle one (B at 2, C at 3). Both shapes sound three strings over
    // frets 1-3 with three fingers; 133 stops on two frets, 123 on three.
    let tuning = Tuning::parse("Trio", "D#3 A3 C#4").unwrap();
    let board = Fretboard::build(&tuning, 3);
    let chord = parse_chord_symbol("Cmaj7").unwrap();
    let constraints = ShapeConstraints {
        allow_muted: false,
        require_root: false,
        ..ShapeConstraints::default()
    };

    let shapes = synthesize_ranked(&board, &chord, &constraints, 5).unwrap();
    let tabs: Vec<String> = shapes.iter().map(ChordShape::tab).collect();
    assert_eq!(tabs, vec!["133", "123"]);
    assert_eq!(shapes[0].fingers, shapes[1].fingers);
    assert_eq!(synthesize(&board, &chord, &constraints).unwrap().tab(), "133");
}

#[test]
fn test_ranked_shapes_are_sorted_on_every_criterion() {
    let board = standard(12);
    let constraints = ShapeConstraints::default();
    for symbol in ["G7", "Am", "Dmaj7", "F#m7b5"] {
        let chord = parse_chord_symbol(symbol).unwrap();
        let shapes = synthesize_ranked(&board, &chord, &constraints, 200).unwrap();
        let keys: Vec<_> = shapes
            .iter()
            .map(|shape| {
                (
                    Reverse(shape.sounded_strings()),
                    shape.span,
                    shape.lowest_fret.unwrap_or(0),
                    extra_fret_positions(&shape.frets),
                    shape.fingers,
                    shape.frets.clone(),
                )
            })
            .collect();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "{}: {:?} before {:?}", symbol, pair[0], pair[1]);
        }
    }
}

#[test]
fn test_limit_keeps_the_best_prefix() {
    let board = standard(12);
    let constraints = ShapeConstraints::default();
    for symbol in ["Am", "D9", "Bm7"] {
        let chord = parse_chord_symbol(symbol).unwrap();
        let all = synthesize_ranked(&board, &chord, &constraints, usize::MAX).unwrap();
        for limit in [0, 1, 3, 7] {
            let top = synthesize_ranked(&board, &chord, &constraints, limit).unwrap();
            assert_eq!(top.len(), limit.max(1).min(all.len()), "{} limit {}", symbol, limit);
            assert_eq!(top[..], all[..top.len()], "{} limit {}", symbol, limit);
        }
        assert_eq!(synthesize(&board, &chord, &constraints).unwrap(), all[0]);
    }
}

#[test]
fn test_every_default_shape_is_within_span() {
    let board = standard(15);
    let constraints = ShapeConstraints::default();
    for symbol in ["C", "D", "E", "G", "A", "Am", "Dm", "Bm", "A7", "Cmaj7", "Bdim"] {
        let chord = parse_chord_symbol(symbol).unwrap();
        let shape = synthesize(&board, &chord, &constraints).unwrap();
        assert!(shape.span <= constraints.max_span, "{} {}", symbol, shape.tab());
        assert!(shape.pitch_set().is_subset(&chord.tone_set()), "{}", symbol);
        assert!(shape.pitch_set().contains(chord.root), "{}", symbol);
    }
}

#[test]
fn test_synthesis_is_deterministic() {
    let board = standard(15);
    let chord = parse_chord_symbol("Bm7").unwrap();
    let constraints = ShapeConstraints::default();
    assert_eq!(
        synthesize_ranked(&board, &chord, &constraints, 5),
        synthesize_ranked(&board, &chord, &constraints, 5)
    );
}

#[test]
fn test_shape_serialization() {
    let board = standard(15);
    let chord = parse_chord_symbol("C").unwrap();
    let shape = ChordShape::new(
        &board,
        chord,
        vec![
            StringFret::Muted,
            StringFret::Fret(3),
            StringFret::Fret(2),
            StringFret::Fret(0),
            StringFret::Fret(1),
            StringFret::Fret(0),
        ],
    );

    assert_eq!(shape.tab(), "x32010");
    let json = serde_json::to_value(&shape).unwrap();
    assert_eq!(json["frets"], serde_json::json!(["x", 3, 2, 0, 1, 0]));
    assert_eq!(json["muted"], serde_json::json!([0]));
    assert_eq!(json["notes"][0], serde_json::Value::Null);
    assert_eq!(json["notes"][1], "C3");
    assert_eq!(json["span"], 2);
    assert_eq!(json["lowestFret"], 1);
    assert_eq!(json["chord"]["name"], "C");
    assert_eq!(json["barre"], serde_json::Value::Null);
}

#[test]
fn test_barre_requires_covered_strings() {
    use StringFret::{Fret, Muted};

    assert_eq!(Barre::detect(&[Fret(1), Fret(0), Fret(3), Fret(1)]), None);
    assert_eq!(Barre::detect(&[Fret(3), Muted, Fret(3)]), None);
    assert_eq!(Barre::detect(&[Fret(0), Fret(2), Fret(4), Fret(2)]).map(|b| b.strings()), Some(3));
    assert_eq!(Barre::detect(&[Fret(0), Fret(0)]), None);
}
