//! Named tunings.
//!
//! A tuning lists open-string notes from the lowest string (index 0) upward.
//! The built-in table is static; [`TuningRegistry`] layers user-defined
//! tunings from configuration on top of it.
//!
//! Lookup ignores case, surrounding whitespace, and treats `_`/`-` like
//! spaces, so `"drop-d"`, `"DROP_D"` and `"Drop D"` name the same tuning.

use serde::Serialize;

use crate::error::TheoryError;
use crate::pitch::{Note, PitchClass};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tuning {
    pub name: String,
    pub strings: Vec<Note>,
}

impl Tuning {
    pub fn new(name: impl Into<String>, strings: Vec<Note>) -> Result<Self, TheoryError> {
        let name = name.into();
        if strings.is_empty() {
            return Err(TheoryError::InvalidTuning(format!("'{}' has no strings", name)));
        }
        Ok(Tuning { name, strings })
    }

    /// Build a tuning from whitespace-separated notes, lowest string first,
    /// e.g. `"D2 A2 D3 G3 A3 D4"`.
    pub fn parse(name: impl Into<String>, notes: &str) -> Result<Self, TheoryError> {
        let name = name.into();
        let strings = notes
            .split_whitespace()
            .map(Note::parse)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TheoryError::InvalidTuning(format!("'{}': {}", name, e)))?;
        Tuning::new(name, strings)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

const fn n(pitch: u8, octave: i8) -> Note {
    Note::new(PitchClass::new(pitch), Some(octave))
}

const C: u8 = 0;
const CS: u8 = 1;
const D: u8 = 2;
const DS: u8 = 3;
const E: u8 = 4;
const F: u8 = 5;
const FS: u8 = 6;
const G: u8 = 7;
const GS: u8 = 8;
const A: u8 = 9;
const AS: u8 = 10;
const B: u8 = 11;

static BUILTIN: &[(&str, &[Note])] = &[
    ("Standard", &[n(E, 2), n(A, 2), n(D, 3), n(G, 3), n(B, 3), n(E, 4)]),
    ("Drop D", &[n(D, 2), n(A, 2), n(D, 3), n(G, 3), n(B, 3), n(E, 4)]),
    ("Half Step Down", &[n(DS, 2), n(GS, 2), n(CS, 3), n(FS, 3), n(AS, 3), n(DS, 4)]),
    ("Full Step Down", &[n(D, 2), n(G, 2), n(C, 3), n(F, 3), n(A, 3), n(D, 4)]),
    ("Drop C", &[n(C, 2), n(G, 2), n(C, 3), n(F, 3), n(A, 3), n(D, 4)]),
    ("DADGAD", &[n(D, 2), n(A, 2), n(D, 3), n(G, 3), n(A, 3), n(D, 4)]),
    ("Open D", &[n(D, 2), n(A, 2), n(D, 3), n(FS, 3), n(A, 3), n(D, 4)]),
    ("Open E", &[n(E, 2), n(B, 2), n(E, 3), n(GS, 3), n(B, 3), n(E, 4)]),
    ("Open G", &[n(D, 2), n(G, 2), n(D, 3), n(G, 3), n(B, 3), n(D, 4)]),
    ("Open C", &[n(C, 2), n(G, 2), n(C, 3), n(G, 3), n(C, 4), n(E, 4)]),
    ("Seven String", &[n(B, 1), n(E, 2), n(A, 2), n(D, 3), n(G, 3), n(B, 3), n(E, 4)]),
    ("Bass Standard", &[n(E, 1), n(A, 1), n(D, 2), n(G, 2)]),
    ("Five String Bass", &[n(B, 0), n(E, 1), n(A, 1), n(D, 2), n(G, 2)]),
    ("Ukulele", &[n(G, 4), n(C, 4), n(E, 4), n(A, 4)]),
    ("Baritone Ukulele", &[n(D, 3), n(G, 3), n(B, 3), n(E, 4)]),
    ("Mandolin", &[n(G, 3), n(D, 4), n(A, 4), n(E, 5)]),
];

fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn builtin(name: &str) -> Option<Tuning> {
    let key = normalize(name);
    BUILTIN
        .iter()
        .find(|(builtin_name, _)| normalize(builtin_name) == key)
        .map(|(builtin_name, strings)| Tuning {
            name: builtin_name.to_string(),
            strings: strings.to_vec(),
        })
}

/// Look up a built-in tuning.
pub fn select_tuning(name: &str) -> Result<Tuning, TheoryError> {
    builtin(name).ok_or_else(|| TheoryError::UnknownTuning(name.to_string()))
}

/// Names of the built-in tunings in table order.
pub fn tuning_names() -> Vec<&'static str> {
    BUILTIN.iter().map(|(name, _)| *name).collect()
}

/// Built-in tunings plus user-defined ones. User entries shadow built-ins of
/// the same name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TuningRegistry {
    custom: Vec<Tuning>,
}

impl TuningRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tuning: Tuning) {
        let key = normalize(&tuning.name);
        self.custom.retain(|t| normalize(&t.name) != key);
        self.custom.push(tuning);
    }

    pub fn select(&self, name: &str) -> Result<Tuning, TheoryError> {
        let key = normalize(name);
        match self.custom.iter().find(|t| normalize(&t.name) == key) {
            Some(tuning) => Ok(tuning.clone()),
            None => select_tuning(name),
        }
    }

    /// Built-in names followed by custom names that do not shadow one.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = tuning_names().into_iter().map(String::from).collect();
        for tuning in &self.custom {
            let key = normalize(&tuning.name);
            if !names.iter().any(|n| normalize(n) == key) {
                names.push(tuning.name.clone());
            }
        }
        names
    }
}
