//! # Configuration
//!
//! Optional YAML settings for the fretboard bound, shape constraints,
//! display spelling and extra tunings.
//!
//! ## Format
//! ```yaml
//! max-fret: 12
//! max-span: 3
//! allow-muted: true
//! require-root: true
//! require-all-tones: false
//! max-fingers: 4
//! prefer-flats: true
//! tunings:
//!   Open A: E2 A2 E3 A3 C#4 E4
//!   Baritone: B1 E2 A2 D3 F#3 B3
//! ```
//!
//! Every key is optional; missing keys keep their defaults. Unknown keys are
//! rejected so typos do not pass silently.
//!
//! ## Example
//! ```rust
//! use chordfret::config::Config;
//!
//! let config = Config::from_yaml("max-span: 3\nprefer-flats: true")?;
//! assert_eq!(config.constraints.max_span, 3);
//! assert!(config.constraints.require_root);
//! # Ok::<(), chordfret::TheoryError>(())
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::fretboard::DEFAULT_MAX_FRET;
use crate::pitch::Spelling;
use crate::shape::ShapeConstraints;
use crate::tuning::{Tuning, TuningRegistry};

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub max_fret: Option<u8>,
    pub max_span: Option<u8>,
    pub allow_muted: Option<bool>,
    pub require_root: Option<bool>,
    pub require_all_tones: Option<bool>,
    pub max_fingers: Option<u8>,
    pub prefer_flats: Option<bool>,
    #[serde(default)]
    pub tunings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub max_fret: u8,
    pub constraints: ShapeConstraints,
    pub spelling: Spelling,
    pub tunings: TuningRegistry,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fret: DEFAULT_MAX_FRET,
            constraints: ShapeConstraints::default(),
            spelling: Spelling::Sharp,
            tunings: TuningRegistry::new(),
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, TheoryError> {
        // An empty document holds no mapping to deserialize.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let raw: RawConfig = serde_yaml::from_str(content)
            .map_err(|e| TheoryError::InvalidConfig(e.to_string()))?;
        Config::from_raw(raw)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TheoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TheoryError::InvalidConfig(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Config::from_yaml(&content)
    }

    /// Respell `chord` for display when flats are preferred; otherwise keep
    /// the spelling it already carries.
    pub fn spell(&self, chord: Chord) -> Chord {
        match self.spelling {
            Spelling::Flat => chord.with_spelling(Spelling::Flat),
            Spelling::Sharp => chord,
        }
    }

    fn from_raw(raw: RawConfig) -> Result<Self, TheoryError> {
        let defaults = ShapeConstraints::default();

        if raw.max_fingers == Some(0) {
            return Err(TheoryError::InvalidConfig(
                "max-fingers must be at least 1".to_string(),
            ));
        }

        let constraints = ShapeConstraints {
            max_span: raw.max_span.unwrap_or(defaults.max_span),
            allow_muted: raw.allow_muted.unwrap_or(defaults.allow_muted),
            require_root: raw.require_root.unwrap_or(defaults.require_root),
            require_all_tones: raw.require_all_tones.unwrap_or(defaults.require_all_tones),
            max_fingers: raw.max_fingers.or(defaults.max_fingers),
        };

        let mut tunings = TuningRegistry::new();
        for (name, notes) in raw.tunings {
            let tuning = Tuning::parse(name, &notes)
                .map_err(|e| TheoryError::InvalidConfig(e.to_string()))?;
            tunings.insert(tuning);
        }

        let spelling = if raw.prefer_flats.unwrap_or(false) {
            Spelling::Flat
        } else {
            Spelling::Sharp
        };

        Ok(Config {
            max_fret: raw.max_fret.unwrap_or(DEFAULT_MAX_FRET),
            constraints,
            spelling,
            tunings,
        })
    }
}
