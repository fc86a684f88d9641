//! # Error Types
//!
//! This module defines all error types for the chord engine.
//!
//! Every operation either succeeds completely or returns exactly one of these
//! kinds. Nothing is retried: all operations are pure, so the same input
//! always produces the same error.
//!
//! ## Error Types
//! - `InvalidNoteName` - A note string that is not A-G with an optional accidental
//! - `UnknownQuality` - A chord quality identifier or symbol not in the catalog
//! - `UnknownTuning` - A tuning name not in the registry
//! - `InvalidTuning` - A tuning with no strings or a malformed string list
//! - `EmptyInput` - The recognizer was given no notes
//! - `NoMatch` - No catalog chord contains the given notes
//! - `Unplayable` - No fingering satisfies the shape constraints
//! - `InvalidConfig` - Rejected YAML configuration
//!
//! ## Usage
//! ```rust
//! use chordfret::{recognise_chord, TheoryError};
//!
//! match recognise_chord(&["C", "E", "G"]) {
//!     Ok(chord) => println!("Recognised {}", chord),
//!     Err(TheoryError::NoMatch) => eprintln!("no chord recognised"),
//!     Err(TheoryError::InvalidNoteName(name)) => eprintln!("bad note '{}'", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// A note name that could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use chordfret::TheoryError;
    /// let err = TheoryError::InvalidNoteName("H#".to_string());
    /// assert_eq!(err.to_string(), "Invalid note name: 'H#'");
    /// ```
    #[error("Invalid note name: '{0}'")]
    InvalidNoteName(String),

    /// Chord quality not present in the catalog.
    #[error("Unknown chord quality: '{0}'")]
    UnknownQuality(String),

    /// Tuning name not present in the registry.
    ///
    /// # Example
    /// ```
    /// # use chordfret::TheoryError;
    /// let err = TheoryError::UnknownTuning("Banjo Open Z".to_string());
    /// assert_eq!(err.to_string(), "Unknown tuning: 'Banjo Open Z'");
    /// ```
    #[error("Unknown tuning: '{0}'")]
    UnknownTuning(String),

    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    /// The recognizer needs at least one note.
    #[error("No notes given")]
    EmptyInput,

    /// No chord in the catalog contains every input note.
    #[error("No chord recognised")]
    NoMatch,

    /// The fingering search found no assignment satisfying the constraints.
    ///
    /// # Example
    /// ```
    /// # use chordfret::TheoryError;
    /// let err = TheoryError::Unplayable { chord: "F#m7b5".to_string() };
    /// assert_eq!(err.to_string(), "No playable shape for F#m7b5");
    /// ```
    #[error("No playable shape for {chord}")]
    Unplayable { chord: String },

    /// Invalid configuration.
    ///
    /// Occurs when the YAML configuration is malformed or holds out-of-range values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
