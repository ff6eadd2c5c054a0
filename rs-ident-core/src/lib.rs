//! Frequency-based text fingerprints and source attribution.
//!
//! This crate provides:
//! - Text cleaning and a naive rule-based stemmer
//! - Feature models counting words, word lengths, stems, sentence
//!   lengths and comma positions
//! - Persistence of each model as five named records
//! - A smoothed log-likelihood classifier choosing between two sources
//!
//! Text helpers and models are public; file handling is mostly internal.

/// Feature models, similarity scoring and classification.
pub mod model;

/// Text cleaning and stemming.
pub mod text;

/// Crate error type.
pub mod error;

/// I/O utilities (text loading, record files, directory listing).
///
/// Only `list_files` is exposed.
pub mod io;

pub use error::{Error, Result};
pub use model::classifier::{classify, CandidateScores, Classification, SimilarityScores};
pub use model::feature::Feature;
pub use model::feature_model::FeatureModel;
