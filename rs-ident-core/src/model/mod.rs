//! Top-level module for text fingerprints and source attribution.
//!
//! This module provides:
//! - The five feature channels (`Feature`)
//! - The accumulating fingerprint of a text (`FeatureModel`)
//! - Smoothed log-likelihood scoring between two mappings (`similarity`)
//! - Two-candidate weighted classification (`classifier`)

/// Feature channel names, record names and classifier weights.
pub mod feature;

/// Text fingerprint built from one or more sources.
///
/// Handles ingestion of strings and files, persistence of the five
/// mappings, and per-channel scoring against another model.
pub mod feature_model;

/// Log-likelihood similarity between two frequency mappings.
pub mod similarity;

/// Weighted decision between two candidate sources.
///
/// Exposes the verdict together with every channel score.
pub mod classifier;
