//! Lexical helpers feeding the feature model.

/// Punctuation stripping and whitespace splitting.
pub mod tokenizer;

/// Rule-based suffix stripper.
pub mod stemmer;
