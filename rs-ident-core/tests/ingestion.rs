// Ingestion tests: strings split across calls, and file sources.

use std::fs;

use rs_ident_core::{Error, FeatureModel};

fn from_parts(parts: &[&str]) -> FeatureModel {
	let mut model = FeatureModel::new("parts");
	for part in parts {
		model.add_string(part);
	}
	model
}

// ============================================================
// Split vs concatenated input
// ============================================================

#[test]
fn split_after_terminator_and_space_matches_concatenation() {
	let split = from_parts(&["It is late. ", "Go home, now!"]);
	let whole = from_parts(&["It is late. Go home, now!"]);
	assert_eq!(split, whole);
}

#[test]
fn split_without_separator_differs() {
	// The pieces glue into a single word when concatenated.
	let split = from_parts(&["It is late.", "Go home, now!"]);
	let whole = from_parts(&["It is late.Go home, now!"]);
	assert_ne!(split.words(), whole.words());
	assert_ne!(split.sentence_lengths(), whole.sentence_lengths());
}

#[test]
fn split_mid_sentence_differs() {
	// Counters restart at 1 on every call.
	let split = from_parts(&["We walked ", "all night."]);
	let whole = from_parts(&["We walked all night."]);
	assert_eq!(split.words(), whole.words());
	assert_ne!(split.sentence_lengths(), whole.sentence_lengths());
}

#[test]
fn counts_never_decrease() {
	let mut model = FeatureModel::new("grow");
	model.add_string("Run, run, run!");
	let before = model.clone();
	model.add_string("Walk.");

	for (word, count) in before.words() {
		assert!(model.words()[word] >= *count);
	}
	for (len, count) in before.word_lengths() {
		assert!(model.word_lengths()[len] >= *count);
	}
	assert!(model.words().values().all(|&count| count >= 1));
}

// ============================================================
// Files
// ============================================================

#[test]
fn file_and_string_ingestion_agree() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("script.txt");
	let text = "Is he interested? No, but I am.";
	fs::write(&path, text).unwrap();

	let mut from_file = FeatureModel::new("m");
	from_file.add_file(&path).unwrap();
	let mut from_string = FeatureModel::new("m");
	from_string.add_string(text);
	assert_eq!(from_file, from_string);
}

#[test]
fn invalid_utf8_bytes_are_ignored() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("latin1.txt");
	fs::write(&path, b"Cr\xe8me brulee, again.").unwrap();

	let mut model = FeatureModel::new("m");
	model.add_file(&path).unwrap();
	assert_eq!(model.words().get("crme"), Some(&1));
}

#[test]
fn missing_file_fails_without_partial_ingestion() {
	let dir = tempfile::tempdir().unwrap();
	let good = dir.path().join("good.txt");
	fs::write(&good, "Fine words.").unwrap();

	let mut model = FeatureModel::new("m");
	let err = model.add_file(dir.path().join("missing.txt")).unwrap_err();
	assert!(matches!(err, Error::Io { .. }));
	assert!(model.is_empty());

	let err = model
		.add_files([good.clone(), dir.path().join("missing.txt")])
		.unwrap_err();
	assert!(matches!(err, Error::Io { ref path, .. } if path.ends_with("missing.txt")));
	assert_eq!(model.words().len(), 2);
}
