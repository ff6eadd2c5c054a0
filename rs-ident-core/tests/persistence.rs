// Persistence tests: five named records per model, written to a temp dir.
//
// Round-trips must reproduce every mapping exactly, integer keys included;
// missing or corrupt records must fail instead of loading empty mappings.

use std::fs;

use rs_ident_core::{Error, Feature, FeatureModel};

fn sample() -> FeatureModel {
	let mut model = FeatureModel::new("shrek");
	model.add_string("Well, yes. Ogres are like onions! They have layers, you know? Donkey laughs.");
	model.add_string("Wait.. what?");
	model
}

#[test]
fn round_trip_preserves_all_channels() {
	let dir = tempfile::tempdir().unwrap();
	let model = sample();
	model.save(dir.path()).unwrap();

	let loaded = FeatureModel::load("shrek", dir.path()).unwrap();
	assert_eq!(loaded, model);
	assert_eq!(loaded.word_lengths().get(&6), model.word_lengths().get(&6));
	assert!(loaded.sentence_lengths().contains_key(&0));
}

#[test]
fn writes_one_record_per_channel() {
	let dir = tempfile::tempdir().unwrap();
	sample().save(dir.path()).unwrap();

	let mut names: Vec<String> = fs::read_dir(dir.path())
		.unwrap()
		.map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
		.collect();
	names.sort();
	assert_eq!(
		names,
		vec![
			"shrek_sentence_lengths",
			"shrek_stems",
			"shrek_word_lengths",
			"shrek_words",
			"shrek_words_before_comma",
		]
	);
	assert!(FeatureModel::exists("shrek", dir.path()));
	assert!(!FeatureModel::exists("donkey", dir.path()));
}

#[test]
fn save_creates_directory_and_overwrites() {
	let dir = tempfile::tempdir().unwrap();
	let nested = dir.path().join("models").join("v1");

	let mut model = FeatureModel::new("grow");
	model.add_string("One word.");
	model.save(&nested).unwrap();
	model.add_string("Two more words, here.");
	model.save(&nested).unwrap();

	assert_eq!(FeatureModel::load("grow", &nested).unwrap(), model);
}

#[test]
fn empty_model_round_trips() {
	let dir = tempfile::tempdir().unwrap();
	FeatureModel::new("blank").save(dir.path()).unwrap();
	let loaded = FeatureModel::load("blank", dir.path()).unwrap();
	assert!(loaded.is_empty());
	assert_eq!(loaded.name(), "blank");
}

#[test]
fn missing_record_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	sample().save(dir.path()).unwrap();
	fs::remove_file(dir.path().join(format!("shrek_{}", Feature::Stems.record_name()))).unwrap();

	let err = FeatureModel::load("shrek", dir.path()).unwrap_err();
	assert!(matches!(err, Error::Io { .. }), "{err}");
}

#[test]
fn corrupt_record_is_decode_error() {
	let dir = tempfile::tempdir().unwrap();
	sample().save(dir.path()).unwrap();
	// A five-byte channel tag cut off after its first byte
	fs::write(dir.path().join("shrek_word_lengths"), [0x05u8, 0x02]).unwrap();

	match FeatureModel::load("shrek", dir.path()) {
		Err(Error::Decode { record, .. }) => assert_eq!(record, "shrek_word_lengths"),
		other => panic!("expected decode error, got {other:?}"),
	}
}

#[test]
fn trailing_garbage_is_rejected() {
	let dir = tempfile::tempdir().unwrap();
	let mut model = FeatureModel::new("m");
	model.add_string("Hello there, friend. Bye!");
	model.save(dir.path()).unwrap();

	let path = dir.path().join("m_word_lengths");
	let mut bytes = fs::read(&path).unwrap();
	bytes.extend_from_slice(b"THIS IS NOT A MAPPING");
	fs::write(&path, bytes).unwrap();

	match FeatureModel::load("m", dir.path()) {
		Err(Error::Malformed { record, reason }) => {
			assert_eq!(record, "m_word_lengths");
			assert!(reason.contains("trailing"), "{reason}");
		}
		other => panic!("expected malformed record, got {other:?}"),
	}
}

#[test]
fn record_from_another_channel_is_rejected() {
	let dir = tempfile::tempdir().unwrap();
	let mut model = FeatureModel::new("m");
	model.add_string("Hello there, friend. Bye!");
	model.save(dir.path()).unwrap();

	// String-keyed words copied over the integer-keyed comma record
	fs::copy(dir.path().join("m_words"), dir.path().join("m_words_before_comma")).unwrap();

	match FeatureModel::load("m", dir.path()) {
		Err(Error::Malformed { record, reason }) => {
			assert_eq!(record, "m_words_before_comma");
			assert!(reason.contains("expected words_before_comma"), "{reason}");
		}
		other => panic!("expected malformed record, got {other:?}"),
	}
}
