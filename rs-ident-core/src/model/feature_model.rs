use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use super::classifier::{self, Classification, SimilarityScores};
use super::feature::Feature;
use super::similarity::compare;
use crate::error::{Error, Result};
use crate::io::{read_record, read_text, record_path, write_record};
use crate::text::stemmer::stem;
use crate::text::tokenizer::clean_text;

/// Frequency fingerprint of a body of text.
///
/// A `FeatureModel` accumulates five independent counters from every text
/// it ingests, and is compared to other models channel by channel.
///
/// # Responsibilities
/// - Count words, word lengths and stems from the cleaned word sequence
/// - Count sentence lengths and comma positions from the raw characters
/// - Save and load its five mappings as named records
/// - Score itself against a reference model
///
/// # Invariants
/// - All counts are >= 1
/// - Counts only grow: ingestion is the only mutation
/// - `name` is a label, not an identity; equal names do not share state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureModel {
	/// Display label and prefix of the persisted records.
	name: String,

	/// Cleaned word → occurrences.
	words: BTreeMap<String, u64>,

	/// Word length in characters → occurrences.
	word_lengths: BTreeMap<usize, u64>,

	/// Stem → occurrences.
	stems: BTreeMap<String, u64>,

	/// Spaces seen since the previous terminator (starting at 1) → occurrences.
	sentence_lengths: BTreeMap<usize, u64>,

	/// Word position of a comma within its sentence → occurrences.
	commas: BTreeMap<usize, u64>,
}

impl FeatureModel {
	/// Creates an empty model labelled `name`.
	pub fn new(name: &str) -> Self {
		Self { name: name.to_owned(), ..Self::default() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn words(&self) -> &BTreeMap<String, u64> {
		&self.words
	}

	pub fn word_lengths(&self) -> &BTreeMap<usize, u64> {
		&self.word_lengths
	}

	pub fn stems(&self) -> &BTreeMap<String, u64> {
		&self.stems
	}

	pub fn sentence_lengths(&self) -> &BTreeMap<usize, u64> {
		&self.sentence_lengths
	}

	pub fn commas(&self) -> &BTreeMap<usize, u64> {
		&self.commas
	}

	/// Returns `true` if no channel holds any observation.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
			&& self.word_lengths.is_empty()
			&& self.stems.is_empty()
			&& self.sentence_lengths.is_empty()
			&& self.commas.is_empty()
	}

	/// Adds a block of text to the model.
	///
	/// Two passes run over the same input:
	/// - a scan of the raw characters, where each space advances both the
	///   sentence counter and the comma counter (both start at 1), a comma
	///   records and zeroes the comma counter, and `.`, `?` or `!` records
	///   the sentence counter and zeroes both;
	/// - a walk over `clean_text(text)` counting words, lengths and stems.
	///
	/// # Notes
	/// - Counters restart at 1 on every call, so splitting a text across
	///   calls only matches a single call when each piece ends with a
	///   terminator followed by exactly one space.
	pub fn add_string(&mut self, text: &str) {
		let mut sentence_count: usize = 1;
		let mut word_count_comma: usize = 1;

		for c in text.chars() {
			match c {
				' ' => {
					sentence_count += 1;
					word_count_comma += 1;
				}
				',' => {
					*self.commas.entry(word_count_comma).or_insert(0) += 1;
					word_count_comma = 0;
				}
				'.' | '?' | '!' => {
					*self.sentence_lengths.entry(sentence_count).or_insert(0) += 1;
					sentence_count = 0;
					word_count_comma = 0;
				}
				_ => {}
			}
		}

		for word in clean_text(text) {
			*self.word_lengths.entry(word.chars().count()).or_insert(0) += 1;
			*self.stems.entry(stem(&word)).or_insert(0) += 1;
			*self.words.entry(word).or_insert(0) += 1;
		}
	}

	/// Adds the whole content of a text file to the model.
	///
	/// # Errors
	/// Returns `Error::Io` if the file cannot be read; the model is left untouched.
	pub fn add_file<P: AsRef<Path>>(&mut self, filename: P) -> Result<()> {
		let text = read_text(&filename)?;
		debug!("{}: ingesting {} ({} bytes)", self.name, filename.as_ref().display(), text.len());
		self.add_string(&text);
		Ok(())
	}

	/// Adds several text files in order.
	///
	/// Stops at the first unreadable file; files before it stay ingested.
	pub fn add_files<I, P>(&mut self, filenames: I) -> Result<()>
	where
		I: IntoIterator<Item = P>,
		P: AsRef<Path>,
	{
		for filename in filenames {
			self.add_file(filename)?;
		}
		Ok(())
	}

	/// Writes the five mappings to `dir`, one record per channel.
	///
	/// Records are named `<name>_<record_name>` and fully overwritten.
	/// `dir` is created if missing.
	pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
		let dir = dir.as_ref();
		fs::create_dir_all(dir).map_err(|source| Error::Io { path: dir.to_owned(), source })?;

		let path = |feature: Feature| record_path(dir, &self.name, feature.record_name());
		write_record(&path(Feature::Words), Feature::Words.record_name(), &self.words)?;
		write_record(&path(Feature::WordLengths), Feature::WordLengths.record_name(), &self.word_lengths)?;
		write_record(&path(Feature::Stems), Feature::Stems.record_name(), &self.stems)?;
		write_record(&path(Feature::SentenceLengths), Feature::SentenceLengths.record_name(), &self.sentence_lengths)?;
		write_record(&path(Feature::Commas), Feature::Commas.record_name(), &self.commas)?;

		debug!("{}: saved to {}", self.name, dir.display());
		Ok(())
	}

	/// Rebuilds the model called `name` from its records in `dir`.
	///
	/// # Errors
	/// - `Error::Io` if a record is missing or unreadable
	/// - `Error::Decode` if a record does not hold a valid mapping
	/// - `Error::Malformed` if a record belongs to another channel or has trailing bytes
	pub fn load<P: AsRef<Path>>(name: &str, dir: P) -> Result<Self> {
		let dir = dir.as_ref();
		let path = |feature: Feature| record_path(dir, name, feature.record_name());

		let model = Self {
			name: name.to_owned(),
			words: read_record(&path(Feature::Words), Feature::Words.record_name())?,
			word_lengths: read_record(&path(Feature::WordLengths), Feature::WordLengths.record_name())?,
			stems: read_record(&path(Feature::Stems), Feature::Stems.record_name())?,
			sentence_lengths: read_record(&path(Feature::SentenceLengths), Feature::SentenceLengths.record_name())?,
			commas: read_record(&path(Feature::Commas), Feature::Commas.record_name())?,
		};

		debug!("{}: loaded from {}", name, dir.display());
		Ok(model)
	}

	/// Returns `true` if all five records of `name` are present in `dir`.
	pub fn exists<P: AsRef<Path>>(name: &str, dir: P) -> bool {
		Feature::ALL
			.iter()
			.all(|feature| record_path(&dir, name, feature.record_name()).is_file())
	}

	/// Scores one channel of `self` (the query) against `reference`.
	pub fn score(&self, reference: &FeatureModel, feature: Feature) -> f64 {
		match feature {
			Feature::Words => compare(&reference.words, &self.words),
			Feature::WordLengths => compare(&reference.word_lengths, &self.word_lengths),
			Feature::Stems => compare(&reference.stems, &self.stems),
			Feature::SentenceLengths => compare(&reference.sentence_lengths, &self.sentence_lengths),
			Feature::Commas => compare(&reference.commas, &self.commas),
		}
	}

	/// Scores every channel of `self` against `reference`, in `Feature::ALL` order.
	pub fn similarity_scores(&self, reference: &FeatureModel) -> SimilarityScores {
		SimilarityScores::new(Feature::ALL.map(|feature| self.score(reference, feature)))
	}

	/// Decides whether `self` more likely comes from `source1` or `source2`.
	///
	/// See `classifier::classify`.
	pub fn classify(&self, source1: &FeatureModel, source2: &FeatureModel) -> Classification {
		classifier::classify(self, source1, source2)
	}
}

impl fmt::Display for FeatureModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "text model name: {}", self.name)?;
		writeln!(f, "  number of words: {}", self.words.len())?;
		writeln!(f, "  number of word lengths: {}", self.word_lengths.len())?;
		writeln!(f, "  number of stems: {}", self.stems.len())?;
		writeln!(f, "  number of sentence lengths: {}", self.sentence_lengths.len())?;
		write!(f, "  number of commas: {}", self.commas.len())
	}
}
