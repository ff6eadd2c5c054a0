use std::fmt;

/// One of the five frequency channels of a `FeatureModel`.
///
/// The declaration order is the scoring order: `ALL`, the persisted
/// record names and the classifier weights are all indexed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
	Words,
	WordLengths,
	Stems,
	SentenceLengths,
	Commas,
}

impl Feature {
	/// All channels, in scoring order.
	pub const ALL: [Feature; 5] = [
		Feature::Words,
		Feature::WordLengths,
		Feature::Stems,
		Feature::SentenceLengths,
		Feature::Commas,
	];

	/// Suffix of the persisted record (`<model>_<record_name>`).
	pub fn record_name(self) -> &'static str {
		match self {
			Feature::Words => "words",
			Feature::WordLengths => "word_lengths",
			Feature::Stems => "stems",
			Feature::SentenceLengths => "sentence_lengths",
			Feature::Commas => "words_before_comma",
		}
	}

	/// Weight of this channel in the classifier's weighted sum.
	pub fn weight(self) -> f64 {
		match self {
			Feature::Words => 10.0,
			Feature::WordLengths => 3.0,
			Feature::Stems => 5.0,
			Feature::SentenceLengths => 7.0,
			Feature::Commas => 2.0,
		}
	}
}

impl fmt::Display for Feature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Feature::Words => "words",
			Feature::WordLengths => "word lengths",
			Feature::Stems => "stems",
			Feature::SentenceLengths => "sentence lengths",
			Feature::Commas => "commas",
		};
		f.write_str(label)
	}
}

#[cfg(test)]
mod tests {
	use super::Feature;

	#[test]
	fn weights_follow_scoring_order() {
		let weights: Vec<f64> = Feature::ALL.iter().map(|f| f.weight()).collect();
		assert_eq!(weights, vec![10.0, 3.0, 5.0, 7.0, 2.0]);
	}

	#[test]
	fn comma_record_keeps_historical_name() {
		assert_eq!(Feature::Commas.record_name(), "words_before_comma");
		assert_eq!(Feature::Commas.to_string(), "commas");
	}
}
