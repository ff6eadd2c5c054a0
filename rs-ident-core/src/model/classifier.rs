use std::fmt;

use log::info;

use super::feature::Feature;
use super::feature_model::FeatureModel;

/// The five channel scores of one model against one reference.
///
/// Indexed in `Feature::ALL` order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityScores([f64; 5]);

impl SimilarityScores {
	pub fn new(scores: [f64; 5]) -> Self {
		Self(scores)
	}

	/// Returns the score of a single channel.
	pub fn get(&self, feature: Feature) -> f64 {
		let index = Feature::ALL.iter().position(|f| *f == feature).unwrap_or_default();
		self.0[index]
	}

	pub fn as_array(&self) -> &[f64; 5] {
		&self.0
	}

	/// Combines the channel scores with the fixed channel weights.
	pub fn weighted_sum(&self) -> f64 {
		Feature::ALL
			.iter()
			.zip(self.0)
			.map(|(feature, score)| feature.weight() * score)
			.sum()
	}
}

/// Scores of the unknown model against one candidate source.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateScores {
	name: String,
	scores: SimilarityScores,
	weighted_sum: f64,
}

impl CandidateScores {
	fn new(unknown: &FeatureModel, candidate: &FeatureModel) -> Self {
		let scores = unknown.similarity_scores(candidate);
		Self { name: candidate.name().to_owned(), scores, weighted_sum: scores.weighted_sum() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn scores(&self) -> &SimilarityScores {
		&self.scores
	}

	pub fn weighted_sum(&self) -> f64 {
		self.weighted_sum
	}
}

/// Outcome of comparing an unknown model against two candidate sources.
///
/// Keeps every channel score so callers can report how the verdict was reached.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
	unknown: String,
	candidates: [CandidateScores; 2],
	predicted: usize,
}

impl Classification {
	/// Name of the model being attributed.
	pub fn unknown(&self) -> &str {
		&self.unknown
	}

	/// Both candidates, in the order they were given to `classify`.
	pub fn candidates(&self) -> &[CandidateScores; 2] {
		&self.candidates
	}

	/// The candidate judged the more probable source.
	pub fn predicted(&self) -> &CandidateScores {
		&self.candidates[self.predicted]
	}

	pub fn predicted_name(&self) -> &str {
		&self.predicted().name
	}
}

impl fmt::Display for Classification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for candidate in &self.candidates {
			writeln!(f, "scores for {} (weighted {:.3}):", candidate.name, candidate.weighted_sum)?;
			for feature in Feature::ALL {
				writeln!(f, "  {feature}: {:.3}", candidate.scores.get(feature))?;
			}
		}
		write!(f, "{} is more likely to have come from {}", self.unknown, self.predicted_name())
	}
}

/// Decides which of two sources more likely produced `unknown`.
///
/// `unknown` is scored as the query against each source as the reference,
/// channel by channel, and each source's scores are folded into a weighted
/// sum. `source1` wins only with a strictly greater sum: ties go to `source2`.
pub fn classify(unknown: &FeatureModel, source1: &FeatureModel, source2: &FeatureModel) -> Classification {
	let first = CandidateScores::new(unknown, source1);
	let second = CandidateScores::new(unknown, source2);

	info!("scores for {}: {:?}", first.name, first.scores.as_array());
	info!("scores for {}: {:?}", second.name, second.scores.as_array());

	let predicted = if first.weighted_sum > second.weighted_sum { 0 } else { 1 };
	let classification = Classification { unknown: unknown.name().to_owned(), candidates: [first, second], predicted };

	info!(
		"{} is more likely to have come from {}",
		classification.unknown,
		classification.predicted_name()
	);
	classification
}
