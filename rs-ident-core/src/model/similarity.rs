use std::collections::BTreeMap;

/// Score returned when the reference mapping holds no observations.
pub const EMPTY_REFERENCE_SCORE: f64 = -50.0;

/// Count assumed for query keys the reference never saw.
pub const UNSEEN_PSEUDO_COUNT: f64 = 0.5;

/// Log-likelihood of `query` under the empirical distribution of `reference`.
///
/// Each query key contributes `count * ln(p)` where `p` is the key's
/// share of the reference total, or `UNSEEN_PSEUDO_COUNT / total` when the
/// reference lacks the key.
///
/// # Notes
/// - The result is always <= 0; closer to 0 means more similar.
/// - Not symmetric: `reference` supplies the distribution, `query` the counts.
/// - An empty reference yields `EMPTY_REFERENCE_SCORE` whatever the query.
pub fn compare<K: Ord>(reference: &BTreeMap<K, u64>, query: &BTreeMap<K, u64>) -> f64 {
	if reference.is_empty() {
		return EMPTY_REFERENCE_SCORE;
	}

	let total = reference.values().sum::<u64>() as f64;
	let unseen = (UNSEEN_PSEUDO_COUNT / total).ln();

	query
		.iter()
		.map(|(key, &count)| {
			let log_p = match reference.get(key) {
				Some(&seen) => (seen as f64 / total).ln(),
				None => unseen,
			};
			count as f64 * log_p
		})
		.sum()
}
