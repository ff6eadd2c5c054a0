/// Punctuation removed before splitting. ASCII only.
pub const STRIPPED_PUNCTUATION: [char; 8] = ['.', ',', '?', '"', '\'', '!', ';', ':'];

/// Cleans a block of text and returns its words.
///
/// - Removes every character of `STRIPPED_PUNCTUATION`
/// - Splits on runs of whitespace
/// - Lowercases each word
///
/// Empty or whitespace-only input yields an empty vector.
pub fn clean_text(text: &str) -> Vec<String> {
	let stripped: String = text.chars().filter(|c| !STRIPPED_PUNCTUATION.contains(c)).collect();
	stripped.split_whitespace().map(str::to_lowercase).collect()
}
