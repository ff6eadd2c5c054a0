//! Naive suffix-stripping stemmer.
//!
//! Rules are tested in a fixed order and the first match wins. The
//! order is part of the model: the "less" rule never fires (the plain
//! "s" rule always matches first) and the "ing" vowel test
//! compares the first two letters against the string "aeiou" as a
//! whole. Changing either would change every stored `stems` mapping.

/// Words ending in "s" that keep their final letter.
const S_EXCEPTIONS: [&str; 2] = ["was", "is"];

/// Words ending in "e" that keep their final letter.
const E_EXCEPTIONS: [&str; 8] = ["the", "are", "there", "here", "we", "he", "me", "she"];

/// Returns the approximate stem of a cleaned, lowercase word.
pub fn stem(word: &str) -> String {
	if word.ends_with("ier") {
		drop_last(word, 2)
	} else if word.ends_with("iers") {
		drop_last(word, 3)
	} else if word.ends_with("er") {
		drop_last(word, 2)
	} else if word.ends_with("ing") {
		stem_ing(word)
	} else if word.ends_with("ies") {
		drop_last(word, 2)
	} else if word.ends_with("es") {
		drop_last(word, 2)
	} else if word.ends_with('s') && !S_EXCEPTIONS.contains(&word) && !word.ends_with("'s") {
		drop_last(word, 1)
	} else if word.ends_with("ed") {
		drop_last(word, 2)
	} else if word.ends_with("less") {
		drop_last(word, 4)
	} else if word.ends_with('e') && !E_EXCEPTIONS.contains(&word) {
		drop_last(word, 1)
	} else if word.ends_with('y') && word != "they" {
		drop_last(word, 1) + "i"
	} else {
		word.to_owned()
	}
}

/// "ing" words: short words are kept, five-letter words are kept unless
/// their first two letters appear together inside "aeiou".
fn stem_ing(word: &str) -> String {
	let len = word.chars().count();
	if len < 5 {
		return word.to_owned();
	}

	let head: String = word.chars().take(2).collect();
	if len < 6 && !"aeiou".contains(head.as_str()) {
		return word.to_owned();
	}

	drop_last(word, 3)
}

/// Every caller drops an ASCII suffix it has just matched, so the cut
/// always lands on a char boundary.
fn drop_last(word: &str, n: usize) -> String {
	word[..word.len() - n].to_owned()
}
