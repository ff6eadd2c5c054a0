use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Reads a whole text file into a single `String`.
///
/// - Reads the entire file into memory
/// - Invalid UTF-8 sequences are dropped, not replaced
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let bytes = fs::read(path).map_err(|source| Error::Io { path: path.to_owned(), source })?;

	match String::from_utf8(bytes) {
		Ok(text) => Ok(text),
		Err(e) => {
			warn!("{} is not valid UTF-8, skipping undecodable bytes", path.display());
			Ok(e.as_bytes().utf8_chunks().map(|chunk| chunk.valid()).collect())
		}
	}
}

/// Builds the path of a persisted record.
///
/// Example:
/// `models` + `"shrek"` + `"words"` → `models/shrek_words`
pub(crate) fn record_path<P: AsRef<Path>>(dir: P, model_name: &str, feature_name: &str) -> PathBuf {
	dir.as_ref().join(format!("{model_name}_{feature_name}"))
}

/// On-disk layout of a record: the channel it belongs to, then its entries.
///
/// The channel tag lets a reader reject a record copied from another channel.
#[derive(Serialize)]
struct RecordRef<'a, T> {
	channel: &'a str,
	entries: &'a T,
}

#[derive(Deserialize)]
struct Record<T> {
	channel: String,
	entries: T,
}

/// Serializes `value` tagged with `channel` and overwrites the file at `path`.
pub(crate) fn write_record<T: Serialize>(path: &Path, channel: &str, value: &T) -> Result<()> {
	let record = RecordRef { channel, entries: value };
	let bytes = postcard::to_stdvec(&record).map_err(|source| Error::Encode { record: record_name(path), source })?;
	fs::write(path, &bytes).map_err(|source| Error::Io { path: path.to_owned(), source })?;
	debug!("wrote {} bytes to {}", bytes.len(), path.display());
	Ok(())
}

/// Reads the file at `path` and deserializes the entries of `channel`.
///
/// A record that cannot be decoded is an error, never an empty value:
/// - `Error::Decode` if postcard rejects the bytes
/// - `Error::Malformed` if the channel tag differs or bytes trail the record
pub(crate) fn read_record<T: DeserializeOwned>(path: &Path, channel: &str) -> Result<T> {
	let bytes = fs::read(path).map_err(|source| Error::Io { path: path.to_owned(), source })?;
	let (record, rest): (Record<T>, &[u8]) =
		postcard::take_from_bytes(&bytes).map_err(|source| Error::Decode { record: record_name(path), source })?;

	if record.channel != channel {
		return Err(Error::Malformed {
			record: record_name(path),
			reason: format!("holds channel {}, expected {channel}", record.channel),
		});
	}
	if !rest.is_empty() {
		return Err(Error::Malformed {
			record: record_name(path),
			reason: format!("{} trailing bytes", rest.len()),
		});
	}

	Ok(record.entries)
}

fn record_name(path: &Path) -> String {
	path.file_name()
		.map(|name| name.to_string_lossy().to_string())
		.unwrap_or_else(|| path.display().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<String>> {
	let dir = dir.as_ref();
	let io_err = |source| Error::Io { path: dir.to_owned(), source };
	let mut files = Vec::new();

	for entry in fs::read_dir(dir).map_err(io_err)? {
		let path = entry.map_err(io_err)?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
