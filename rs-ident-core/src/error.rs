use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while ingesting text or moving models to and from disk.
///
/// Scoring never fails: an empty reference mapping is a defined score,
/// not an error.
#[derive(Debug, Error)]
pub enum Error {
	/// A text source or a persisted record could not be read or written.
	#[error("I/O error on {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A frequency mapping could not be serialized.
	#[error("failed to encode record {record}: {source}")]
	Encode {
		record: String,
		#[source]
		source: postcard::Error,
	},

	/// A persisted record exists but does not hold a valid mapping.
	#[error("failed to decode record {record}: {source}")]
	Decode {
		record: String,
		#[source]
		source: postcard::Error,
	},

	/// A persisted record decodes but is not the expected mapping.
	#[error("malformed record {record}: {reason}")]
	Malformed { record: String, reason: String },
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
