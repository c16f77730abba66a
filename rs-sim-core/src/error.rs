use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by configuration, bounded multiset construction and document I/O.
///
/// The similarity computation itself never fails: empty or short documents
/// simply score 0.0.
#[derive(Debug, Error)]
pub enum SimilarityError {
	/// A configuration value is out of range.
	#[error("Invalid parameter: {0}")]
	InvalidParameter(String),

	/// A document produced more distinct n-grams than the configured cap.
	#[error("Too many distinct n-grams: limit is {limit}")]
	CapacityExceeded { limit: usize },

	/// A source document could not be opened or read.
	#[error("Unable to read {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A report could not be encoded as JSON.
	#[error("Unable to encode report: {0}")]
	Encode(#[from] serde_json::Error),

	/// The destination file could not be created or written.
	#[error("Unable to write {}: {source}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

impl SimilarityError {
	/// Process exit code used by the command line front-end.
	///
	/// - `1` for I/O and encoding failures
	/// - `2` for invalid parameters and capacity overflow
	pub fn exit_code(&self) -> i32 {
		match self {
			SimilarityError::Read { .. } | SimilarityError::Write { .. } | SimilarityError::Encode(_) => 1,
			SimilarityError::InvalidParameter(_) | SimilarityError::CapacityExceeded { .. } => 2,
		}
	}
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
