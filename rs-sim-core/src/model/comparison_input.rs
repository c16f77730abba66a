use serde::Serialize;

use crate::error::{Result, SimilarityError};

/// Default window size in bytes.
pub const DEFAULT_N: usize = 3;

/// Default maximum number of bytes read from each document.
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 1_000_000;

/// Default number of fractional digits when displaying a score.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest accepted display precision.
pub const MAX_PRECISION: usize = 9;

/// Parameters of one comparison run.
///
/// # Responsibilities
/// - Hold the window size, the document size bound, the optional distinct
///   n-gram cap and the display precision
/// - Reject out-of-range values through its setters
///
/// # Invariants
/// - `n >= 1`
/// - `max_document_size >= 1`
/// - `max_distinct_ngrams` is `None` or `Some(k)` with `k >= 1`
/// - `precision <= MAX_PRECISION`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ComparisonInput {
	/// Window size in bytes.
	n: usize,

	/// Bytes read from each document; longer documents are truncated.
	max_document_size: usize,

	/// Hard cap on distinct n-grams per document, `None` for no cap.
	max_distinct_ngrams: Option<usize>,

	/// Fractional digits of the displayed score.
	precision: usize,
}

impl Default for ComparisonInput {
	fn default() -> Self {
		Self {
			n: DEFAULT_N,
			max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
			max_distinct_ngrams: None,
			precision: DEFAULT_PRECISION,
		}
	}
}

impl ComparisonInput {
	pub fn n(&self) -> usize {
		self.n
	}

	pub fn max_document_size(&self) -> usize {
		self.max_document_size
	}

	pub fn max_distinct_ngrams(&self) -> Option<usize> {
		self.max_distinct_ngrams
	}

	pub fn precision(&self) -> usize {
		self.precision
	}

	/// Effective parameters as one-line JSON, for logging.
	///
	/// # Errors
	/// Returns `Encode` if serialization fails.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Sets the window size.
	///
	/// # Errors
	/// Returns an error if `n == 0`.
	pub fn set_n(&mut self, n: usize) -> Result<()> {
		if n == 0 {
			return Err(SimilarityError::InvalidParameter("n must be >= 1".to_owned()));
		}
		self.n = n;
		Ok(())
	}

	/// Sets the number of bytes read from each document.
	///
	/// Truncation past this bound is lossy; the reader only logs it.
	///
	/// # Errors
	/// Returns an error if `size == 0`.
	pub fn set_max_document_size(&mut self, size: usize) -> Result<()> {
		if size == 0 {
			return Err(SimilarityError::InvalidParameter("Maximum document size must be >= 1".to_owned()));
		}
		self.max_document_size = size;
		Ok(())
	}

	/// Sets or clears the distinct n-gram cap.
	///
	/// # Errors
	/// Returns an error for `Some(0)`.
	pub fn set_max_distinct_ngrams(&mut self, limit: Option<usize>) -> Result<()> {
		if limit == Some(0) {
			return Err(SimilarityError::InvalidParameter("N-gram limit must be >= 1".to_owned()));
		}
		self.max_distinct_ngrams = limit;
		Ok(())
	}

	/// Sets the display precision.
	///
	/// # Errors
	/// Returns an error if `precision > MAX_PRECISION`.
	pub fn set_precision(&mut self, precision: usize) -> Result<()> {
		if precision > MAX_PRECISION {
			return Err(SimilarityError::InvalidParameter(format!(
				"Precision must be between 0 and {MAX_PRECISION}, got {precision}"
			)));
		}
		self.precision = precision;
		Ok(())
	}
}
