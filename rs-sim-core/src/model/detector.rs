use std::path::Path;

use log::{debug, log_enabled, trace, Level};

use crate::error::Result;
use crate::io;
use super::comparison_input::ComparisonInput;
use super::ngram_multiset::NGramMultiset;
use super::normalizer::normalize;
use super::similarity::{compare, SimilarityReport};

/// High-level plagiarism detector.
///
/// # Responsibilities
/// - Run the normalize → n-gram → similarity pipeline on two documents
/// - Apply the window size and the optional distinct n-gram cap
/// - Read documents from disk within the configured size bound
///
/// The two documents are processed independently and nothing is kept
/// between calls.
#[derive(Clone, Debug, Default)]
pub struct Detector {
	input: ComparisonInput,
}

impl Detector {
	/// Creates a detector from validated parameters.
	pub fn new(input: ComparisonInput) -> Self {
		Self { input }
	}

	/// Parameters in use.
	pub fn input(&self) -> &ComparisonInput {
		&self.input
	}

	/// Normalizes a raw document and builds its n-gram multiset.
	///
	/// # Errors
	/// Returns `CapacityExceeded` if a cap is configured and the document
	/// holds more distinct n-grams.
	pub fn build_multiset(&self, raw: &[u8]) -> Result<NGramMultiset> {
		let normalized = normalize(raw);
		let multiset = match self.input.max_distinct_ngrams() {
			Some(limit) => NGramMultiset::build_capped(&normalized, self.input.n(), limit)?,
			None => NGramMultiset::build(&normalized, self.input.n())?,
		};
		debug!(
			"normalized {} -> {} bytes, {} n-grams ({} distinct)",
			raw.len(),
			normalized.len(),
			multiset.total_count(),
			multiset.distinct_len()
		);
		if log_enabled!(Level::Trace) {
			trace!("n-grams: {}", multiset.to_json()?);
		}
		Ok(multiset)
	}

	/// Compares two in-memory documents.
	///
	/// # Errors
	/// Only fails when a configured distinct n-gram cap is exceeded.
	pub fn compare(&self, original: &[u8], suspect: &[u8]) -> Result<SimilarityReport> {
		let original = self.build_multiset(original)?;
		let suspect = self.build_multiset(suspect)?;
		let report = compare(&original, &suspect);
		debug!("intersection {}, union {}, score {}", report.intersection, report.union, report.score);
		Ok(report)
	}

	/// Reads two documents (each bounded by `max_document_size`) and compares them.
	///
	/// # Errors
	/// Returns `Read` if either file cannot be read, or `CapacityExceeded`
	/// as in [`compare`](Self::compare).
	pub fn compare_files<PO, PS>(&self, original: PO, suspect: PS) -> Result<SimilarityReport>
	where
		PO: AsRef<Path>,
		PS: AsRef<Path>,
	{
		let original = io::read_document(original, self.input.max_document_size())?;
		debug!("original: {} bytes", original.len());
		let suspect = io::read_document(suspect, self.input.max_document_size())?;
		debug!("suspect: {} bytes", suspect.len());
		self.compare(&original, &suspect)
	}
}
