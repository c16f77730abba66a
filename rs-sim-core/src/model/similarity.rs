//! Multiset Jaccard similarity between two n-gram multisets.
//!
//! - intersection: sum over shared windows of `min(count_a, count_b)`
//! - union: `total_a + total_b - intersection`
//! - similarity: `intersection / union`, or 0.0 when the union is empty

use serde::{Deserialize, Serialize};

use crate::error::Result;
use super::ngram_multiset::NGramMultiset;

/// Sum of per-window minimum counts.
///
/// Iterates the multiset with fewer distinct windows and probes the other,
/// so the cost is linear in the smaller key set.
pub fn intersection_size(a: &NGramMultiset, b: &NGramMultiset) -> usize {
	let (small, large) = if a.distinct_len() <= b.distinct_len() { (a, b) } else { (b, a) };
	small
		.iter()
		.map(|(key, count)| count.min(large.count(key)))
		.sum()
}

/// Sum of all counts of both multisets, shared windows counted once.
pub fn union_size(a: &NGramMultiset, b: &NGramMultiset) -> usize {
	a.total_count() + b.total_count() - intersection_size(a, b)
}

/// Jaccard ratio in `[0.0, 1.0]`, full precision.
///
/// Returns 0.0 when both multisets are empty.
pub fn similarity(a: &NGramMultiset, b: &NGramMultiset) -> f64 {
	compare(a, b).score
}

/// Computes every figure of a comparison in a single intersection pass.
pub fn compare(original: &NGramMultiset, suspect: &NGramMultiset) -> SimilarityReport {
	let intersection = intersection_size(original, suspect);
	let union = original.total_count() + suspect.total_count() - intersection;
	let score = if union == 0 { 0.0 } else { intersection as f64 / union as f64 };

	SimilarityReport {
		intersection,
		union,
		total_original: original.total_count(),
		total_suspect: suspect.total_count(),
		distinct_original: original.distinct_len(),
		distinct_suspect: suspect.distinct_len(),
		score,
	}
}

/// Outcome of comparing two documents.
///
/// `score` keeps full precision; use [`format_score`] for display.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimilarityReport {
	/// Shared windows, counted with multiplicity.
	pub intersection: usize,
	/// Windows of both documents, shared ones counted once.
	pub union: usize,
	pub total_original: usize,
	pub total_suspect: usize,
	pub distinct_original: usize,
	pub distinct_suspect: usize,
	/// `intersection / union`, 0.0 when `union == 0`.
	pub score: f64,
}

impl SimilarityReport {
	/// Pretty-printed JSON with a trailing newline.
	///
	/// # Errors
	/// Returns `Encode` if serialization fails.
	pub fn to_json(&self) -> Result<String> {
		let mut json = serde_json::to_string_pretty(self)?;
		json.push('\n');
		Ok(json)
	}

	/// Score in percent, for human-readable summaries.
	pub fn percent(&self) -> f64 {
		self.score * 100.0
	}
}

/// Formats a score with `precision` fractional digits and a trailing newline.
///
/// Example: `format_score(1.0 / 7.0, 2)` → `"0.14\n"`
pub fn format_score(score: f64, precision: usize) -> String {
	format!("{score:.precision$}\n")
}
