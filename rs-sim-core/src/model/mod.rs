//! Top-level module for the similarity pipeline.
//!
//! - Byte-level normalization (`normalizer`)
//! - Fixed-size window multisets (`NGramMultiset`)
//! - Multiset Jaccard similarity (`similarity`)
//! - Run parameters (`ComparisonInput`)
//! - A high-level interface over the whole pipeline (`Detector`)

/// High-level interface comparing two documents, in memory or on disk.
mod detector;

/// Validated parameters of a comparison (window size, bounds, precision).
mod comparison_input;

/// Multiset of `n`-byte windows with occurrence counts.
///
/// Uses a deterministic DJB2 hasher.
pub mod ngram_multiset;

/// ASCII case folding and punctuation filtering over raw bytes.
pub mod normalizer;

/// Intersection, union and Jaccard ratio of two multisets, plus display helpers.
pub mod similarity;

pub use comparison_input::{ComparisonInput, DEFAULT_MAX_DOCUMENT_SIZE, DEFAULT_N, DEFAULT_PRECISION, MAX_PRECISION};
pub use detector::Detector;
