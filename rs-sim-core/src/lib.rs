//! N-gram-based text similarity library.
//!
//! This crate provides the building blocks of a plagiarism checker:
//! - Byte-level text normalization (ASCII case folding, punctuation filtering)
//! - Character-window n-gram multisets with exact occurrence counts
//! - Multiset Jaccard similarity between two documents
//! - A high-level `Detector` tying the pipeline together
//!
//! The core is pure and infallible on in-memory buffers. Only configuration,
//! the optional distinct n-gram cap and file I/O can fail.
//!
//! The three pipeline stages are public modules under `model`. Everything
//! else is reached through `Detector` and the re-exports below.

/// Normalization, n-gram multisets, similarity and the high-level detector.
pub mod model;

/// Bounded document reading and score writing.
///
/// Not exposed, except for `write_score`
pub(crate) mod io;

/// Crate error type.
pub mod error;

pub use error::{Result, SimilarityError};
pub use io::write_score;
pub use model::{ComparisonInput, Detector};
pub use model::similarity::{format_score, SimilarityReport};
