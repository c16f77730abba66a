use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasherDefault, Hasher};

use serde::Serialize;

use crate::error::{Result, SimilarityError};

/// DJB2 string hasher (`h = h * 33 + byte`, seeded with 5381).
///
/// Deterministic across runs and processes, which keeps diagnostic dumps
/// stable. Wrapping arithmetic on 64 bits; the table reduction is left to
/// `HashMap`.
#[derive(Clone, Copy, Debug)]
pub struct Djb2Hasher {
	hash: u64,
}

impl Default for Djb2Hasher {
	fn default() -> Self {
		Self { hash: 5381 }
	}
}

impl Hasher for Djb2Hasher {
	fn write(&mut self, bytes: &[u8]) {
		for &byte in bytes {
			self.hash = self.hash.wrapping_mul(33).wrapping_add(u64::from(byte));
		}
	}

	fn finish(&self) -> u64 {
		self.hash
	}
}

/// `BuildHasher` plugging [`Djb2Hasher`] into `HashMap`.
pub type Djb2BuildHasher = BuildHasherDefault<Djb2Hasher>;

/// Multiset of fixed-size byte windows taken from a normalized document.
///
/// Each distinct window of `n` bytes is stored once, together with the
/// number of offsets at which it occurs. Windows are raw bytes: a
/// multi-byte encoded character may be split between two windows.
///
/// # Responsibilities
/// - Slide a window of `n` bytes over a buffer and count every position
/// - Optionally refuse to grow past a number of distinct windows
/// - Answer count lookups for the similarity computation
///
/// # Invariants
/// - `n` is always >= 1
/// - Every key is exactly `n` bytes long and has a count >= 1
/// - `total` equals the sum of all counts, i.e. `len - n + 1` windows for a
///   buffer of `len >= n` bytes, 0 otherwise
/// - Keys are owned copies; the multiset never borrows the source buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NGramMultiset {
	/// Window size in bytes.
	n: usize,

	/// Occurrence count of each distinct window.
	counts: HashMap<Box<[u8]>, usize, Djb2BuildHasher>,

	/// Number of windows added, all keys included.
	total: usize,
}

impl NGramMultiset {
	/// Creates an empty multiset of window size `n`.
	///
	/// # Errors
	/// Returns an error if `n == 0`.
	pub fn new(n: usize) -> Result<Self> {
		if n == 0 {
			return Err(SimilarityError::InvalidParameter("n must be >= 1".to_owned()));
		}
		Ok(Self { n, counts: HashMap::default(), total: 0 })
	}

	/// Builds the multiset of every `n`-byte window of `text`.
	///
	/// Windows start at every offset from 0 to `text.len() - n` inclusive.
	/// A text shorter than `n` gives an empty multiset.
	///
	/// # Errors
	/// Returns an error if `n == 0`.
	pub fn build(text: &[u8], n: usize) -> Result<Self> {
		let mut multiset = Self::new(n)?;
		for window in text.windows(n) {
			multiset.add_window(window);
		}
		Ok(multiset)
	}

	/// Builds the multiset like [`build`](Self::build), with at most
	/// `max_distinct` distinct windows.
	///
	/// Windows already present are always counted. The first window that
	/// would introduce one distinct key too many aborts construction; nothing
	/// is evicted and no window is silently skipped.
	///
	/// # Errors
	/// - `InvalidParameter` if `n == 0`
	/// - `CapacityExceeded` if `text` holds more than `max_distinct` distinct windows
	pub fn build_capped(text: &[u8], n: usize, max_distinct: usize) -> Result<Self> {
		let mut multiset = Self::new(n)?;
		for window in text.windows(n) {
			if !multiset.counts.contains_key(window) && multiset.counts.len() >= max_distinct {
				return Err(SimilarityError::CapacityExceeded { limit: max_distinct });
			}
			multiset.add_window(window);
		}
		Ok(multiset)
	}

	/// Records one occurrence of `window`.
	///
	/// The key is only copied on first insertion.
	fn add_window(&mut self, window: &[u8]) {
		debug_assert_eq!(window.len(), self.n);
		match self.counts.get_mut(window) {
			Some(count) => *count += 1,
			None => {
				self.counts.insert(Box::from(window), 1);
			}
		}
		self.total += 1;
	}

	/// Window size in bytes.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Number of occurrences of `key`, 0 if absent.
	pub fn count(&self, key: &[u8]) -> usize {
		self.counts.get(key).copied().unwrap_or(0)
	}

	/// Number of distinct windows.
	pub fn distinct_len(&self) -> usize {
		self.counts.len()
	}

	/// Sum of all counts.
	pub fn total_count(&self) -> usize {
		self.total
	}

	pub fn is_empty(&self) -> bool {
		self.total == 0
	}

	/// Iterates over `(window, count)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> {
		self.counts.iter().map(|(key, count)| (key.as_ref(), *count))
	}

	/// Diagnostic JSON dump of the multiset.
	///
	/// Windows are written with `escape_ascii`, so printable ASCII stays
	/// readable and every other byte becomes `\xNN`. The escaping is
	/// injective: two distinct windows never share a dump key. Keys are
	/// sorted so the dump is stable across runs.
	///
	/// # Errors
	/// Returns `Encode` if serialization fails.
	pub fn to_json(&self) -> Result<String> {
		let dump = MultisetDump {
			n: self.n,
			total: self.total,
			distinct: self.counts.len(),
			counts: self
				.counts
				.iter()
				.map(|(key, count)| (key.escape_ascii().to_string(), *count))
				.collect(),
		};
		Ok(serde_json::to_string(&dump)?)
	}
}

/// String-keyed view of a multiset, as written by [`NGramMultiset::to_json`].
#[derive(Serialize)]
struct MultisetDump {
	n: usize,
	total: usize,
	distinct: usize,
	counts: BTreeMap<String, usize>,
}
