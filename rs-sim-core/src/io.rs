use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use log::warn;

use crate::error::{Result, SimilarityError};

/// Reads at most `max_size` bytes of a document.
///
/// - Reads raw bytes, no UTF-8 validation
/// - Anything past `max_size` is dropped (lossy) and a warning is logged
///
/// # Errors
/// Returns `SimilarityError::Read` if the file cannot be opened or read.
pub fn read_document<P: AsRef<Path>>(path: P, max_size: usize) -> Result<Vec<u8>> {
	let path = path.as_ref();
	let to_read_error = |source: std::io::Error| SimilarityError::Read { path: path.to_path_buf(), source };

	let file = File::open(path).map_err(to_read_error)?;

	// One extra byte tells a file of exactly `max_size` apart from a longer one
	let mut contents = Vec::new();
	file.take((max_size as u64).saturating_add(1))
		.read_to_end(&mut contents)
		.map_err(to_read_error)?;

	if contents.len() > max_size {
		contents.truncate(max_size);
		warn!("{} is larger than {} bytes, extra content ignored", path.display(), max_size);
	}

	Ok(contents)
}

/// Writes `text` to `path`, creating or overwriting the file.
///
/// # Errors
/// Returns `SimilarityError::Write` if the destination cannot be written.
pub fn write_score<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
	let path = path.as_ref();
	fs::write(path, text).map_err(|source| SimilarityError::Write { path: path.to_path_buf(), source })
}
