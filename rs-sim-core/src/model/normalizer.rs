//! Byte-level text normalization.
//!
//! Documents are treated as opaque byte sequences. ASCII letters are
//! lowercased, ASCII alphanumerics and the space character are kept, and
//! every byte with the high bit set is kept untouched so that multi-byte
//! encoded characters survive. Everything else (punctuation, tabs, newlines,
//! control bytes) is dropped.

/// Lowercases an ASCII uppercase letter, leaves every other byte unchanged.
pub fn fold_case(byte: u8) -> u8 {
	if byte.is_ascii_uppercase() { byte + 32 } else { byte }
}

/// Returns `true` if the byte survives filtering.
pub fn is_content_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b' ' || byte & 0x80 != 0
}

/// Returns a normalized copy of `text`.
pub fn normalize(text: &[u8]) -> Vec<u8> {
	text.iter()
		.map(|&b| fold_case(b))
		.filter(|&b| is_content_byte(b))
		.collect()
}

/// Normalizes `text` in place.
///
/// Kept bytes are compacted towards the front with a write cursor and the
/// buffer is truncated to the kept length. Produces the same bytes as
/// [`normalize`].
pub fn normalize_in_place(text: &mut Vec<u8>) {
	let mut write = 0;
	for read in 0..text.len() {
		let byte = fold_case(text[read]);
		if is_content_byte(byte) {
			text[write] = byte;
			write += 1;
		}
	}
	text.truncate(write);
}
