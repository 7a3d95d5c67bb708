//! Splitting keys into segments

use std::fmt::{self, Display};
use std::slice::Iter;

use smallvec::SmallVec;

use super::config::TrieConfig;
use super::error::{TrieError, TrieResult};

/// A key split into borrowed segments
///
/// With a non-empty separator the key is split on every occurrence of it, so
/// the empty key is a single empty segment. With an empty separator every
/// character is a segment and the empty key has no segments at all, which
/// addresses the root node itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath<'a> {
	key: &'a str,
	segments: SmallVec<[&'a str; 8]>,
}

impl<'a> KeyPath<'a> {
	/// Splits `key` on `separator`.
	pub fn split(key: &'a str, separator: &str) -> Self {
		let segments = if separator.is_empty() {
			key.char_indices()
				.map(|(start, ch)| &key[start .. start + ch.len_utf8()])
				.collect()
		} else {
			key.split(separator).collect()
		};
		Self { key, segments }
	}

	/// Splits `key` and rejects a multi-level wildcard anywhere but last.
	///
	/// Used by the operations that address a single stored key (insert and
	/// retrieve); patterns passed to matching are split without this check.
	pub fn parse_exact(key: &'a str, config: &TrieConfig) -> TrieResult<Self> {
		let path = Self::split(key, &config.separator);
		path.validate_multi_level_position(config)?;
		Ok(path)
	}

	fn validate_multi_level_position(&self, config: &TrieConfig) -> TrieResult<()> {
		let Some(wildcard) = config.multi_level_wildcard.as_deref() else {
			return Ok(());
		};
		let last = self.segments.len().saturating_sub(1);
		match self
			.segments
			.iter()
			.position(|segment| *segment == wildcard)
		{
			| Some(position) if position != last => {
				Err(TrieError::invalid_wildcard_position(
					wildcard, self.key, position,
				))
			}
			| _ => Ok(()),
		}
	}

	/// Returns the original key.
	pub fn key(&self) -> &'a str {
		self.key
	}

	/// Returns number of segments.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns true if the key has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Returns segment at `index`, if any.
	pub fn get(&self, index: usize) -> Option<&'a str> {
		self.segments.get(index).copied()
	}

	/// Returns iterator over segments.
	pub fn iter(&self) -> Iter<'_, &'a str> {
		self.segments.iter()
	}

	/// Returns segments as slice.
	pub fn slice(&self) -> &[&'a str] {
		&self.segments
	}
}

impl Display for KeyPath<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.key)
	}
}

/// Appends `segment` to a reconstructed key.
///
/// `depth` is the depth of the node `key` belongs to; the root (depth 0)
/// contributes no text, so no separator is written before its first child.
pub(crate) fn join_segment(
	key: &str,
	depth: usize,
	separator: &str,
	segment: &str,
) -> String {
	if depth == 0 {
		return segment.to_string();
	}
	let mut joined =
		String::with_capacity(key.len() + separator.len() + segment.len());
	joined.push_str(key);
	joined.push_str(separator);
	joined.push_str(segment);
	joined
}
