//! Configuration for trie construction

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Wildcard tokens and segment delimiter of a [`TopicTrie`](super::TopicTrie)
///
/// Every option is independent; no cross-option validation is performed, so
/// a wildcard token equal to the separator is accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
	/// Token matching exactly one segment (disabled when `None`)
	pub single_level_wildcard: Option<ArcStr>,
	/// Token matching the remainder of a key (disabled when `None`)
	pub multi_level_wildcard: Option<ArcStr>,
	/// Segment delimiter; empty splits the key per character
	pub separator: ArcStr,
}

impl TrieConfig {
	/// Create config with both wildcards disabled and an empty separator
	pub fn new() -> Self {
		Self::default()
	}

	/// MQTT-style config: `+`, `#` and `/`
	pub fn mqtt() -> Self {
		Self::new()
			.with_single_level_wildcard("+")
			.with_multi_level_wildcard("#")
			.with_separator("/")
	}

	/// Enable the single-level wildcard with the given token
	pub fn with_single_level_wildcard(mut self, token: impl Into<ArcStr>) -> Self {
		self.single_level_wildcard = Some(token.into());
		self
	}

	/// Enable the multi-level wildcard with the given token
	pub fn with_multi_level_wildcard(mut self, token: impl Into<ArcStr>) -> Self {
		self.multi_level_wildcard = Some(token.into());
		self
	}

	/// Set the segment separator
	pub fn with_separator(mut self, separator: impl Into<ArcStr>) -> Self {
		self.separator = separator.into();
		self
	}

	/// Parse configuration from a JSON document
	///
	/// Missing fields fall back to their defaults:
	///
	/// ```rust
	/// use topic_trie::TrieConfig;
	///
	/// let config = TrieConfig::from_json_str(r#"{ "separator": "." }"#)?;
	/// assert_eq!(config.separator, ".");
	/// assert!(config.single_level_wildcard.is_none());
	/// # Ok::<(), topic_trie::ConfigError>(())
	/// ```
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	pub(crate) fn is_single_level_wildcard(&self, segment: &str) -> bool {
		self.single_level_wildcard
			.as_deref()
			.is_some_and(|token| token == segment)
	}

	pub(crate) fn is_multi_level_wildcard(&self, segment: &str) -> bool {
		self.multi_level_wildcard
			.as_deref()
			.is_some_and(|token| token == segment)
	}
}
