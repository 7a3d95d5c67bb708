//! Error types for the trie module

use thiserror::Error;

/// Errors raised by trie operations that validate their key
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
	/// Multi-level wildcard used as a key segment other than the last one
	#[error(
		"Invalid key '{key}': multi-level wildcard '{wildcard}' at segment \
		 {position} is permitted only as the last segment"
	)]
	InvalidWildcardPosition {
		/// The configured multi-level wildcard token
		wildcard: String,
		/// The rejected key
		key: String,
		/// Zero-based index of the offending segment
		position: usize,
	},
}

impl TrieError {
	/// Creates a new InvalidWildcardPosition error
	pub fn invalid_wildcard_position(
		wildcard: impl Into<String>,
		key: impl Into<String>,
		position: usize,
	) -> Self {
		Self::InvalidWildcardPosition {
			wildcard: wildcard.into(),
			key: key.into(),
			position,
		}
	}
}

/// Errors raised while loading a [`TrieConfig`](super::TrieConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
	/// Configuration document could not be parsed
	#[error("Failed to parse trie configuration")]
	Parse {
		#[source]
		/// The underlying deserialization error
		source: serde_json::Error,
	},
}

impl From<serde_json::Error> for ConfigError {
	fn from(source: serde_json::Error) -> Self {
		ConfigError::Parse { source }
	}
}

/// Convenient Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		let err = TrieError::invalid_wildcard_position("#", "a#b", 1);
		assert_eq!(
			err.to_string(),
			"Invalid key 'a#b': multi-level wildcard '#' at segment 1 is \
			 permitted only as the last segment"
		);
	}

	#[test]
	fn test_config_error_keeps_source() {
		let source = serde_json::from_str::<serde_json::Value>("{")
			.expect_err("truncated document must fail");
		let err = ConfigError::from(source);
		assert!(std::error::Error::source(&err).is_some());
	}
}
