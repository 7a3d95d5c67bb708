//! # Topic Trie
//!
//! A hierarchical key-value index over delimiter-separated keys, with
//! support for single-level and multi-level wildcard tokens in both the
//! stored keys and the match patterns.
//!
//! ## Features
//!
//! - **Exact lookup**: [`TopicTrie::retrieve`] walks stored segments verbatim
//! - **Wildcard matching**: [`TopicTrie::find_matches`] returns every stored
//!   entry compatible with a pattern, including entries that were themselves
//!   stored with wildcards
//! - **Pruning deletes**: [`TopicTrie::delete`] removes nodes that no longer
//!   lead to a value
//! - **Configurable tokens**: wildcard tokens and the delimiter are chosen at
//!   construction via [`TrieConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use topic_trie::{TopicTrie, TrieConfig};
//!
//! let mut trie = TopicTrie::new(TrieConfig::mqtt());
//! trie.insert("sensors/kitchen/temperature", 21)?;
//! trie.insert("sensors/+/humidity", 40)?;
//! trie.insert("sensors/#", 0)?;
//!
//! assert_eq!(trie.retrieve("sensors/kitchen/temperature")?, Some(&21));
//!
//! // Stored `+` and `#` entries answer literal queries too
//! let matches = trie.find_matches("sensors/kitchen/humidity");
//! assert_eq!(matches.len(), 2);
//!
//! assert!(trie.delete("sensors/#"));
//! # Ok::<(), topic_trie::TrieError>(())
//! ```
//!
//! ## Concurrency
//!
//! The trie has no internal synchronization. Mutating operations take
//! `&mut self`; share a trie between threads behind your own lock.

#![warn(missing_docs)]

pub mod trie;

pub use trie::{
	ConfigError, KeyValue, TopicTrie, TrieConfig, TrieError, TrieResult,
};

/// Prelude module for convenient imports
///
/// ```rust
/// use topic_trie::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{KeyValue, TopicTrie, TrieConfig, TrieError, TrieResult};
}
