//! Topic trie module
//!
//! This module provides the trie itself, its configuration, key splitting
//! and the error types shared by all trie operations.

// Submodules
pub mod config;
pub mod error;
pub mod key_path;
pub mod topic_trie;
pub mod trie_node;


// Re-export commonly used types for convenience
pub use config::TrieConfig;
pub use error::{ConfigError, TrieError, TrieResult};
pub use key_path::KeyPath;
pub use topic_trie::{KeyValue, TopicTrie};
