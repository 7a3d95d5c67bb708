//! Behavioural tests for the public `TopicTrie` API.
//!
//! Run with `RUST_LOG=topic_trie=trace cargo test -- --nocapture` to see the
//! trie's trace output.

use std::collections::HashSet;

use proptest::prelude::*;
use topic_trie::prelude::*;

fn setup_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

fn mqtt_trie() -> TopicTrie<&'static str> {
	setup_tracing();
	TopicTrie::new(TrieConfig::mqtt())
}

fn char_trie() -> TopicTrie<&'static str> {
	setup_tracing();
	TopicTrie::new(
		TrieConfig::new()
			.with_single_level_wildcard("+")
			.with_multi_level_wildcard("#"),
	)
}

fn keys(matches: Vec<KeyValue<&&str>>) -> HashSet<String> {
	matches.into_iter().map(|kv| kv.key).collect()
}

fn key_set<const N: usize>(keys: [&str; N]) -> HashSet<String> {
	keys.into_iter().map(str::to_string).collect()
}

#[test]
fn test_initialization() {
	let trie = TopicTrie::<u32>::default();
	assert!(trie.is_empty());
	assert_eq!(trie.config(), &TrieConfig::default());

	let trie = mqtt_trie();
	assert_eq!(trie.config().separator, "/");
}

#[test]
fn test_multi_level_match() {
	let mut trie = mqtt_trie();
	trie.insert("a/b/c/d", "value1").unwrap();
	trie.insert("a/b/c/f", "value2").unwrap();
	trie.insert("a/b/d/#", "value3").unwrap();

	assert_eq!(keys(trie.find_matches("a/b/c/d")), key_set(["a/b/c/d"]));
	assert_eq!(
		keys(trie.find_matches("a/b/+/#")),
		key_set(["a/b/c/d", "a/b/c/f", "a/b/d/#"])
	);
}

#[test]
fn test_single_level_match_breadth() {
	let mut trie = mqtt_trie();
	trie.insert("a/b/c/d", "value1").unwrap();
	trie.insert("a/b/c/f", "value2").unwrap();
	let matches = trie.find_matches("a/b/c/+");
	assert_eq!(matches.len(), 2);
	assert_eq!(keys(matches), key_set(["a/b/c/d", "a/b/c/f"]));

	trie.insert("a/+/c/d", "value3").unwrap();
	let matches = trie.find_matches("a/b/+/d");
	assert_eq!(matches.len(), 2);
	assert_eq!(keys(matches), key_set(["a/b/c/d", "a/+/c/d"]));
}

#[test]
fn test_single_level_match_reaches_stored_multi_level() {
	let mut trie = mqtt_trie();
	trie.insert("a/b/c/d", "value1").unwrap();
	trie.insert("a/b/c/f", "value2").unwrap();
	trie.insert("a/b/d/#", "value3").unwrap();

	assert_eq!(
		keys(trie.find_matches("a/b/c/+")),
		key_set(["a/b/c/d", "a/b/c/f"])
	);
	assert_eq!(
		keys(trie.find_matches("a/b/+/d")),
		key_set(["a/b/c/d", "a/b/d/#"])
	);

	trie.insert("a/+/c/d", "value4").unwrap();
	let matches = trie.find_matches("a/b/+/d");
	assert_eq!(matches.len(), 3);
	assert_eq!(keys(matches), key_set(["a/b/c/d", "a/b/d/#", "a/+/c/d"]));
}

#[test]
fn test_overlapping_stored_shapes() {
	let mut trie = mqtt_trie();
	trie.insert("a/b/c/d", "value1").unwrap();
	trie.insert("a/+/c/d", "value2").unwrap();
	trie.insert("a/b/c/#", "value3").unwrap();
	trie.insert("a/+/+/#", "value4").unwrap();

	let all = key_set(["a/b/c/d", "a/+/c/d", "a/b/c/#", "a/+/+/#"]);

	// A literal query reaches every stored shape covering it
	let matches = trie.find_matches("a/b/c/d");
	assert_eq!(matches.len(), 4);
	assert_eq!(keys(matches), all);

	// Wildcard-bearing queries covering the same key reach the same set
	for pattern in ["a/+/c/d", "a/+/+/+", "a/+/+/#", "a/#", "#"] {
		assert_eq!(keys(trie.find_matches(pattern)), all, "pattern {pattern}");
	}
	assert_eq!(keys(trie.find_matches("a/b/+/f")), key_set(["a/b/c/#", "a/+/+/#"]));
}

#[test]
fn test_custom_separator() {
	setup_tracing();
	let mut trie = TopicTrie::new(
		TrieConfig::new()
			.with_single_level_wildcard("+")
			.with_multi_level_wildcard("#")
			.with_separator("*"),
	);

	trie.insert("a*b*c*d", "value1").unwrap();
	assert_eq!(trie.find_matches("a*+*c*d").len(), 1);

	trie.insert("a*b*+*#", "value2").unwrap();
	let matches = trie.find_matches("a*b*+*d");
	assert_eq!(matches.len(), 2);
	assert_eq!(keys(matches), key_set(["a*b*c*d", "a*b*+*#"]));
}

#[test]
fn test_invalid_insertion_leaves_trie_unchanged() {
	let mut trie = char_trie();
	trie.insert("ab", "existing").unwrap();

	let result = trie.insert("a#b", "value");
	assert!(matches!(
		result,
		Err(TrieError::InvalidWildcardPosition { position: 1, .. })
	));

	assert_eq!(trie.len(), 1);
	assert_eq!(trie.retrieve("a"), Ok(None));
	assert_eq!(trie.retrieve("a#"), Ok(None));
	assert_eq!(trie.retrieve("ab"), Ok(Some(&"existing")));
	assert_eq!(keys(trie.entries()), key_set(["ab"]));
}

#[test]
fn test_chain_pruning() {
	let mut trie = char_trie();
	trie.insert("a", "value1").unwrap();
	trie.insert("ab", "value2").unwrap();
	trie.insert("abc", "value3").unwrap();

	assert!(trie.delete("abc"));
	assert!(trie.delete("ab"));

	assert_eq!(trie.retrieve("a"), Ok(Some(&"value1")));
	assert_eq!(trie.retrieve("ab"), Ok(None));
	assert_eq!(trie.retrieve("abc"), Ok(None));
	// Pruned nodes no longer show up even to a subtree walk
	assert_eq!(keys(trie.find_matches("a#")), key_set(["a"]));
	assert!(trie.find_matches("a+").is_empty());
}

#[test]
fn test_delete_prefix_and_extension_independently() {
	let mut trie = mqtt_trie();
	trie.insert("a/b", "short").unwrap();
	trie.insert("a/b/c", "long").unwrap();

	assert!(trie.delete("a/b"));
	assert_eq!(trie.retrieve("a/b/c"), Ok(Some(&"long")));

	trie.insert("a/b", "short").unwrap();
	assert!(trie.delete("a/b/c"));
	assert_eq!(trie.retrieve("a/b"), Ok(Some(&"short")));
	assert!(!trie.delete("a/b/c"));
}

#[test]
fn test_empty_and_special_keys() {
	let mut trie = TopicTrie::new(TrieConfig::default());

	assert_eq!(trie.insert("", "empty"), Ok(true));
	assert_eq!(trie.retrieve(""), Ok(Some(&"empty")));

	let special = "a!@#$%^&*()-_=[]{}|;:',.<>?/~";
	assert_eq!(trie.insert(special, "value"), Ok(true));
	assert_eq!(trie.retrieve(special), Ok(Some(&"value")));
}

#[test]
fn test_long_keys() {
	let mut trie = char_trie();
	let long_key = "a".repeat(1000);
	assert_eq!(trie.insert(&long_key, "value"), Ok(true));
	assert_eq!(trie.retrieve(&long_key), Ok(Some(&"value")));

	let pattern = format!("{}#", "a".repeat(500));
	assert_eq!(trie.find_matches(&pattern).len(), 1);

	assert!(trie.delete(&long_key));
	assert!(trie.is_empty());
	assert!(trie.entries().is_empty());

	let mut trie = mqtt_trie();
	let many_segments = vec!["x"; 500].join("/");
	trie.insert(&many_segments, "deep").unwrap();
	assert_eq!(trie.retrieve(&many_segments), Ok(Some(&"deep")));
	assert_eq!(keys(trie.find_matches("#")), key_set([many_segments.as_str()]));
}

fn segment() -> impl Strategy<Value = String> {
	"[a-z]{1,4}"
}

fn literal_key() -> impl Strategy<Value = String> {
	prop::collection::vec(segment(), 1 .. 8).prop_map(|segments| segments.join("/"))
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn prop_insert_then_retrieve(key in literal_key(), value in any::<u32>()) {
		let mut trie = TopicTrie::new(TrieConfig::mqtt());
		prop_assert_eq!(trie.insert(&key, value), Ok(true));
		prop_assert_eq!(trie.retrieve(&key), Ok(Some(&value)));
		prop_assert_eq!(trie.find_matches(&key).len(), 1);
	}

	#[test]
	fn prop_latest_insert_wins(key in literal_key(), first in any::<u32>(), second in any::<u32>()) {
		let mut trie = TopicTrie::new(TrieConfig::mqtt());
		trie.insert(&key, first).unwrap();
		trie.insert(&key, second).unwrap();
		prop_assert_eq!(trie.retrieve(&key), Ok(Some(&second)));
		prop_assert_eq!(trie.len(), 1);
	}

	#[test]
	fn prop_delete_restores_other_entries(
		keys in prop::collection::hash_set(literal_key(), 1 .. 16),
	) {
		let keys: Vec<String> = keys.into_iter().collect();
		let mut trie = TopicTrie::new(TrieConfig::mqtt());
		for (value, key) in keys.iter().enumerate() {
			trie.insert(key, value).unwrap();
		}

		let (removed, kept) = keys.split_at(keys.len() / 2);
		for key in removed {
			prop_assert!(trie.delete(key));
			prop_assert_eq!(trie.retrieve(key), Ok(None));
		}
		for key in kept {
			prop_assert!(trie.contains_key(key));
		}
		prop_assert_eq!(trie.len(), kept.len());
		prop_assert_eq!(trie.entries().len(), kept.len());

		for key in kept {
			prop_assert!(trie.delete(key));
		}
		prop_assert!(trie.is_empty());
		prop_assert!(trie.find_matches("#").is_empty());
	}
}
