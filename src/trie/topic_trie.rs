//! The topic trie and its match traversal

use smallvec::SmallVec;

use super::config::TrieConfig;
use super::error::TrieResult;
use super::key_path::{KeyPath, join_segment};
use super::trie_node::TrieNode;

/// A stored key, reconstructed from its segments, and its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValue<V> {
	/// Stored key, segments joined with the separator
	pub key: String,
	/// Stored value
	pub value: V,
}

impl<V> KeyValue<V> {
	/// Creates a new key/value record
	pub fn new(key: String, value: V) -> Self {
		Self { key, value }
	}
}

/// Hierarchical key-value index with wildcard matching.
///
/// Keys are split into segments by the configured separator and stored one
/// node per segment. Wildcard tokens in stored keys are kept as ordinary
/// segment names; they only gain meaning when [`find_matches`] walks the
/// trie.
///
/// [`find_matches`]: TopicTrie::find_matches
#[derive(Debug)]
pub struct TopicTrie<T> {
	root: TrieNode<T>,
	config: TrieConfig,
	len: usize,
}

impl<T> Default for TopicTrie<T> {
	fn default() -> Self {
		Self::new(TrieConfig::default())
	}
}

impl<T> TopicTrie<T> {
	/// Creates an empty trie with the given configuration
	pub fn new(config: TrieConfig) -> Self {
		Self {
			root: TrieNode::new(),
			config,
			len: 0,
		}
	}

	/// Returns the configuration the trie was built with
	pub fn config(&self) -> &TrieConfig {
		&self.config
	}

	/// Number of stored values
	pub fn len(&self) -> usize {
		self.len
	}

	/// True if no value is stored
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Stores `value` under `key`, replacing any previous value.
	///
	/// # Errors
	/// Returns [`TrieError::InvalidWildcardPosition`] if the multi-level
	/// wildcard appears in any segment but the last. The trie is left
	/// untouched in that case.
	///
	/// [`TrieError::InvalidWildcardPosition`]: super::TrieError::InvalidWildcardPosition
	pub fn insert(&mut self, key: &str, value: T) -> TrieResult<bool> {
		let path = KeyPath::parse_exact(key, &self.config).inspect_err(|err| {
			tracing::debug!(key, error = %err, "Rejected insert");
		})?;

		let node = path
			.iter()
			.fold(&mut self.root, |node, segment| node.child_or_insert(segment));
		if node.set_value(value).is_none() {
			self.len += 1;
		}
		tracing::trace!(key, segments = path.len(), "Inserted key");
		Ok(true)
	}

	/// Returns the value stored under exactly `key`.
	///
	/// Segments are compared verbatim: a wildcard token in `key` only finds
	/// an entry stored with that same token. A missing path and a path
	/// ending at a node without a value both yield `Ok(None)`.
	///
	/// # Errors
	/// Returns [`TrieError::InvalidWildcardPosition`] under the same rule as
	/// [`insert`](Self::insert).
	///
	/// [`TrieError::InvalidWildcardPosition`]: super::TrieError::InvalidWildcardPosition
	pub fn retrieve(&self, key: &str) -> TrieResult<Option<&T>> {
		let path = KeyPath::parse_exact(key, &self.config).inspect_err(|err| {
			tracing::debug!(key, error = %err, "Rejected retrieve");
		})?;
		Ok(self.root.descend(path.slice()).and_then(TrieNode::value))
	}

	/// True if a value is stored under exactly `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		matches!(self.retrieve(key), Ok(Some(_)))
	}

	/// Finds every stored entry compatible with `pattern`.
	///
	/// A single-level wildcard in the pattern matches any one segment and a
	/// multi-level wildcard matches the whole subtree below its position.
	/// Literal pattern segments also reach entries stored with a wildcard at
	/// that position, so one query can return several differently shaped
	/// entries. The pattern itself is not validated, and result order is
	/// unspecified.
	pub fn find_matches(&self, pattern: &str) -> Vec<KeyValue<&T>> {
		let pattern = KeyPath::split(pattern, &self.config.separator);
		let mut walk = MatchWalk::new(&self.root, &self.config);
		match pattern.len() {
			| 0 => walk.collect_root(),
			| _ => walk.run(&pattern),
		}
		tracing::trace!(
			pattern = %pattern,
			matches = walk.matches.len(),
			"Matched pattern"
		);
		walk.matches
	}

	/// Every stored entry, in unspecified order.
	pub fn entries(&self) -> Vec<KeyValue<&T>> {
		let mut entries = Vec::with_capacity(self.len);
		self.root
			.collect_subtree(String::new(), 0, &self.config.separator, &mut entries);
		entries
	}

	/// Removes the value stored under exactly `key`.
	///
	/// Nodes left without a value and without children are pruned, walking
	/// back up the path until a node still in use or the root is reached.
	/// Returns false if nothing was stored under `key`.
	pub fn delete(&mut self, key: &str) -> bool {
		let path = KeyPath::split(key, &self.config.separator);
		let segments = path.slice();

		// keep[d]: the node at depth d stays even if its child on the path goes
		let mut keep: SmallVec<[bool; 16]> = SmallVec::with_capacity(segments.len());
		let mut node = &mut self.root;
		for segment in segments {
			keep.push(node.value().is_some() || node.child_count() > 1);
			match node.child_mut(segment) {
				| Some(child) => node = child,
				| None => return false,
			}
		}
		if node.take_value().is_none() {
			return false;
		}
		self.len -= 1;
		if segments.is_empty() || node.has_children() {
			return true;
		}

		let cut = keep.iter().rposition(|keep| *keep).unwrap_or(0);
		if let Some(parent) = self.root.descend_mut(&segments[.. cut]) {
			parent.remove_child(segments[cut]);
		}
		tracing::trace!(key, pruned = segments.len() - cut, "Pruned empty nodes");
		true
	}

	/// Removes every entry, keeping the configuration.
	pub fn clear(&mut self) {
		self.root = TrieNode::new();
		self.len = 0;
	}

	#[cfg(test)]
	pub(crate) fn root(&self) -> &TrieNode<T> {
		&self.root
	}
}

struct MatchFrame<'t, T> {
	node: &'t TrieNode<T>,
	/// Index of the pattern segment to apply at `node`
	index: usize,
	depth: usize,
	key: String,
}

/// State of one `find_matches` traversal.
struct MatchWalk<'t, T> {
	root: &'t TrieNode<T>,
	config: &'t TrieConfig,
	stack: Vec<MatchFrame<'t, T>>,
	matches: Vec<KeyValue<&'t T>>,
}

impl<'t, T> MatchWalk<'t, T> {
	fn new(root: &'t TrieNode<T>, config: &'t TrieConfig) -> Self {
		Self {
			root,
			config,
			stack: Vec::new(),
			matches: Vec::new(),
		}
	}

	/// A pattern without segments addresses the root itself
	fn collect_root(&mut self) {
		if let Some(value) = self.root.value() {
			self.matches.push(KeyValue::new(String::new(), value));
		}
	}

	fn run(&mut self, pattern: &KeyPath<'_>) {
		let config = self.config;
		let last = pattern.len() - 1;
		self.stack.push(MatchFrame {
			node: self.root,
			index: 0,
			depth: 0,
			key: String::new(),
		});

		while let Some(frame) = self.stack.pop() {
			let Some(segment) = pattern.get(frame.index) else {
				continue;
			};
			let at_last = frame.index == last;

			if config.is_multi_level_wildcard(segment) {
				frame.node.collect_subtree(
					frame.key,
					frame.depth,
					&config.separator,
					&mut self.matches,
				);
			} else if config.is_single_level_wildcard(segment) {
				for (name, child) in frame.node.children() {
					self.visit(&frame, name, child, at_last);
				}
			} else {
				if let Some(child) = frame.node.child(segment) {
					self.visit(&frame, segment, child, at_last);
				}
				// Entries stored with `+` here match any literal segment
				if let Some(token) = config.single_level_wildcard.as_deref() {
					if let Some(child) = frame.node.child(token) {
						self.visit(&frame, token, child, at_last);
					}
				}
				// Entries stored with `#` here match the rest of the pattern
				if let Some(token) = config.multi_level_wildcard.as_deref() {
					if let Some(value) =
						frame.node.child(token).and_then(TrieNode::value)
					{
						self.push_match(&frame, token, value);
					}
				}
			}
		}
	}

	/// Collects `child` when the pattern ends here, descends otherwise
	fn visit(
		&mut self,
		frame: &MatchFrame<'t, T>,
		name: &str,
		child: &'t TrieNode<T>,
		at_last: bool,
	) {
		if at_last {
			if let Some(value) = child.value() {
				self.push_match(frame, name, value);
			}
			return;
		}
		let key = self.child_key(frame, name);
		self.stack.push(MatchFrame {
			node: child,
			index: frame.index + 1,
			depth: frame.depth + 1,
			key,
		});
	}

	fn push_match(&mut self, frame: &MatchFrame<'t, T>, name: &str, value: &'t T) {
		let key = self.child_key(frame, name);
		self.matches.push(KeyValue::new(key, value));
	}

	fn child_key(&self, frame: &MatchFrame<'t, T>, name: &str) -> String {
		join_segment(&frame.key, frame.depth, &self.config.separator, name)
	}
}
