//! Trie nodes and subtree traversal

use std::collections::HashMap;

use arcstr::ArcStr;

use super::key_path::join_segment;
use super::topic_trie::KeyValue;

/// Node in the topic trie, one per stored key segment.
/// Used internally by the `TopicTrie`.
#[derive(Debug)]
pub struct TrieNode<T> {
	/// Children keyed by segment text, wildcard tokens included
	children: HashMap<ArcStr, TrieNode<T>>,

	/// Value of the key terminating at this node
	value: Option<T>,
}

impl<T> Default for TrieNode<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> TrieNode<T> {
	/// Creates a new empty trie node
	pub fn new() -> Self {
		Self {
			children: HashMap::new(),
			value: None,
		}
	}

	/// True when the node neither stores a value nor has children
	pub fn is_empty(&self) -> bool {
		self.value.is_none() && self.children.is_empty()
	}

	/// Value of the key ending at this node, if one is stored
	pub fn value(&self) -> Option<&T> {
		self.value.as_ref()
	}

	/// Stores `value`, returning the one it replaces
	pub fn set_value(&mut self, value: T) -> Option<T> {
		self.value.replace(value)
	}

	/// Removes and returns the stored value
	pub fn take_value(&mut self) -> Option<T> {
		self.value.take()
	}

	/// True if at least one child hangs off this node
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}

	/// Number of direct children
	pub fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Direct child named exactly `segment`
	pub fn child(&self, segment: &str) -> Option<&TrieNode<T>> {
		self.children.get(segment)
	}

	/// Mutable access to the direct child named exactly `segment`
	pub fn child_mut(&mut self, segment: &str) -> Option<&mut TrieNode<T>> {
		self.children.get_mut(segment)
	}

	/// Returns the child for `segment`, creating it when missing
	pub fn child_or_insert(&mut self, segment: &str) -> &mut TrieNode<T> {
		self.children.entry(ArcStr::from(segment)).or_default()
	}

	/// Detaches the child for `segment` together with its subtree
	pub fn remove_child(&mut self, segment: &str) -> Option<TrieNode<T>> {
		self.children.remove(segment)
	}

	/// Direct children with their segment names, in unspecified order
	pub fn children(&self) -> impl Iterator<Item = (&ArcStr, &TrieNode<T>)> {
		self.children.iter()
	}

	/// Follows `segments` by exact name
	pub fn descend(&self, segments: &[&str]) -> Option<&TrieNode<T>> {
		segments
			.iter()
			.try_fold(self, |node, segment| node.child(segment))
	}

	/// Follows `segments` by exact name
	pub fn descend_mut(
		&mut self,
		segments: &[&str],
	) -> Option<&mut TrieNode<T>> {
		segments
			.iter()
			.try_fold(self, |node, segment| node.child_mut(segment))
	}

	/// Collects every value stored in this subtree, this node included.
	///
	/// `key` is the reconstructed key of this node and `depth` its distance
	/// from the root. Walks an explicit stack, so depth is bounded only by
	/// memory.
	pub fn collect_subtree<'a>(
		&'a self,
		key: String,
		depth: usize,
		separator: &str,
		matches: &mut Vec<KeyValue<&'a T>>,
	) {
		let mut stack = vec![(self, key, depth)];
		while let Some((node, key, depth)) = stack.pop() {
			for (segment, child) in &node.children {
				stack.push((
					child,
					join_segment(&key, depth, separator, segment),
					depth + 1,
				));
			}
			if let Some(value) = &node.value {
				matches.push(KeyValue::new(key, value));
			}
		}
	}
}

impl<T> Drop for TrieNode<T> {
	// Deep chains would otherwise be dropped recursively, one frame per level
	fn drop(&mut self) {
		let mut stack: Vec<TrieNode<T>> =
			self.children.drain().map(|(_, child)| child).collect();
		while let Some(mut node) = stack.pop() {
			stack.extend(node.children.drain().map(|(_, child)| child));
		}
	}
}
