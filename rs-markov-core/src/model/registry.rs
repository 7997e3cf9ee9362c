use std::fmt;

use super::state::StateNode;
use crate::error::{ChainError, Result};

/// Stable handle to a node stored in a `Registry`.
///
/// Handles are plain indices into the registry's node store. They stay valid
/// for the registry's whole lifetime because nodes are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
	/// Position of the node in insertion order.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Insertion-ordered store of unique states.
///
/// # Invariants
/// - No two nodes hold values that compare equal
/// - Nodes are only appended, never removed or reordered
#[derive(Clone, Debug)]
pub struct Registry<S> {
	nodes: Vec<StateNode<S>>,
}

impl<S> Default for Registry<S> {
	fn default() -> Self {
		Self { nodes: Vec::new() }
	}
}

impl<S: PartialEq + Clone> Registry<S> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the first node whose value equals `value`.
	///
	/// Linear scan in insertion order, no side effects.
	pub fn find(&self, value: &S) -> Option<NodeId> {
		self.nodes
			.iter()
			.position(|node| node.value() == value)
			.map(NodeId)
	}

	/// Appends a copy of `value` as a new node with no transitions.
	///
	/// Does not check for duplicates; use `get_or_insert` while ingesting.
	///
	/// # Errors
	/// `ChainError::Allocation` if the node store cannot grow.
	pub(crate) fn insert(&mut self, value: &S) -> Result<NodeId> {
		self.nodes
			.try_reserve(1)
			.map_err(|_| ChainError::Allocation("node store"))?;
		let id = NodeId(self.nodes.len());
		self.nodes.push(StateNode::new(value.clone()));
		Ok(id)
	}

	/// Returns the node holding `value`, inserting a copy on a miss.
	///
	/// This is the only path that creates nodes, which keeps every value
	/// unique by construction.
	pub fn get_or_insert(&mut self, value: &S) -> Result<NodeId> {
		match self.find(value) {
			Some(id) => Ok(id),
			None => self.insert(value),
		}
	}
}

impl<S> Registry<S> {
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The first inserted node, if any.
	pub fn first(&self) -> Option<NodeId> {
		(!self.nodes.is_empty()).then_some(NodeId(0))
	}

	pub fn get(&self, id: NodeId) -> Option<&StateNode<S>> {
		self.nodes.get(id.0)
	}

	pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut StateNode<S>> {
		self.nodes.get_mut(id.0)
	}

	/// Like `get`, but reports an unknown handle as an error.
	pub fn node(&self, id: NodeId) -> Result<&StateNode<S>> {
		self.get(id).ok_or(ChainError::UnknownNode(id))
	}

	/// Iterates over `(id, node)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (NodeId, &StateNode<S>)> {
		self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
	}
}
