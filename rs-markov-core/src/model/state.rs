use std::collections::TryReserveError;

use rand::Rng;

use super::registry::NodeId;

/// One observed edge of the chain: a successor and how often it followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
	/// Successor node, owned by the registry.
	pub target: NodeId,
	/// Number of observations, always >= 1.
	pub frequency: u64,
}

/// Represents a distinct state of a `MarkovChain`.
///
/// A `StateNode` owns a copy of the payload and every outgoing transition
/// observed from it, in first-seen order. Successors are referenced by
/// `NodeId`, so the registry stays the sole owner of all nodes and a node
/// may point at itself.
///
/// ## Responsibilities:
/// - Accumulate transition frequencies during learning
/// - Pick the next state using frequency-weighted sampling
///
/// ## Invariants
/// - At most one transition per successor
/// - Each frequency is strictly positive
#[derive(Clone, Debug)]
pub struct StateNode<S> {
	value: S,
	transitions: Vec<Transition>,
}

impl<S> StateNode<S> {
	/// Creates a node with an empty transition table.
	pub(crate) fn new(value: S) -> Self {
		Self {
			value,
			transitions: Vec::new(),
		}
	}

	/// The payload stored in this node.
	pub fn value(&self) -> &S {
		&self.value
	}

	/// Outgoing transitions in first-seen order.
	pub fn transitions(&self) -> &[Transition] {
		&self.transitions
	}

	/// Returns `true` if no transition leaves this node.
	pub fn is_dead_end(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Sum of all outgoing frequencies.
	pub fn total_frequency(&self) -> u64 {
		self.transitions.iter().map(|t| t.frequency).sum()
	}

	/// Records one observation of the transition toward `target`.
	///
	/// - If the transition already exists, its frequency is increased.
	/// - Otherwise, a new transition is appended with a frequency of 1.
	///
	/// The registry keeps exactly one node per distinct value, so matching on
	/// `NodeId` is the same as matching on the successor's value.
	///
	/// # Errors
	/// Returns the reservation error if the table cannot grow; the table is
	/// left exactly as it was.
	pub(crate) fn add_transition(&mut self, target: NodeId) -> Result<(), TryReserveError> {
		if let Some(existing) = self.transitions.iter_mut().find(|t| t.target == target) {
			existing.frequency += 1;
			return Ok(());
		}

		self.transitions.try_reserve(1)?;
		self.transitions.push(Transition { target, frequency: 1 });
		Ok(())
	}

	/// Picks the next node using frequency-weighted sampling.
	///
	/// Draws `r` uniformly in `[0, total)` and returns the first transition
	/// whose cumulative frequency exceeds `r`. The scan follows stored order,
	/// so the result is deterministic for a given random stream.
	///
	/// Returns `None` if the node has no transitions.
	pub fn pick_next<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<NodeId> {
		if self.transitions.is_empty() {
			return None;
		}

		let total = self.total_frequency();
		let r = rng.random_range(0..total);

		let mut acc = 0;
		for transition in &self.transitions {
			acc += transition.frequency;
			if acc > r {
				return Some(transition.target);
			}
		}

		unreachable!("weighted draw {r} fell outside a table totalling {total}")
	}
}
