use std::iter::FusedIterator;

use rand::Rng;

use crate::error::{ChainError, Result};
use crate::model::chain_state::ChainState;
use crate::model::registry::{NodeId, Registry};

/// Picks a uniformly random non-terminal node to start a walk from.
///
/// # Behavior
/// - Draws an index uniformly over the *whole* registry and rejects terminal
///   draws, so every non-terminal node is equally likely.
/// - After `max_attempts` rejected draws, samples the non-terminal subset
///   directly. The distribution is unchanged, only the loop is bounded.
///
/// # Errors
/// - `ChainError::EmptyChain` if the registry holds no node.
/// - `ChainError::NoStartState` if every node is terminal.
pub fn pick_start<S, R>(registry: &Registry<S>, rng: &mut R, max_attempts: usize) -> Result<NodeId>
where
	S: ChainState,
	R: Rng + ?Sized,
{
	if registry.is_empty() {
		return Err(ChainError::EmptyChain);
	}
	if registry.iter().all(|(_, node)| node.value().is_terminal()) {
		return Err(ChainError::NoStartState);
	}

	let is_start = |id: NodeId| registry.get(id).is_some_and(|node| !node.value().is_terminal());

	for _ in 0..max_attempts {
		let id = NodeId(rng.random_range(0..registry.len()));
		if is_start(id) {
			return Ok(id);
		}
	}

	let candidates: Vec<NodeId> = registry
		.iter()
		.filter(|(_, node)| !node.value().is_terminal())
		.map(|(id, _)| id)
		.collect();
	Ok(candidates[rng.random_range(0..candidates.len())])
}

/// A single random walk over a chain.
///
/// Produced lazily: every call to `next` yields one state and decides the
/// following one. The walk ends after the state that
/// - brings the walk to `max_length` states,
/// - is terminal, or
/// - has no outgoing transitions.
///
/// A walk always yields at least its start state, and cannot be restarted.
pub struct Walk<'a, S, R: ?Sized> {
	registry: &'a Registry<S>,
	rng: &'a mut R,
	next: Option<NodeId>,
	remaining: usize,
}

impl<'a, S, R> Walk<'a, S, R>
where
	S: ChainState,
	R: Rng + ?Sized,
{
	/// `start` must belong to `registry`; callers validate it first.
	pub(crate) fn new(registry: &'a Registry<S>, rng: &'a mut R, start: NodeId, max_length: usize) -> Self {
		Self {
			registry,
			rng,
			next: Some(start),
			remaining: max_length.max(1),
		}
	}
}

impl<'a, S, R> Iterator for Walk<'a, S, R>
where
	S: ChainState,
	R: Rng + ?Sized,
{
	type Item = &'a S;

	fn next(&mut self) -> Option<&'a S> {
		let id = self.next.take()?;
		let registry = self.registry;
		let node = registry.get(id)?;

		self.remaining -= 1;
		if self.remaining > 0 && !node.value().is_terminal() {
			self.next = node.pick_next(&mut *self.rng);
		}

		Some(node.value())
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		match self.next {
			Some(_) => (1, Some(self.remaining)),
			None => (0, Some(0)),
		}
	}
}

impl<S, R> FusedIterator for Walk<'_, S, R>
where
	S: ChainState,
	R: Rng + ?Sized,
{
}
