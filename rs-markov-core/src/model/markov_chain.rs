use std::io;

use rand::Rng;

use crate::error::{ChainError, Result};
use crate::model::chain_state::ChainState;
use crate::model::generator::{self, Walk};
use crate::model::registry::{NodeId, Registry};
use crate::model::state::StateNode;
use crate::model::walk_input::{DEFAULT_MAX_START_ATTEMPTS, WalkInput};

/// A first-order Markov chain over states of type `S`.
///
/// # Responsibilities
/// - Own the registry of unique states and their transition tables
/// - Record observed transitions between states
/// - Generate random walks weighted by observed frequencies
///
/// # Lifecycle
/// Build the chain by feeding it states and transitions, then generate
/// from it. Generation borrows the chain immutably, so no state can be added
/// while a walk is alive. Dropping the chain (or calling `destroy`) releases
/// every state and transition table exactly once.
#[derive(Clone, Debug)]
pub struct MarkovChain<S> {
	registry: Registry<S>,
}

impl<S: ChainState> Default for MarkovChain<S> {
	fn default() -> Self {
		Self::new()
	}
}

impl<S: ChainState> MarkovChain<S> {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self {
			registry: Registry::new(),
		}
	}

	/// Read-only view of the underlying registry.
	pub fn registry(&self) -> &Registry<S> {
		&self.registry
	}

	/// Number of distinct states.
	pub fn len(&self) -> usize {
		self.registry.len()
	}

	pub fn is_empty(&self) -> bool {
		self.registry.is_empty()
	}

	pub fn find(&self, value: &S) -> Option<NodeId> {
		self.registry.find(value)
	}

	pub fn node(&self, id: NodeId) -> Result<&StateNode<S>> {
		self.registry.node(id)
	}

	/// Returns the node holding `value`, inserting a copy if it is new.
	///
	/// # Errors
	/// `ChainError::Allocation` if the node store cannot grow.
	pub fn get_or_insert(&mut self, value: &S) -> Result<NodeId> {
		self.registry.get_or_insert(value)
	}

	/// Records one observation of `from` being followed by `to`.
	///
	/// # Errors
	/// - `ChainError::UnknownNode` if either id does not belong to this chain.
	/// - `ChainError::Allocation` if the transition table cannot grow; the
	///   observation is then not recorded at all.
	pub fn record_transition(&mut self, from: NodeId, to: NodeId) -> Result<()> {
		self.registry.node(to)?;
		let node = self.registry.get_mut(from).ok_or(ChainError::UnknownNode(from))?;
		node.add_transition(to)
			.map_err(|_| ChainError::Allocation("transition table"))
	}

	/// Inserts both values if needed and records the transition between them.
	///
	/// Returns the ids of `from` and `to`.
	pub fn observe(&mut self, from: &S, to: &S) -> Result<(NodeId, NodeId)> {
		let from_id = self.get_or_insert(from)?;
		let to_id = self.get_or_insert(to)?;
		self.record_transition(from_id, to_id)?;
		Ok((from_id, to_id))
	}

	/// Picks a uniformly random non-terminal state.
	///
	/// See [`generator::pick_start`] for the sampling policy.
	pub fn pick_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NodeId> {
		generator::pick_start(&self.registry, rng, DEFAULT_MAX_START_ATTEMPTS)
	}

	/// Picks the successor of `current`, or `None` if it has no transitions.
	pub fn pick_next<R: Rng + ?Sized>(&self, current: NodeId, rng: &mut R) -> Result<Option<NodeId>> {
		Ok(self.registry.node(current)?.pick_next(rng))
	}

	/// Starts a walk of at most `max_length` states.
	///
	/// # Parameters
	/// - `start`: first state, or `None` for a random non-terminal one.
	/// - `max_length`: upper bound on yielded states; values <= 1 yield the
	///   start only.
	///
	/// # Errors
	/// - `ChainError::UnknownNode` for a foreign `start`.
	/// - `ChainError::EmptyChain` / `ChainError::NoStartState` when a random
	///   start is requested and none exists.
	pub fn generate<'a, R: Rng + ?Sized>(
		&'a self,
		rng: &'a mut R,
		start: Option<NodeId>,
		max_length: usize,
	) -> Result<Walk<'a, S, R>> {
		self.start_walk(rng, start, max_length, DEFAULT_MAX_START_ATTEMPTS)
	}

	/// Starts a walk configured by a `WalkInput`.
	pub fn walk<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R, input: &WalkInput) -> Result<Walk<'a, S, R>> {
		self.start_walk(rng, input.start_seed.node(), input.max_length, input.max_start_attempts())
	}

	/// Generates a walk and renders every state into `out`.
	///
	/// Returns the number of states rendered.
	pub fn generate_into<R, W>(
		&self,
		rng: &mut R,
		start: Option<NodeId>,
		max_length: usize,
		out: &mut W,
	) -> Result<usize>
	where
		R: Rng + ?Sized,
		W: io::Write,
	{
		let walk = self.generate(rng, start, max_length)?;
		render_walk(walk, out)
	}

	/// Like `generate_into`, configured by a `WalkInput`.
	pub fn walk_into<R, W>(&self, rng: &mut R, input: &WalkInput, out: &mut W) -> Result<usize>
	where
		R: Rng + ?Sized,
		W: io::Write,
	{
		let walk = self.walk(rng, input)?;
		render_walk(walk, out)
	}

	/// Tears the chain down, releasing every state and transition table.
	pub fn destroy(self) {
		drop(self);
	}

	fn start_walk<'a, R: Rng + ?Sized>(
		&'a self,
		rng: &'a mut R,
		start: Option<NodeId>,
		max_length: usize,
		max_start_attempts: usize,
	) -> Result<Walk<'a, S, R>> {
		let start = match start {
			Some(id) => {
				self.registry.node(id)?;
				id
			}
			None => generator::pick_start(&self.registry, rng, max_start_attempts)?,
		};
		Ok(Walk::new(&self.registry, rng, start, max_length))
	}
}

fn render_walk<S, R, W>(walk: Walk<'_, S, R>, out: &mut W) -> Result<usize>
where
	S: ChainState,
	R: Rng + ?Sized,
	W: io::Write,
{
	let mut rendered = 0;
	for state in walk {
		state.render(&mut *out)?;
		rendered += 1;
	}
	Ok(rendered)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::fmt;

	#[derive(Clone, Debug, PartialEq)]
	struct Token(String);

	impl Token {
		fn new(s: &str) -> Self {
			Self(s.to_owned())
		}
	}

	impl fmt::Display for Token {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str(&self.0)
		}
	}

	impl ChainState for Token {
		fn is_terminal(&self) -> bool {
			self.0.ends_with('.')
		}

		fn render(&self, out: &mut dyn io::Write) -> io::Result<()> {
			write!(out, "{} ", self.0)
		}
	}

	fn collect<R: Rng>(chain: &MarkovChain<Token>, rng: &mut R, start: Option<NodeId>, max: usize) -> Vec<String> {
		chain
			.generate(rng, start, max)
			.unwrap()
			.map(|t| t.0.clone())
			.collect()
	}

	#[test]
	fn frequency_accumulates_on_single_edge() {
		let mut chain = MarkovChain::new();
		for _ in 0..5 {
			chain.observe(&Token::new("a"), &Token::new("b")).unwrap();
		}
		let a = chain.find(&Token::new("a")).unwrap();
		let b = chain.find(&Token::new("b")).unwrap();

		let node = chain.node(a).unwrap();
		assert_eq!(node.transitions().len(), 1);
		assert_eq!(node.transitions()[0].frequency, 5);

		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..100 {
			assert_eq!(chain.pick_next(a, &mut rng).unwrap(), Some(b));
		}
	}

	#[test]
	fn record_transition_rejects_foreign_ids() {
		let mut chain = MarkovChain::new();
		let a = chain.get_or_insert(&Token::new("a")).unwrap();
		assert!(matches!(
			chain.record_transition(a, NodeId(9)),
			Err(ChainError::UnknownNode(NodeId(9)))
		));
		assert!(matches!(
			chain.record_transition(NodeId(4), a),
			Err(ChainError::UnknownNode(NodeId(4)))
		));
		assert!(chain.node(a).unwrap().is_dead_end());
	}

	#[test]
	fn walk_never_exceeds_max_length() {
		let mut chain = MarkovChain::new();
		chain.observe(&Token::new("x"), &Token::new("y")).unwrap();
		chain.observe(&Token::new("y"), &Token::new("x")).unwrap();
		let x = chain.find(&Token::new("x")).unwrap();

		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(collect(&chain, &mut rng, Some(x), 5), ["x", "y", "x", "y", "x"]);
		assert_eq!(collect(&chain, &mut rng, Some(x), 1), ["x"]);
		assert_eq!(collect(&chain, &mut rng, Some(x), 0), ["x"]);
	}

	#[test]
	fn walk_stops_on_dead_end() {
		let mut chain = MarkovChain::new();
		chain.observe(&Token::new("x"), &Token::new("y")).unwrap();
		let x = chain.find(&Token::new("x")).unwrap();

		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(collect(&chain, &mut rng, Some(x), 10), ["x", "y"]);
	}

	#[test]
	fn terminal_start_yields_only_itself() {
		let mut chain = MarkovChain::new();
		let (end, _) = chain.observe(&Token::new("end."), &Token::new("more")).unwrap();

		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(collect(&chain, &mut rng, Some(end), 10), ["end."]);
	}

	#[test]
	fn generate_into_renders_each_state() {
		let mut chain = MarkovChain::new();
		chain.observe(&Token::new("hello"), &Token::new("world.")).unwrap();
		let start = chain.find(&Token::new("hello")).unwrap();

		let mut rng = StdRng::seed_from_u64(0);
		let mut out = Vec::new();
		let rendered = chain.generate_into(&mut rng, Some(start), 20, &mut out).unwrap();
		assert_eq!(rendered, 2);
		assert_eq!(String::from_utf8(out).unwrap(), "hello world. ");
	}

	#[test]
	fn walk_input_drives_generation() {
		let mut chain = MarkovChain::new();
		chain.observe(&Token::new("only"), &Token::new("stop.")).unwrap();

		let mut rng = StdRng::seed_from_u64(8);
		let mut input = WalkInput::new(10);
		input.set_max_start_attempts(1).unwrap();
		let mut out = Vec::new();
		chain.walk_into(&mut rng, &input, &mut out).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "only stop. ");
	}

	#[test]
	fn foreign_start_is_rejected() {
		let chain: MarkovChain<Token> = MarkovChain::new();
		let mut rng = StdRng::seed_from_u64(0);
		assert!(matches!(chain.generate(&mut rng, Some(NodeId(0)), 3), Err(ChainError::UnknownNode(_))));
		assert!(matches!(chain.generate(&mut rng, None, 3), Err(ChainError::EmptyChain)));
	}
}
