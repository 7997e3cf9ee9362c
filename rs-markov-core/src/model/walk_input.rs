use crate::error::{ChainError, Result};
use crate::model::registry::NodeId;

/// Default cap on rejection draws when picking a random start.
pub const DEFAULT_MAX_START_ATTEMPTS: usize = 1000;

/// Strategy used to select the first state of a walk.
///
/// # Variants
/// - `Random`: a uniformly random non-terminal state of the chain.
/// - `Node(NodeId)`: start from the given node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartSeed {
	Random,
	Node(NodeId),
}

impl StartSeed {
	/// `Some(id)` for a fixed start, `None` for a random one.
	pub fn node(self) -> Option<NodeId> {
		match self {
			StartSeed::Random => None,
			StartSeed::Node(id) => Some(id),
		}
	}
}

/// Input parameters for generating a walk.
///
/// `WalkInput` bundles what a front end decides once and reuses for every
/// walk: how long a walk may grow, where it starts, and how hard random
/// start selection tries before falling back.
///
/// # Invariants
/// - `max_start_attempts` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkInput {
	/// Maximum number of states in a walk. Values <= 1 yield the start only.
	pub max_length: usize,

	/// Starting strategy.
	pub start_seed: StartSeed,

	/// Rejection draws allowed before sampling the non-terminal subset directly.
	max_start_attempts: usize,
}

impl WalkInput {
	/// Creates an input with a random start and the default attempts cap.
	pub fn new(max_length: usize) -> Self {
		Self {
			max_length,
			start_seed: StartSeed::Random,
			max_start_attempts: DEFAULT_MAX_START_ATTEMPTS,
		}
	}

	/// Builder-style helper fixing the start node.
	pub fn starting_at(mut self, id: NodeId) -> Self {
		self.start_seed = StartSeed::Node(id);
		self
	}

	/// Returns the current cap on rejection draws.
	pub fn max_start_attempts(&self) -> usize {
		self.max_start_attempts
	}

	/// Sets the cap on rejection draws for random start selection.
	///
	/// # Errors
	/// Returns an error if `attempts` is zero.
	pub fn set_max_start_attempts(&mut self, attempts: usize) -> Result<()> {
		if attempts == 0 {
			return Err(ChainError::InvalidInput(
				"max_start_attempts must be at least 1".to_owned(),
			));
		}
		self.max_start_attempts = attempts;
		Ok(())
	}
}
