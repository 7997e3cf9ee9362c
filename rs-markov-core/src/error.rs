use thiserror::Error;

use crate::model::registry::NodeId;

/// Errors reported by the chain, its generator and the domain loaders.
///
/// Every fallible operation of the crate returns one of these variants so
/// callers can tell an exhausted allocator apart from a bad request.
#[derive(Debug, Error)]
pub enum ChainError {
	/// The node store or a transition table could not grow.
	#[error("allocation failure: could not grow {0}")]
	Allocation(&'static str),

	/// A `NodeId` that was not issued by this chain.
	#[error("unknown state node {0}")]
	UnknownNode(NodeId),

	/// Generation was requested on a chain with no states.
	#[error("the chain holds no states")]
	EmptyChain,

	/// Every state in the chain is terminal, so no walk can start.
	#[error("no non-terminal state available to start a walk")]
	NoStartState,

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChainError>;
