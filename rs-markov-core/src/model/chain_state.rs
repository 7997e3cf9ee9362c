use std::fmt::Display;
use std::io;

/// Capabilities a payload type must provide to be tracked by a `MarkovChain`.
///
/// The chain never looks inside a payload; everything it needs goes through
/// this contract:
/// - equality: `PartialEq`, used for deduplication and transition lookup
/// - duplication: `Clone`, a deep copy taken when a state is first inserted
/// - release: `Drop`, run exactly once when the chain is torn down
/// - rendering: `render`, writing a human-readable form to a sink
/// - terminal test: `is_terminal`, a pure predicate ending walks
///
/// # Invariants
/// - A cloned value must compare equal to its original.
/// - `is_terminal` must not depend on anything but the value itself.
pub trait ChainState: Clone + PartialEq + Display {
	/// Returns `true` when a generated walk must stop after this state.
	fn is_terminal(&self) -> bool;

	/// Writes this state to `out`.
	///
	/// Defaults to the `Display` form. Domains override it to decorate
	/// their output (separators, arrows, annotations).
	fn render(&self, out: &mut dyn io::Write) -> io::Result<()> {
		write!(out, "{self}")
	}
}
