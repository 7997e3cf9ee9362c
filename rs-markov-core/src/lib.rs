//! Generic Markov chain library.
//!
//! This crate provides an in-memory, first-order Markov chain engine:
//! - A unique-state registry with per-state transition frequencies
//! - Uniform random start selection that skips terminal states
//! - Frequency-weighted random walks with length / terminal stopping rules
//! - Two ready-made domains: word sequences and a snakes-and-ladders board
//!
//! The engine is generic over the payload through the `ChainState` trait and
//! takes its random source as an explicit `rand::Rng`, so walks are fully
//! reproducible with a seeded generator.

/// Chain engine: states, registry, generator and walk configuration.
pub mod model;

/// Payload types for the bundled front ends.
pub mod domain;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use error::{ChainError, Result};
pub use model::chain_state::ChainState;
pub use model::markov_chain::MarkovChain;
pub use model::registry::NodeId;
pub use model::walk_input::{StartSeed, WalkInput};
