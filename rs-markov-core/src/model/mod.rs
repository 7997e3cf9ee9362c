//! Top-level module for the Markov chain engine.
//!
//! This module provides a generic first-order Markov chain, including:
//! - The capability contract payloads implement (`ChainState`)
//! - Per-state transition tables (`StateNode`)
//! - The unique-state store (`Registry`)
//! - The chain facade used by front ends (`MarkovChain`)
//! - Walk configuration (`WalkInput`) and generation (`Walk`)

/// Capability contract a payload type must satisfy.
pub mod chain_state;

/// Random start selection and the lazy walk iterator.
///
/// Walks pick each next state by frequency-weighted sampling and stop on
/// length, terminal states, or dead ends.
pub mod generator;

/// Chain facade: ingestion, sampling and rendering entry points.
pub mod markov_chain;

/// Insertion-ordered arena of unique states addressed by `NodeId`.
pub mod registry;

/// A single state with its outgoing frequency table.
///
/// Supports transition accumulation and weighted next-state sampling.
pub mod state;

/// Walk configuration: maximum length, start strategy, start attempts cap.
pub mod walk_input;
