//! Payload types driving the engine in the bundled front ends.

/// Snakes-and-ladders board cells and the board's move graph.
pub mod board;

/// Words, tokenizing and corpus ingestion.
pub mod text;
