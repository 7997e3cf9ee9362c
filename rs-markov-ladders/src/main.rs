use std::io::{self, Write};

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::domain::board::{self, Cell};
use rs_markov_core::{ChainError, MarkovChain, WalkInput};

/// Maximum number of cells visited by a walk.
const MAX_GENERATION_LENGTH: usize = 60;

/// Simulate random walks on a snakes-and-ladders board.
#[derive(Parser)]
#[command(name = "rs-markov-ladders", version)]
struct Cli {
    /// Seed of the random generator.
    seed: u64,

    /// Number of walks to generate.
    routes: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // One node per cell, one transition per legal move
    let mut chain: MarkovChain<Cell> = MarkovChain::new();
    board::fill_chain(&mut chain)?;
    info!("board ready with {} cells", chain.len());

    // Every walk starts on the first cell
    let first = chain.registry().first().ok_or(ChainError::EmptyChain)?;
    let input = WalkInput::new(MAX_GENERATION_LENGTH).starting_at(first);
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for i in 1..=cli.routes {
        write!(out, "Random Walk {i}: ")?;
        chain.walk_into(&mut rng, &input, &mut out)?;
        writeln!(out)?;
    }

    chain.destroy();
    Ok(())
}
