use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::domain::text::{self, Word};
use rs_markov_core::{MarkovChain, WalkInput};

/// Maximum number of words in a generated tweet.
const MAX_WORDS_IN_TWEET: usize = 20;

/// Generate tweets from a text corpus.
#[derive(Parser)]
#[command(name = "rs-markov-tweets", version)]
struct Cli {
    /// Seed of the random generator.
    seed: u64,

    /// Number of tweets to generate.
    tweets: usize,

    /// Text file to learn from.
    corpus: PathBuf,

    /// Number of words to read from the corpus (0 reads everything).
    words_to_read: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Learn word transitions from the corpus
    let mut chain: MarkovChain<Word> = MarkovChain::new();
    let read = text::load_corpus(&mut chain, &cli.corpus, cli.words_to_read)?;
    info!("learned {} distinct words from {} words of {}", chain.len(), read, cli.corpus.display());

    // Every tweet starts from a random word that does not end a sentence
    let input = WalkInput::new(MAX_WORDS_IN_TWEET);
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for i in 1..=cli.tweets {
        write!(out, "Tweet {i}:")?;
        chain.walk_into(&mut rng, &input, &mut out)?;
        writeln!(out)?;
    }

    chain.destroy();
    Ok(())
}
