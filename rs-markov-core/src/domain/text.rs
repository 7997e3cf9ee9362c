use std::fmt;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::io::read_file;
use crate::model::chain_state::ChainState;
use crate::model::markov_chain::MarkovChain;
use crate::model::registry::NodeId;

/// Characters separating words on a line.
pub const DELIMITERS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Marker ending a sentence.
pub const SENTENCE_END: char = '.';

/// A single word of a text corpus.
///
/// A word ending with `SENTENCE_END` closes a sentence and ends any walk
/// that reaches it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
	pub fn new(word: &str) -> Self {
		Self(word.to_owned())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Word {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl ChainState for Word {
	fn is_terminal(&self) -> bool {
		self.0.ends_with(SENTENCE_END)
	}

	/// Words are rendered with a leading space.
	fn render(&self, out: &mut dyn io::Write) -> io::Result<()> {
		write!(out, " {}", self.0)
	}
}

/// Splits a line into words.
pub fn tokenize(line: &str) -> impl Iterator<Item = Word> + '_ {
	line.split(DELIMITERS)
		.filter(|token| !token.is_empty())
		.map(Word::new)
}

/// Learns word transitions from `lines`.
///
/// # Parameters
/// - `lines`: the corpus, one line at a time.
/// - `words_to_read`: stop after this many words across the whole corpus.
///   `None` or `Some(0)` reads everything.
///
/// # Behavior
/// - Every word is added to the chain.
/// - A transition is recorded between two consecutive words of the same
///   line, unless the first one ends a sentence.
///
/// # Returns
/// The number of words read.
pub fn fill_chain<I, L>(chain: &mut MarkovChain<Word>, lines: I, words_to_read: Option<usize>) -> Result<usize>
where
	I: IntoIterator<Item = L>,
	L: AsRef<str>,
{
	let limit = words_to_read.filter(|&n| n > 0);
	let mut read = 0;

	'lines: for line in lines {
		let mut previous: Option<(NodeId, bool)> = None;
		for word in tokenize(line.as_ref()) {
			if limit.is_some_and(|limit| read >= limit) {
				break 'lines;
			}

			let current = chain.get_or_insert(&word)?;
			if let Some((prev_id, false)) = previous {
				chain.record_transition(prev_id, current)?;
			}
			previous = Some((current, word.is_terminal()));
			read += 1;
		}
	}

	Ok(read)
}

/// Reads a corpus file and learns its word transitions.
///
/// See `fill_chain` for the ingestion rules.
pub fn load_corpus<P: AsRef<Path>>(
	chain: &mut MarkovChain<Word>,
	path: P,
	words_to_read: Option<usize>,
) -> Result<usize> {
	let lines = read_file(&path)?;
	debug!("read {} lines from {}", lines.len(), path.as_ref().display());

	let read = fill_chain(chain, &lines, words_to_read)?;
	debug!("ingested {read} words, {} distinct", chain.len());
	Ok(read)
}
