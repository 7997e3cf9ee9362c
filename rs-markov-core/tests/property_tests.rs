//! Property-based tests for the chain invariants.
//!
//! Uses proptest to verify across random inputs:
//! - The registry never holds two equal states
//! - Re-inserting a known state returns the same node
//! - Transition frequencies add up to the number of observations
//! - Walks never exceed their maximum length

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::domain::text::{Word, fill_chain};
use rs_markov_core::MarkovChain;

fn vocabulary() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[a-e]{1,2}\\.?", 1..60)
}

proptest! {
	/// Property: every node holds a distinct value.
	#[test]
	fn prop_registry_values_are_unique(words in vocabulary()) {
		let mut chain = MarkovChain::new();
		for w in &words {
			chain.get_or_insert(&Word::new(w)).unwrap();
		}

		let values: Vec<&Word> = chain.registry().iter().map(|(_, node)| node.value()).collect();
		for (i, a) in values.iter().enumerate() {
			for b in &values[i + 1..] {
				prop_assert_ne!(a, b);
			}
		}
	}

	/// Property: inserting a known value returns its node and does not grow the chain.
	#[test]
	fn prop_reinsert_is_idempotent(words in vocabulary()) {
		let mut chain = MarkovChain::new();
		let ids: Vec<_> = words.iter().map(|w| chain.get_or_insert(&Word::new(w)).unwrap()).collect();
		let size = chain.len();

		for (w, id) in words.iter().zip(&ids) {
			prop_assert_eq!(chain.get_or_insert(&Word::new(w)).unwrap(), *id);
		}
		prop_assert_eq!(chain.len(), size);
	}

	/// Property: each recorded observation adds exactly one to the total frequency.
	#[test]
	fn prop_frequencies_count_observations(pairs in prop::collection::vec((0u8..6, 0u8..6), 0..80)) {
		let mut chain = MarkovChain::new();
		for (from, to) in &pairs {
			chain.observe(&Word::new(&from.to_string()), &Word::new(&to.to_string())).unwrap();
		}

		let total: u64 = chain.registry().iter().map(|(_, node)| node.total_frequency()).sum();
		prop_assert_eq!(total, pairs.len() as u64);

		for (_, node) in chain.registry().iter() {
			let mut targets: Vec<_> = node.transitions().iter().map(|t| t.target).collect();
			targets.sort();
			targets.dedup();
			prop_assert_eq!(targets.len(), node.transitions().len());
		}
	}

	/// Property: a walk yields between 1 and `max_length` states.
	#[test]
	fn prop_walk_respects_max_length(words in vocabulary(), max_length in 0usize..30, seed in any::<u64>()) {
		let line = words.join(" ");
		let mut chain = MarkovChain::new();
		fill_chain(&mut chain, [line.as_str()], None).unwrap();

		let mut rng = StdRng::seed_from_u64(seed);
		if let Ok(walk) = chain.generate(&mut rng, None, max_length) {
			let states: Vec<_> = walk.collect();
			prop_assert!(!states.is_empty());
			prop_assert!(states.len() <= max_length.max(1));
		}
	}
}
