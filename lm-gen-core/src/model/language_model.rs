use std::collections::HashMap;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::follow_set::FollowSet;
use super::generation_mode::GenerationMode;
use crate::error::ModelError;

/// Character-level language model over fixed-length windows.
///
/// The model maps every window of `window_length` characters seen in the
/// corpus to the [`FollowSet`] of characters that followed it, then extends
/// seed texts by sampling from those sets.
///
/// # Responsibilities
/// - Build the window table from a corpus in a single left-to-right pass
/// - Finalize the probabilities of every window once training is done
/// - Generate text by weighted random sampling, using an owned generator
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Each key of `table` has exactly `window_length` characters and was seen
///   in the corpus followed by at least one character
/// - Every stored `FollowSet` is non-empty and finalized
#[derive(Debug)]
pub struct LanguageModel {
	/// Number of characters in a window.
	window_length: usize,

	/// Mapping from a window to the characters observed right after it.
	table: HashMap<String, FollowSet>,

	/// Generator used by [`LanguageModel::generate`].
	rng: StdRng,
}

impl LanguageModel {
	/// Creates an untrained model whose generator is seeded from the OS.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self, ModelError> {
		Self::from_mode(window_length, GenerationMode::Random)
	}

	/// Creates an untrained model with a reproducible generator.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self, ModelError> {
		Self::from_mode(window_length, GenerationMode::Fixed(seed))
	}

	/// Creates an untrained model seeded according to `mode`.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn from_mode(window_length: usize, mode: GenerationMode) -> Result<Self, ModelError> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength(window_length));
		}

		let rng = match mode {
			GenerationMode::Random => StdRng::from_os_rng(),
			GenerationMode::Fixed(seed) => StdRng::seed_from_u64(seed),
		};

		Ok(Self { window_length, table: HashMap::new(), rng })
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows recorded.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Returns the follow set of `window`, if it was seen during training.
	pub fn follow_set(&self, window: &str) -> Option<&FollowSet> {
		self.table.get(window)
	}

	/// Iterates over the recorded windows, in no particular order.
	pub fn windows(&self) -> impl Iterator<Item = &str> {
		self.table.keys().map(String::as_str)
	}

	/// Builds the window table from a corpus.
	///
	/// The first `window_length` characters form the initial window. Each
	/// following character is recorded in the follow set of the current
	/// window, then the window slides by one character.
	///
	/// Counting and finalization are two separate phases: probabilities are
	/// computed once every character has been read. A previously trained
	/// table is replaced.
	///
	/// # Notes
	/// - A corpus shorter than the window leaves the model empty.
	/// - Characters are Unicode scalar values, not bytes.
	pub fn train<I: IntoIterator<Item = char>>(&mut self, corpus: I) {
		let mut chars = corpus.into_iter();
		let mut window: String = chars.by_ref().take(self.window_length).collect();
		let mut table: HashMap<String, FollowSet> = HashMap::new();

		if window.chars().count() < self.window_length {
			log::debug!("corpus shorter than window length {}, nothing to learn", self.window_length);
			self.table = table;
			return;
		}

		// Accumulate
		let mut read = self.window_length;
		for c in chars {
			if let Some(set) = table.get_mut(&window) {
				set.update(c);
			} else {
				let mut set = FollowSet::new();
				set.update(c);
				table.insert(window.clone(), set);
			}
			slide(&mut window, c);
			read += 1;
		}

		// Finalize
		for set in table.values_mut() {
			set.finalize();
		}

		log::debug!("trained on {} characters, {} windows recorded", read, table.len());
		self.table = table;
	}

	/// Extends `seed` by up to `target_length` characters using the model's
	/// own generator.
	///
	/// See [`LanguageModel::generate_with`] for the generation rules.
	pub fn generate(&mut self, seed: &str, target_length: usize) -> String {
		extend(&self.table, self.window_length, seed, target_length, &mut self.rng)
	}

	/// Extends `seed` by up to `target_length` characters drawn with `rng`.
	///
	/// The table is only read, so several callers may generate concurrently
	/// from one model as long as each brings its own generator.
	///
	/// # Behavior
	/// - A seed shorter than the window is returned unchanged.
	/// - Generation stops early when the trailing window was never seen.
	/// - The result always starts with `seed` and is at most
	///   `target_length` characters longer.
	pub fn generate_with<R: Rng>(&self, seed: &str, target_length: usize, rng: &mut R) -> String {
		extend(&self.table, self.window_length, seed, target_length, rng)
	}
}

/// Drops the first character of `window` and appends `c`.
fn slide(window: &mut String, c: char) {
	if let Some(first) = window.chars().next() {
		window.drain(..first.len_utf8());
	}
	window.push(c);
}

fn extend<R: Rng>(
	table: &HashMap<String, FollowSet>,
	window_length: usize,
	seed: &str,
	target_length: usize,
	rng: &mut R,
) -> String {
	let seed_length = seed.chars().count();
	if seed_length < window_length {
		log::warn!("seed {:?} is shorter than the window length {}, nothing generated", seed, window_length);
		return seed.to_owned();
	}

	let mut output = seed.to_owned();
	let mut window: String = seed.chars().skip(seed_length - window_length).collect();

	for generated in 0..target_length {
		let next = table.get(&window).and_then(|set| set.sample(rng.random::<f64>()));
		match next {
			Some(c) => {
				output.push(c);
				slide(&mut window, c);
			}
			None => {
				log::trace!("window {:?} unknown, stopping after {} characters", window, generated);
				break;
			}
		}
	}

	output
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, set) in &self.table {
			writeln!(f, "{} : {}", window, set)?;
		}
		Ok(())
	}
}
