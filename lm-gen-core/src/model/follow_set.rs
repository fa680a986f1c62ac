use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

/// Observation record of a single follower character.
///
/// `probability` and `cumulative_probability` stay at `0.0` until the owning
/// [`FollowSet`] is finalized.
#[derive(Clone, Debug, PartialEq)]
pub struct CharData {
	/// The follower character.
	pub chr: char,
	/// How many times `chr` was observed after the window.
	pub count: usize,
	/// `count / total` of the owning set.
	pub probability: f64,
	/// Running sum of `probability` up to and including this record.
	pub cumulative_probability: f64,
}

impl CharData {
	fn new(chr: char) -> Self {
		Self { chr, count: 1, probability: 0.0, cumulative_probability: 0.0 }
	}
}

impl fmt::Display for CharData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.chr, self.count, self.probability, self.cumulative_probability)
	}
}

/// Distribution of the characters observed right after one window.
///
/// A `FollowSet` is the Markov state of a [`LanguageModel`](super::language_model::LanguageModel):
/// during training it accumulates follower counts, then a single
/// [`finalize`](FollowSet::finalize) pass turns the counts into probabilities
/// that [`sample`](FollowSet::sample) draws from.
///
/// ## Invariants
/// - Records are kept in first-seen order, one record per character
/// - Every count is strictly positive
/// - After finalization, probabilities sum to 1.0 and the cumulative
///   probabilities are non-decreasing, ending at exactly 1.0
#[derive(Clone, Debug, Default)]
pub struct FollowSet {
	/// Records in first-seen order.
	entries: Vec<CharData>,
	/// Position of each character inside `entries`.
	index: HashMap<char, usize>,
}

impl FollowSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `c`.
	///
	/// - If `c` was already observed, its count is increased.
	/// - Otherwise, a new record with a count of 1 is appended.
	pub fn update(&mut self, c: char) {
		match self.index.get(&c) {
			Some(&position) => self.entries[position].count += 1,
			None => {
				self.index.insert(c, self.entries.len());
				self.entries.push(CharData::new(c));
			}
		}
	}

	/// Computes the probability and cumulative probability of every record.
	///
	/// The cumulative probability is a running sum in iteration order. The
	/// last record is pinned to exactly 1.0 so that rounding never leaves a
	/// gap at the top of the range. Does nothing on an empty set.
	pub fn finalize(&mut self) {
		let total = self.total_count();
		if total == 0 {
			return;
		}

		let mut cumulative = 0.0;
		for data in &mut self.entries {
			data.probability = data.count as f64 / total as f64;
			cumulative += data.probability;
			data.cumulative_probability = cumulative;
		}

		if let Some(last) = self.entries.last_mut() {
			last.cumulative_probability = 1.0;
		}
	}

	/// Picks a character given a uniform value `u` in `[0, 1)`.
	///
	/// Returns the first record whose cumulative probability exceeds `u`,
	/// or the last record when none does.
	///
	/// Returns `None` if the set is empty.
	pub fn sample(&self, u: f64) -> Option<char> {
		self.entries
			.iter()
			.find(|data| u < data.cumulative_probability)
			.or_else(|| self.entries.last())
			.map(|data| data.chr)
	}

	/// Sum of all the counts.
	pub fn total_count(&self) -> usize {
		self.entries.iter().map(|data| data.count).sum()
	}

	/// Number of distinct follower characters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// First record in iteration order.
	pub fn first(&self) -> Option<&CharData> {
		self.entries.first()
	}

	/// Position of `c` in iteration order.
	pub fn index_of(&self, c: char) -> Option<usize> {
		self.index.get(&c).copied()
	}

	/// Record of `c`, if it was observed.
	pub fn get(&self, c: char) -> Option<&CharData> {
		self.index_of(c).map(|position| &self.entries[position])
	}

	/// Iterates over the records in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = &CharData> {
		self.entries.iter()
	}
}

/// Positional access.
///
/// # Panics
/// Panics if `position >= self.len()`.
impl Index<usize> for FollowSet {
	type Output = CharData;

	fn index(&self, position: usize) -> &Self::Output {
		&self.entries[position]
	}
}

impl fmt::Display for FollowSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, data) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{}", data)?;
		}
		write!(f, ")")
	}
}
