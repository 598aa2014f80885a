//! Selection operators
//!
//! Fitness-proportionate parent selection. Each record occupies
//! `score + 1` positions of a weighted distribution, so a zero score still
//! leaves a nonzero chance of breeding. The distribution is stored as prefix
//! sums and positions are resolved by binary search; memory stays linear in
//! the number of records regardless of score magnitude.

use rand::Rng;

use crate::error::OperatorError;
use crate::fitness::traits::Score;
use crate::operators::traits::SelectionOperator;
use crate::population::record::FitnessRecord;

/// Multiset view of a scored population
///
/// Entry `i` occupies `weight(score_i) = score_i + 1` consecutive positions.
/// Weights are summed in `u128`, so even `u64::MAX` scores keep every later
/// entry at its full weight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeightedDistribution {
    /// `cumulative[i]` is the total weight of entries `0..=i`
    cumulative: Vec<u128>,
}

impl WeightedDistribution {
    /// Build from scores in population order
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = Score>,
    {
        let mut total = 0u128;
        let cumulative = scores
            .into_iter()
            .map(|score| {
                total += u128::from(score) + 1;
                total
            })
            .collect();
        Self { cumulative }
    }

    /// Build from fitness records
    pub fn from_records(records: &[FitnessRecord]) -> Self {
        Self::from_scores(records.iter().map(|r| r.score))
    }

    /// Total number of positions, `sum(score_i + 1)`
    pub fn len(&self) -> u128 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Check if the distribution has no positions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries (individuals) in the distribution
    pub fn entries(&self) -> usize {
        self.cumulative.len()
    }

    /// Number of positions occupied by entry `index`
    pub fn count_of(&self, index: usize) -> u128 {
        match index {
            0 => self.cumulative.first().copied().unwrap_or(0),
            i if i < self.cumulative.len() => self.cumulative[i] - self.cumulative[i - 1],
            _ => 0,
        }
    }

    /// Entry occupying `position`, if the position is in range
    pub fn index_at(&self, position: u128) -> Option<usize> {
        if position >= self.len() {
            return None;
        }
        Some(self.cumulative.partition_point(|&c| c <= position))
    }

    /// Iterate over the entry index at every position, in order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cumulative.len())
            .flat_map(move |index| std::iter::repeat(index).take(self.count_of(index) as usize))
    }

    /// Draw two distinct positions uniformly and return their entries
    ///
    /// Positions are drawn without replacement; entries are not, so both
    /// returned indices may be the same entry.
    pub fn sample_pair<R: Rng>(&self, rng: &mut R) -> Result<(usize, usize), OperatorError> {
        let total = self.len();
        if total < 2 {
            return Err(OperatorError::SelectionFailed(format!(
                "weighted distribution has {} position(s), need at least 2",
                total
            )));
        }

        let first = rng.gen_range(0..total);
        let mut second = rng.gen_range(0..total - 1);
        if second >= first {
            second += 1;
        }

        let resolve = |position| {
            self.index_at(position).ok_or_else(|| {
                OperatorError::SelectionFailed(format!("position {} out of range", position))
            })
        };
        Ok((resolve(first)?, resolve(second)?))
    }
}

/// Build the weighted distribution for a set of records
pub fn weighted_distribution(records: &[FitnessRecord]) -> WeightedDistribution {
    WeightedDistribution::from_records(records)
}

/// Roulette wheel selection (fitness proportionate)
///
/// Selection probability of a record is proportional to `score + 1`.
#[derive(Clone, Debug, Default)]
pub struct FitnessProportionateSelection;

impl FitnessProportionateSelection {
    /// Create a new fitness-proportionate selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for FitnessProportionateSelection {
    fn select_pair<R: Rng>(
        &self,
        records: &[FitnessRecord],
        rng: &mut R,
    ) -> Result<(usize, usize), OperatorError> {
        weighted_distribution(records).sample_pair(rng)
    }
}
