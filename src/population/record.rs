//! Fitness records
//!
//! A record pairs an individual with the score it received in one generation
//! and the position at which it was shown to the evaluator.

use serde::{Deserialize, Serialize};

use crate::fitness::traits::Score;
use crate::population::individual::{Individual, IndividualId};

/// An evaluated individual
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessRecord {
    /// The evaluated individual
    pub individual: Individual,
    /// Score returned by the fitness provider
    pub score: Score,
    /// Position in the shuffled evaluation order
    pub presentation_index: usize,
}

impl FitnessRecord {
    /// Create a new record
    pub fn new(individual: Individual, score: Score, presentation_index: usize) -> Self {
        Self {
            individual,
            score,
            presentation_index,
        }
    }

    /// Identity of the evaluated individual
    pub fn id(&self) -> IndividualId {
        self.individual.id
    }
}

/// Sort records by score, descending
///
/// The sort is stable: records with equal scores keep their relative
/// (evaluation) order.
pub fn rank_records(records: &mut [FitnessRecord]) {
    records.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Look up the score recorded for `id`
pub fn score_of(records: &[FitnessRecord], id: IndividualId) -> Option<Score> {
    records.iter().find(|r| r.id() == id).map(|r| r.score)
}
