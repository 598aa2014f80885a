//! Fitness provider traits
//!
//! Fitness comes from outside the engine, typically a human listening to a
//! decoded candidate and typing a rating. The engine only sees the
//! [`FitnessProvider`] trait and the score it returns.

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::population::individual::Individual;

/// Integer fitness score
///
/// Scores are non-negative; the engine assumes no upper bound.
pub type Score = u64;

/// Information handed to the provider alongside each individual
///
/// The engine treats this as opaque bookkeeping. Decoder parameters
/// (tempo, scale, ...) belong in the provider itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Generation being evaluated
    pub generation: usize,
    /// Position of the individual in this generation's shuffled order
    pub presentation_index: usize,
    /// Number of individuals being evaluated this generation
    pub population_size: usize,
}

/// Source of fitness scores
///
/// Called exactly once per individual per generation, synchronously. The call
/// may block for as long as it likes; the engine imposes no timeout.
pub trait FitnessProvider {
    /// Score a single individual
    ///
    /// Return [`EvaluationError::InvalidScore`] when the raw rating could not
    /// be turned into a score (the engine then applies its
    /// [`InvalidScorePolicy`]) and [`EvaluationError::Failed`] when the
    /// provider itself broke.
    fn evaluate(
        &mut self,
        individual: &Individual,
        context: &EvaluationContext,
    ) -> Result<Score, EvaluationError>;
}

impl<F> FitnessProvider for F
where
    F: FnMut(&Individual, &EvaluationContext) -> Result<Score, EvaluationError>,
{
    fn evaluate(
        &mut self,
        individual: &Individual,
        context: &EvaluationContext,
    ) -> Result<Score, EvaluationError> {
        self(individual, context)
    }
}

/// What to do when a provider reports an invalid score
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidScorePolicy {
    /// Substitute a score of zero and keep going
    #[default]
    DefaultToZero,
    /// Treat the invalid score as an evaluation failure
    Reject,
}

impl InvalidScorePolicy {
    /// Apply the policy to a raw provider result
    ///
    /// Returns the score to record, or the error to abort with.
    pub fn resolve(
        &self,
        result: Result<Score, EvaluationError>,
    ) -> Result<Resolved, EvaluationError> {
        match (result, self) {
            (Ok(score), _) => Ok(Resolved::Score(score)),
            (Err(EvaluationError::InvalidScore(raw)), Self::DefaultToZero) => {
                Ok(Resolved::Substituted { raw, score: 0 })
            }
            (Err(EvaluationError::InvalidScore(raw)), Self::Reject) => Err(
                EvaluationError::Failed(format!("invalid score {:?} rejected", raw)),
            ),
            (Err(err @ EvaluationError::Failed(_)), _) => Err(err),
        }
    }
}

/// Outcome of resolving a provider result
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// The provider returned a valid score
    Score(Score),
    /// The provider's value was invalid and a default was substituted
    Substituted {
        /// The raw value the provider could not interpret
        raw: String,
        /// The substituted score
        score: Score,
    },
}

impl Resolved {
    /// The score to record
    pub fn score(&self) -> Score {
        match self {
            Self::Score(score) | Self::Substituted { score, .. } => *score,
        }
    }
}

/// Parse a human-entered rating
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer is an [`EvaluationError::InvalidScore`].
pub fn parse_rating(input: &str) -> Result<Score, EvaluationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<Score>()
        .map_err(|_| EvaluationError::InvalidScore(trimmed.to_string()))
}
