//! Error types for tune-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for genetic operator failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperatorError {
    /// Crossover was invoked on parents of differing length
    #[error("Length mismatch: left parent has {left} genes, right parent has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// An index draw was required on a zero-length genome
    #[error("Cannot draw a gene index from an empty individual")]
    EmptyIndividual,

    /// Parent selection could not produce two distinct positions
    #[error("Selection failed: {0}")]
    SelectionFailed(String),

    /// Invalid operator configuration
    #[error("Invalid operator configuration: {0}")]
    InvalidConfiguration(String),
}

/// Error returned by a fitness provider for a single individual
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The provider produced something that is not a non-negative integer
    #[error("Invalid score: {0:?}")]
    InvalidScore(String),

    /// The provider itself failed (I/O, hardware, ...)
    #[error("Evaluation failed: {0}")]
    Failed(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Fitness evaluation failed; the generation was aborted
    #[error("Evaluation of candidate {presentation_index} failed: {reason}")]
    EvaluationFailed {
        /// Position of the candidate in the shuffled evaluation order
        presentation_index: usize,
        /// Provider-supplied reason
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_error_display() {
        let err = OperatorError::LengthMismatch { left: 4, right: 3 };
        assert_eq!(
            err.to_string(),
            "Length mismatch: left parent has 4 genes, right parent has 3"
        );

        let err = OperatorError::InvalidConfiguration("probability must be in [0, 1]".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid operator configuration: probability must be in [0, 1]"
        );
    }

    #[test]
    fn test_evaluation_error_display() {
        let err = EvaluationError::InvalidScore("five".to_string());
        assert_eq!(err.to_string(), "Invalid score: \"five\"");
    }

    #[test]
    fn test_evolution_error_from_operator_error() {
        let evo_err: EvolutionError = OperatorError::EmptyIndividual.into();
        assert!(matches!(
            evo_err,
            EvolutionError::Operator(OperatorError::EmptyIndividual)
        ));
    }

    #[test]
    fn test_evaluation_failed_display() {
        let err = EvolutionError::EvaluationFailed {
            presentation_index: 3,
            reason: "audio device lost".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Evaluation of candidate 3 failed: audio device lost"
        );
    }
}
