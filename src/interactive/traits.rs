//! Interactive collaborator traits
//!
//! Besides the [`FitnessProvider`](crate::fitness::traits::FitnessProvider),
//! an interactive run talks to two more collaborators: a [`Presenter`] that
//! shows the best candidates of a generation back to the human, and a
//! [`ContinueSignal`] that decides whether another generation is bred.
//!
//! Decoding a genome into something audible and persisting it are the
//! presenter's business; the engine only hands over records.

use serde::{Deserialize, Serialize};

use crate::population::record::FitnessRecord;

/// Shows a ranked candidate to the evaluator
pub trait Presenter {
    /// Present `record`, which is ranked `rank` (0 = best) this generation
    ///
    /// `record.presentation_index` is the position at which the candidate was
    /// shown during evaluation, so the human can recognise it.
    fn show(&mut self, record: &FitnessRecord, rank: usize);
}

impl<F> Presenter for F
where
    F: FnMut(&FitnessRecord, usize),
{
    fn show(&mut self, record: &FitnessRecord, rank: usize) {
        self(record, rank)
    }
}

/// Asks whether evolution should continue after a generation
pub trait ContinueSignal {
    /// Return `true` to breed another generation, `false` to stop
    ///
    /// May block until the human answers.
    fn ask(&mut self, generation: usize) -> bool;
}

impl<F> ContinueSignal for F
where
    F: FnMut(usize) -> bool,
{
    fn ask(&mut self, generation: usize) -> bool {
        self(generation)
    }
}

/// Phase of the per-generation cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationPhase {
    /// Shuffling and collecting scores from the fitness provider
    Evaluating,
    /// Sorting records by score
    Ranking,
    /// Copying elites and breeding offspring
    Breeding,
    /// Showing the best candidates
    Presenting,
    /// Waiting for the continue/stop decision
    AwaitingContinue,
    /// Stopped
    Done,
}

impl GenerationPhase {
    /// Returns a human-readable description of this phase
    pub fn description(&self) -> &'static str {
        match self {
            Self::Evaluating => "Collecting ratings",
            Self::Ranking => "Ranking candidates",
            Self::Breeding => "Breeding next generation",
            Self::Presenting => "Presenting best candidates",
            Self::AwaitingContinue => "Waiting for continue/stop decision",
            Self::Done => "Evolution finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::bit_string::BitString;
    use crate::population::individual::{Individual, IndividualId};

    #[test]
    fn test_closure_presenter() {
        let mut shown = Vec::new();
        let mut presenter = |record: &FitnessRecord, rank: usize| {
            shown.push((record.id(), rank));
        };
        let record = FitnessRecord::new(Individual::new(IndividualId(4), BitString::zeros(2)), 3, 1);
        presenter.show(&record, 0);
        assert_eq!(shown, vec![(IndividualId(4), 0)]);
    }

    #[test]
    fn test_closure_continue_signal() {
        let mut signal = |generation: usize| generation < 2;
        assert!(signal.ask(0));
        assert!(!signal.ask(2));
    }

    #[test]
    fn test_phase_description() {
        assert_eq!(GenerationPhase::Done.description(), "Evolution finished");
    }
}
