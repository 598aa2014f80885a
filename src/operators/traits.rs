//! Operator traits
//!
//! This module defines the operator seams of the engine: selection,
//! crossover and mutation over bit string genomes.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::bit_string::BitString;
use crate::population::record::FitnessRecord;

/// Selection operator trait
///
/// Picks breeding partners from a ranked set of fitness records.
pub trait SelectionOperator: Send + Sync {
    /// Select two parents
    ///
    /// Returns indices into `records`. The two indices may be equal.
    fn select_pair<R: Rng>(
        &self,
        records: &[FitnessRecord],
        rng: &mut R,
    ) -> Result<(usize, usize), OperatorError>;
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create two offspring.
/// Offspring are always freshly allocated.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(
        &self,
        parent1: &BitString,
        parent2: &BitString,
        rng: &mut R,
    ) -> Result<(BitString, BitString), OperatorError>;
}

/// Mutation operator trait
///
/// Applies random changes to a genome.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to an owned genome in place
    fn mutate<R: Rng>(&self, genome: &mut BitString, rng: &mut R) -> Result<(), OperatorError>;

    /// Return a mutated copy, leaving `genome` untouched
    fn mutated<R: Rng>(&self, genome: &BitString, rng: &mut R) -> Result<BitString, OperatorError> {
        let mut copy = genome.clone();
        self.mutate(&mut copy, rng)?;
        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Swaps parents
    struct MockCrossover;

    impl CrossoverOperator for MockCrossover {
        fn crossover<R: Rng>(
            &self,
            parent1: &BitString,
            parent2: &BitString,
            _rng: &mut R,
        ) -> Result<(BitString, BitString), OperatorError> {
            Ok((parent2.clone(), parent1.clone()))
        }
    }

    // Flips every bit
    struct MockMutation;

    impl MutationOperator for MockMutation {
        fn mutate<R: Rng>(
            &self,
            genome: &mut BitString,
            _rng: &mut R,
        ) -> Result<(), OperatorError> {
            *genome = genome.complement();
            Ok(())
        }
    }

    #[test]
    fn test_mock_crossover() {
        let mut rng = StdRng::seed_from_u64(0);
        let parent1 = BitString::ones(3);
        let parent2 = BitString::zeros(3);

        let (child1, child2) = MockCrossover.crossover(&parent1, &parent2, &mut rng).unwrap();
        assert_eq!(child1, parent2);
        assert_eq!(child2, parent1);
    }

    #[test]
    fn test_mutated_leaves_original_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let original = BitString::zeros(4);

        let mutated = MockMutation.mutated(&original, &mut rng).unwrap();
        assert_eq!(original, BitString::zeros(4));
        assert_eq!(mutated, BitString::ones(4));
    }
}
