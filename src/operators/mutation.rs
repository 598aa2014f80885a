//! Mutation operators
//!
//! Repeated single-bit flip mutation for bit strings.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::bit_string::BitString;
use crate::operators::traits::MutationOperator;

/// Bit-flip mutation for bit strings
///
/// Performs `repeats` independent draws. Each draw picks an index uniformly
/// (with replacement, so the same bit can be hit twice and flip back) and
/// flips it with probability `flip_probability`.
#[derive(Clone, Debug, PartialEq)]
pub struct BitFlipMutation {
    /// Number of index draws per mutation
    pub repeats: usize,
    /// Probability that a drawn bit is flipped
    pub flip_probability: f64,
}

impl BitFlipMutation {
    /// Create a new bit-flip mutation
    pub fn new(repeats: usize, flip_probability: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&flip_probability) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "flip probability {} must be in [0, 1]",
                flip_probability
            )));
        }
        Ok(Self {
            repeats,
            flip_probability,
        })
    }
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self {
            repeats: 1,
            flip_probability: 0.5,
        }
    }
}

impl MutationOperator for BitFlipMutation {
    fn mutate<R: Rng>(&self, genome: &mut BitString, rng: &mut R) -> Result<(), OperatorError> {
        if self.repeats == 0 {
            return Ok(());
        }

        let n = genome.len();
        if n == 0 {
            return Err(OperatorError::EmptyIndividual);
        }

        for _ in 0..self.repeats {
            let index = rng.gen_range(0..n);
            if rng.gen::<f64>() < self.flip_probability {
                genome.flip(index);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_probability_is_identity() {
        let mut rng = StdRng::seed_from_u64(11);
        let mutation = BitFlipMutation::new(50, 0.0).unwrap();
        let original = BitString::generate(16, &mut rng);

        let mutated = mutation.mutated(&original, &mut rng).unwrap();
        assert_eq!(mutated, original);
    }

    #[test]
    fn test_single_certain_flip_changes_one_bit() {
        let mut rng = StdRng::seed_from_u64(11);
        let mutation = BitFlipMutation::new(1, 1.0).unwrap();
        let original = BitString::zeros(8);

        let mutated = mutation.mutated(&original, &mut rng).unwrap();
        assert_eq!(mutated.hamming_distance(&original), 1);
    }

    #[test]
    fn test_certain_flips_on_single_bit_alternate() {
        // Every draw hits index 0, so parity of repeats decides the outcome
        let mut rng = StdRng::seed_from_u64(5);
        let original = BitString::zeros(1);

        let even = BitFlipMutation::new(4, 1.0).unwrap();
        assert_eq!(even.mutated(&original, &mut rng).unwrap(), original);

        let odd = BitFlipMutation::new(3, 1.0).unwrap();
        assert_eq!(odd.mutated(&original, &mut rng).unwrap(), BitString::ones(1));
    }

    #[test]
    fn test_zero_repeats_is_noop() {
        let mut rng = StdRng::seed_from_u64(0);
        let mutation = BitFlipMutation::new(0, 1.0).unwrap();

        let mut empty = BitString::default();
        assert!(mutation.mutate(&mut empty, &mut rng).is_ok());

        let original = BitString::ones(4);
        assert_eq!(mutation.mutated(&original, &mut rng).unwrap(), original);
    }

    #[test]
    fn test_empty_individual_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty = BitString::default();
        let err = BitFlipMutation::default()
            .mutate(&mut empty, &mut rng)
            .unwrap_err();
        assert_eq!(err, OperatorError::EmptyIndividual);
    }

    #[test]
    fn test_invalid_probability_is_rejected() {
        assert!(BitFlipMutation::new(1, 1.5).is_err());
        assert!(BitFlipMutation::new(1, -0.1).is_err());
        assert!(BitFlipMutation::new(1, f64::NAN).is_err());
    }

    #[test]
    fn test_default_parameters() {
        let mutation = BitFlipMutation::default();
        assert_eq!(mutation.repeats, 1);
        assert_relative_eq!(mutation.flip_probability, 0.5);
    }
}
