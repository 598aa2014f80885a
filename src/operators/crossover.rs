//! Crossover operators
//!
//! One-point crossover for bit strings.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::bit_string::BitString;
use crate::operators::traits::CrossoverOperator;

/// One-point crossover for bit strings
///
/// Draws a split point `p` uniformly from `[1, len - 1]` and produces
/// `a[..p] ++ b[p..]` and `b[..p] ++ a[p..]`. Parents shorter than two genes
/// have no split point and are returned as copies.
#[derive(Clone, Debug, Default)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Create a new one-point crossover
    pub fn new() -> Self {
        Self
    }

    /// Recombine at a fixed crossover point
    ///
    /// `point` must lie in `[1, len - 1]`.
    pub fn cross_at(
        &self,
        parent1: &BitString,
        parent2: &BitString,
        point: usize,
    ) -> Result<(BitString, BitString), OperatorError> {
        check_lengths(parent1, parent2)?;

        let n = parent1.len();
        if point == 0 || point >= n {
            return Err(OperatorError::InvalidConfiguration(format!(
                "crossover point {} outside [1, {}]",
                point,
                n.saturating_sub(1)
            )));
        }

        Ok((parent1.splice(parent2, point), parent2.splice(parent1, point)))
    }
}

impl CrossoverOperator for OnePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &BitString,
        parent2: &BitString,
        rng: &mut R,
    ) -> Result<(BitString, BitString), OperatorError> {
        check_lengths(parent1, parent2)?;

        let n = parent1.len();
        if n < 2 {
            return Ok((parent1.clone(), parent2.clone()));
        }

        let point = rng.gen_range(1..n);
        self.cross_at(parent1, parent2, point)
    }
}

fn check_lengths(parent1: &BitString, parent2: &BitString) -> Result<(), OperatorError> {
    if parent1.len() != parent2.len() {
        return Err(OperatorError::LengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        });
    }
    Ok(())
}
