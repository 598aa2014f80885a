//! Individual wrapper type
//!
//! This module provides the Individual type that pairs a genome with a stable
//! identity. Fitness attribution always goes through the identity, never
//! through genome equality, so value-equal duplicates stay distinguishable.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bit_string::BitString;

/// Unique identifier for an individual within a run
///
/// Assigned when the individual is created and never reused. Elites carried
/// into the next generation keep their identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct IndividualId(pub u64);

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Individual({})", self.0)
    }
}

/// Monotonic source of [`IndividualId`]s
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator that hands out ids starting at `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Allocate the next identifier
    pub fn next_id(&mut self) -> IndividualId {
        let id = IndividualId(self.next);
        self.next += 1;
        id
    }
}

/// An individual in the population
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Stable identity of this individual
    pub id: IndividualId,
    /// The genome of this individual
    pub genome: BitString,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl Individual {
    /// Create a new individual born in generation 0
    pub fn new(id: IndividualId, genome: BitString) -> Self {
        Self {
            id,
            genome,
            birth_generation: 0,
        }
    }

    /// Create a new individual with birth generation
    pub fn with_generation(id: IndividualId, genome: BitString, generation: usize) -> Self {
        Self {
            id,
            genome,
            birth_generation: generation,
        }
    }

    /// Generate a random individual with a genome of `length` bits
    pub fn random<R: Rng>(
        ids: &mut IdAllocator,
        length: usize,
        generation: usize,
        rng: &mut R,
    ) -> Self {
        Self::with_generation(ids.next_id(), BitString::generate(length, rng), generation)
    }

    /// Get a reference to the genome
    pub fn genome(&self) -> &BitString {
        &self.genome
    }

    /// Take the genome out of this individual
    pub fn into_genome(self) -> BitString {
        self.genome
    }

    /// Age of this individual (generations since birth)
    pub fn age(&self, current_generation: usize) -> usize {
        current_generation.saturating_sub(self.birth_generation)
    }
}
