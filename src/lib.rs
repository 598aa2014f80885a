//! # tune-evo
//!
//! An interactive genetic algorithm over fixed-length bit strings.
//!
//! Candidates are rated by a human, one at a time, and the ratings drive a
//! small generational loop: elitism of the two best, fitness-proportionate
//! pair selection, one-point crossover and bit-flip mutation. What a bit
//! string means (a melody, a rhythm, a synth patch) is left to the
//! presenter.
//!
//! ## Core Concepts
//!
//! - **Ratings as Fitness**: Non-negative integer scores collected through a [`FitnessProvider`](fitness::traits::FitnessProvider)
//! - **Positional Selection**: Parents are chosen by record, so duplicate genomes never share a score
//! - **Pluggable Collaborators**: Presenters and continue signals are traits, closures work out of the box
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tune_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = InteractiveGA::builder()
//!     .population_size(10)
//!     .genome_length(16)
//!     .mutation_repeats(2)
//!     .flip_probability(0.5)
//!     .max_generations(20)
//!     .build()?
//!     .run(&mut rater, &mut presenter, &mut |_| true, &mut rng)?;
//! ```

pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod interactive;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::interactive::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
