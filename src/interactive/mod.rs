//! Interactive Genetic Algorithm (IGA) module
//!
//! This module provides support for human-in-the-loop evolution, where the
//! fitness of every candidate is a rating given by a person listening to it.
//!
//! # Overview
//!
//! Each generation the population is shuffled and presented one candidate
//! at a time to a [`FitnessProvider`](crate::fitness::traits::FitnessProvider).
//! The ratings are ranked, the two best candidates survive unchanged, the
//! rest of the next generation is bred by fitness-proportionate selection,
//! one-point crossover and bit-flip mutation, and the two best candidates
//! are presented back before asking whether to continue.
//!
//! # Example
//!
//! ```rust,ignore
//! use tune_evo::prelude::*;
//! use std::io;
//!
//! let stdin = io::stdin();
//! let (mut rater, mut presenter, mut prompt) =
//!     Console::new(stdin.lock(), io::stdout()).split();
//!
//! let mut iga = InteractiveGA::builder()
//!     .population_size(10)
//!     .genome_length(64)
//!     .build()?;
//!
//! let result = iga.run(&mut rater, &mut presenter, &mut prompt, &mut rng)?;
//! println!("Stopped after {} generations", result.generations);
//! ```

pub mod algorithm;
pub mod console;
pub mod traits;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::algorithm::{
        breed_next_generation, next_generation_size, GenerationOutcome, InteractiveGA,
        InteractiveGABuilder, InteractiveGAConfig, InteractiveResult, ELITE_COUNT,
        PRESENTED_COUNT,
    };
    pub use super::console::{Console, ConsolePresenter, ConsolePrompt, ConsoleRater};
    pub use super::traits::{ContinueSignal, GenerationPhase, Presenter};
}
