//! Interactive Genetic Algorithm Example
//!
//! This example shows how to drive the interactive GA without a terminal.
//! Instead of a person, a simulated listener rates each tune by how closely
//! it matches a melody they have in mind, and now and then mistypes a
//! rating.
//!
//! In a real application the rater would play the decoded tune and read the
//! rating from the user, as the `tune-evo` binary does.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tune_evo::prelude::*;

/// Simulates a listener with a favourite melody in mind
struct SimulatedListener {
    target: BitString,
    rng: StdRng,
    typo_rate: f64,
}

impl SimulatedListener {
    fn new(target: BitString, seed: u64) -> Self {
        Self {
            target,
            rng: StdRng::seed_from_u64(seed),
            typo_rate: 0.05,
        }
    }

    /// Rate on a 0-5 scale by similarity to the target
    fn rate(&self, genome: &BitString) -> Score {
        let length = self.target.len().max(1);
        let matching = length - self.target.hamming_distance(genome);
        (matching * 5 / length) as Score
    }
}

impl FitnessProvider for SimulatedListener {
    fn evaluate(
        &mut self,
        individual: &Individual,
        _context: &EvaluationContext,
    ) -> Result<Score, EvaluationError> {
        if self.rng.gen::<f64>() < self.typo_rate {
            return parse_rating("five");
        }
        Ok(self.rate(&individual.genome))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Interactive Genetic Algorithm Demo ===\n");

    let mut rng = StdRng::seed_from_u64(42);

    const LENGTH: usize = 24;
    let target = BitString::generate(LENGTH, &mut rng);
    let mut listener = SimulatedListener::new(target.clone(), 7);

    println!("Listener's favourite melody: {}\n", target);

    let mut iga = InteractiveGA::builder()
        .population_size(12)
        .genome_length(LENGTH)
        .mutation_repeats(2)
        .flip_probability(0.5)
        .max_generations(15)
        .build()?;

    println!(
        "Configuration: {} individuals, {} genes, {} generations max\n",
        iga.config().population_size,
        iga.config().genome_length,
        iga.config().max_generations
    );

    let result = iga.run(
        &mut listener,
        &mut |record: &FitnessRecord, rank: usize| {
            if rank == 0 {
                println!(
                    "  best: {} (score {}, candidate {})",
                    record.individual.genome, record.score, record.presentation_index
                );
            }
        },
        &mut |_generation: usize| true,
        &mut rng,
    )?;

    println!("\n=== Evolution Complete ===");
    println!("Reason: {}", result.termination_reason);
    println!("Generations: {}", result.generations);
    println!("Final population size: {}", result.next_generation.len());
    for stats in &result.stats.generations {
        println!(
            "  gen {:>2}: best = {}, mean = {:.2}, diversity = {:.3}, invalid = {}",
            stats.generation,
            stats.best_score,
            stats.mean_score,
            stats.diversity,
            stats.invalid_scores
        );
    }

    // Stepping one generation at a time gives the caller full control over
    // presentation and when to adopt the bred generation.
    println!("\n=== Manual Stepping Demo ===\n");

    let mut iga = InteractiveGA::builder()
        .population_size(8)
        .genome_length(LENGTH)
        .build()?;
    iga.seed_population(vec![target.complement(); 8])?;

    for _ in 0..5 {
        let outcome = iga.run_generation(&mut listener, &mut rng)?;
        let mut best = Vec::new();
        iga.present(&outcome, &mut |record: &FitnessRecord, _rank: usize| {
            best.push(record.score)
        });
        println!(
            "Generation {}: top scores {:?}, next size {}",
            outcome.generation,
            best,
            outcome.next_generation.len()
        );
        iga.advance(outcome);
    }

    Ok(())
}
