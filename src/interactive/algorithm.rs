//! Interactive Genetic Algorithm implementation
//!
//! This module provides [`InteractiveGA`], the generational loop that ties the
//! operators together with human-in-the-loop evaluation:
//!
//! 1. **Evaluating**: shuffle the population and ask the fitness provider for
//!    a score for every individual, in the shuffled order.
//! 2. **Ranking**: stable sort by score, descending.
//! 3. **Breeding**: carry the top two over unchanged, then run
//!    `floor(N/2) - 1` rounds of selection, crossover and mutation, each
//!    producing two children.
//! 4. **Presenting**: show the top two to the presenter.
//! 5. **Awaiting continue**: ask whether to go on.
//!
//! The next generation therefore holds `2 + 2 * (floor(N/2) - 1)`
//! individuals, which is `N - 1` for odd `N`. The population is allowed to
//! drift to that size; see [`next_generation_size`].

use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{EvolutionStats, GenerationStats, TimingStats};
use crate::error::{EvoResult, EvolutionError, OperatorError};
use crate::fitness::traits::{EvaluationContext, FitnessProvider, InvalidScorePolicy, Resolved};
use crate::genome::bit_string::BitString;
use crate::interactive::traits::{ContinueSignal, GenerationPhase, Presenter};
use crate::operators::crossover::OnePointCrossover;
use crate::operators::mutation::BitFlipMutation;
use crate::operators::selection::FitnessProportionateSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::individual::{IdAllocator, Individual};
use crate::population::record::{rank_records, FitnessRecord};

/// Number of top-ranked individuals copied unchanged into the next generation
pub const ELITE_COUNT: usize = 2;

/// Number of top-ranked individuals shown to the presenter each generation
pub const PRESENTED_COUNT: usize = 2;

/// Number of breeding rounds for a ranked population of `n`
pub fn breeding_iterations(n: usize) -> usize {
    (n / 2).saturating_sub(1)
}

/// Size of the generation bred from a ranked population of `n`
///
/// `2 + 2 * (floor(n/2) - 1)` for `n >= 2`; smaller populations only carry
/// over their elites.
pub fn next_generation_size(n: usize) -> usize {
    n.min(ELITE_COUNT) + 2 * breeding_iterations(n)
}

/// Configuration for Interactive GA
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveGAConfig {
    /// Initial population size
    pub population_size: usize,
    /// Number of genes per individual
    pub genome_length: usize,
    /// Index draws per mutation
    pub mutation_repeats: usize,
    /// Probability that a drawn gene is flipped
    pub flip_probability: f64,
    /// Handling of ratings the provider could not interpret
    pub invalid_score_policy: InvalidScorePolicy,
    /// Maximum generations (0 = unlimited, stop only when asked)
    pub max_generations: usize,
}

impl Default for InteractiveGAConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            genome_length: 64,
            mutation_repeats: 2,
            flip_probability: 0.5,
            invalid_score_policy: InvalidScorePolicy::DefaultToZero,
            max_generations: 0,
        }
    }
}

impl InteractiveGAConfig {
    /// Check the configuration for values the engine cannot run with
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size < 2 {
            return Err(EvolutionError::Configuration(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.genome_length == 0 {
            return Err(EvolutionError::Configuration(
                "genome_length must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(EvolutionError::Configuration(format!(
                "flip_probability must be in [0, 1], got {}",
                self.flip_probability
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(source: &str) -> EvoResult<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|e| EvolutionError::Configuration(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> EvoResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            EvolutionError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    /// Mutation operator described by this configuration
    pub fn mutation(&self) -> EvoResult<BitFlipMutation> {
        Ok(BitFlipMutation::new(
            self.mutation_repeats,
            self.flip_probability,
        )?)
    }
}

/// Everything produced by one evaluate-rank-breed cycle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Generation that was evaluated
    pub generation: usize,
    /// Fitness records, best first
    pub ranked: Vec<FitnessRecord>,
    /// Elites followed by offspring
    pub next_generation: Vec<Individual>,
    /// Statistics for the evaluated generation
    pub stats: GenerationStats,
}

impl GenerationOutcome {
    /// Top-ranked records, best first
    pub fn best(&self, count: usize) -> &[FitnessRecord] {
        &self.ranked[..count.min(self.ranked.len())]
    }
}

/// Final result of interactive evolution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InteractiveResult {
    /// Ranked records of the last evaluated generation
    pub ranked: Vec<FitnessRecord>,
    /// Generation bred from the last evaluation
    pub next_generation: Vec<Individual>,
    /// Number of generations evaluated
    pub generations: usize,
    /// Per-generation statistics
    pub stats: EvolutionStats,
    /// Termination reason
    pub termination_reason: String,
}

impl InteractiveResult {
    /// Best record of the last evaluated generation
    pub fn best(&self) -> Option<&FitnessRecord> {
        self.ranked.first()
    }
}

/// Breed the next generation from a ranked population
///
/// The first [`ELITE_COUNT`] records are copied unchanged (keeping their
/// identity). Each breeding round selects two parents by position in
/// `ranked`, so fitness is attributed by record and never by genome value.
/// Children receive fresh ids from `ids`.
pub fn breed_next_generation<S, C, M, R>(
    ranked: &[FitnessRecord],
    selection: &S,
    crossover: &C,
    mutation: &M,
    ids: &mut IdAllocator,
    birth_generation: usize,
    rng: &mut R,
) -> Result<Vec<Individual>, OperatorError>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
    R: Rng,
{
    let mut next = Vec::with_capacity(next_generation_size(ranked.len()));
    next.extend(
        ranked
            .iter()
            .take(ELITE_COUNT)
            .map(|record| record.individual.clone()),
    );

    for _ in 0..breeding_iterations(ranked.len()) {
        let (i, j) = selection.select_pair(ranked, rng)?;
        let parent1 = &ranked[i].individual;
        let parent2 = &ranked[j].individual;

        let (mut child1, mut child2) = crossover.crossover(&parent1.genome, &parent2.genome, rng)?;
        mutation.mutate(&mut child1, rng)?;
        mutation.mutate(&mut child2, rng)?;

        let child1 = Individual::with_generation(ids.next_id(), child1, birth_generation);
        let child2 = Individual::with_generation(ids.next_id(), child2, birth_generation);
        debug!(
            "{} x {} -> {}, {}",
            parent1.id, parent2.id, child1.id, child2.id
        );
        next.push(child1);
        next.push(child2);
    }

    Ok(next)
}

/// Generational Interactive Genetic Algorithm
///
/// Owns the population and the generation counter. Evaluation is delegated
/// to a [`FitnessProvider`], which may block on a human for as long as it
/// needs.
///
/// # Example
///
/// ```rust,ignore
/// use tune_evo::prelude::*;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let mut iga = InteractiveGA::builder()
///     .population_size(8)
///     .genome_length(32)
///     .build()?;
///
/// let result = iga.run(
///     &mut |ind: &Individual, _: &EvaluationContext| Ok(ind.genome.count_ones() as Score),
///     &mut |record: &FitnessRecord, rank: usize| println!("#{} {}", rank + 1, record.individual.genome),
///     &mut |generation: usize| generation < 10,
///     &mut rng,
/// )?;
/// ```
pub struct InteractiveGA<
    S = FitnessProportionateSelection,
    C = OnePointCrossover,
    M = BitFlipMutation,
> {
    config: InteractiveGAConfig,
    selection: S,
    crossover: C,
    mutation: M,
    population: Vec<Individual>,
    generation: usize,
    ids: IdAllocator,
    phase: GenerationPhase,
    stats: EvolutionStats,
}

impl InteractiveGA {
    /// Create a builder with default configuration
    pub fn builder() -> InteractiveGABuilder {
        InteractiveGABuilder::new()
    }

    /// Create an InteractiveGA with the standard operators
    ///
    /// The mutation operator is taken from the configuration.
    pub fn from_config(config: InteractiveGAConfig) -> EvoResult<Self> {
        let mutation = config.mutation()?;
        Self::with_operators(
            config,
            FitnessProportionateSelection::new(),
            OnePointCrossover::new(),
            mutation,
        )
    }
}

impl<S, C, M> InteractiveGA<S, C, M>
where
    S: SelectionOperator,
    C: CrossoverOperator,
    M: MutationOperator,
{
    /// Create an InteractiveGA with custom operators
    pub fn with_operators(
        config: InteractiveGAConfig,
        selection: S,
        crossover: C,
        mutation: M,
    ) -> EvoResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            selection,
            crossover,
            mutation,
            population: Vec::new(),
            generation: 0,
            ids: IdAllocator::new(),
            phase: GenerationPhase::Evaluating,
            stats: EvolutionStats::new(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &InteractiveGAConfig {
        &self.config
    }

    /// Current population, in its most recent order
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Current generation number (0-based)
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current phase of the generation cycle
    pub fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Statistics recorded so far
    pub fn stats(&self) -> &EvolutionStats {
        &self.stats
    }

    fn set_phase(&mut self, phase: GenerationPhase) {
        debug!(
            "Generation {}: {:?} -> {:?}",
            self.generation, self.phase, phase
        );
        self.phase = phase;
    }

    /// Generate the initial population of random individuals
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) {
        let length = self.config.genome_length;
        let generation = self.generation;
        self.population = (0..self.config.population_size)
            .map(|_| Individual::random(&mut self.ids, length, generation, rng))
            .collect();
        info!(
            "Initialized population of {} individuals with {} genes",
            self.population.len(),
            length
        );
    }

    /// Seed the population with known genomes
    ///
    /// Every genome must have the configured length.
    pub fn seed_population(&mut self, genomes: Vec<BitString>) -> EvoResult<()> {
        if genomes.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        if let Some(bad) = genomes
            .iter()
            .find(|g| g.len() != self.config.genome_length)
        {
            return Err(OperatorError::LengthMismatch {
                left: self.config.genome_length,
                right: bad.len(),
            }
            .into());
        }

        let generation = self.generation;
        self.population = genomes
            .into_iter()
            .map(|genome| Individual::with_generation(self.ids.next_id(), genome, generation))
            .collect();
        Ok(())
    }

    /// Evaluate, rank and breed the current population
    ///
    /// The population is shuffled in place before evaluation; nothing else
    /// about the engine's state changes until [`advance`](Self::advance) is
    /// called, and the outcome's statistics are only recorded then. If the
    /// provider fails, the generation is aborted and the population keeps
    /// its members in shuffled order.
    pub fn run_generation<P, R>(
        &mut self,
        provider: &mut P,
        rng: &mut R,
    ) -> EvoResult<GenerationOutcome>
    where
        P: FitnessProvider + ?Sized,
        R: Rng,
    {
        if self.population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        self.set_phase(GenerationPhase::Evaluating);
        self.population.shuffle(rng);

        let eval_start = Instant::now();
        let (mut records, invalid_scores) = self.evaluate(provider)?;
        let eval_time = eval_start.elapsed();

        self.set_phase(GenerationPhase::Ranking);
        rank_records(&mut records);

        self.set_phase(GenerationPhase::Breeding);
        let breed_start = Instant::now();
        let next_generation = breed_next_generation(
            &records,
            &self.selection,
            &self.crossover,
            &self.mutation,
            &mut self.ids,
            self.generation + 1,
            rng,
        )?;
        let breed_time = breed_start.elapsed();

        let stats = GenerationStats::from_records(&records, self.generation, invalid_scores)
            .with_timing(
                TimingStats::new()
                    .with_evaluation(eval_time)
                    .with_breeding(breed_time),
            );
        info!(
            "Generation {} evaluated: best = {}, mean = {:.2}, diversity = {:.3}, next size = {}",
            self.generation,
            stats.best_score,
            stats.mean_score,
            stats.diversity,
            next_generation.len()
        );
        Ok(GenerationOutcome {
            generation: self.generation,
            ranked: records,
            next_generation,
            stats,
        })
    }

    /// Score every individual in current order
    ///
    /// Returns the records in evaluation order and the number of invalid
    /// scores that were replaced.
    fn evaluate<P>(&self, provider: &mut P) -> EvoResult<(Vec<FitnessRecord>, usize)>
    where
        P: FitnessProvider + ?Sized,
    {
        let population_size = self.population.len();
        let policy = self.config.invalid_score_policy;
        let mut records = Vec::with_capacity(population_size);
        let mut invalid_scores = 0;

        for (index, individual) in self.population.iter().enumerate() {
            let context = EvaluationContext {
                generation: self.generation,
                presentation_index: index,
                population_size,
            };

            let resolved = policy
                .resolve(provider.evaluate(individual, &context))
                .map_err(|err| EvolutionError::EvaluationFailed {
                    presentation_index: index,
                    reason: err.to_string(),
                })?;

            if let Resolved::Substituted { raw, score } = &resolved {
                warn!(
                    "Invalid score {:?} for candidate {} replaced by {}",
                    raw, index, score
                );
                invalid_scores += 1;
            }

            records.push(FitnessRecord::new(
                individual.clone(),
                resolved.score(),
                index,
            ));
        }

        Ok((records, invalid_scores))
    }

    /// Show the top-ranked records of an outcome
    pub fn present<P>(&mut self, outcome: &GenerationOutcome, presenter: &mut P)
    where
        P: Presenter + ?Sized,
    {
        self.set_phase(GenerationPhase::Presenting);
        for (rank, record) in outcome.best(PRESENTED_COUNT).iter().enumerate() {
            presenter.show(record, rank);
        }
    }

    /// Record the outcome's statistics, adopt the bred generation and move
    /// to the next generation number
    pub fn advance(&mut self, outcome: GenerationOutcome) {
        self.stats.record(outcome.stats);
        self.population = outcome.next_generation;
        self.generation += 1;
        self.set_phase(GenerationPhase::Evaluating);
    }

    /// Run generations until the continue signal says stop
    ///
    /// Initializes a random population first if none has been seeded. When
    /// `max_generations` is set, the run also stops after that many
    /// generations without asking.
    pub fn run<P, Pr, Sig, R>(
        &mut self,
        provider: &mut P,
        presenter: &mut Pr,
        signal: &mut Sig,
        rng: &mut R,
    ) -> EvoResult<InteractiveResult>
    where
        P: FitnessProvider + ?Sized,
        Pr: Presenter + ?Sized,
        Sig: ContinueSignal + ?Sized,
        R: Rng,
    {
        if self.population.is_empty() {
            self.initialize(rng);
        }

        loop {
            let outcome = self.run_generation(provider, rng)?;
            self.present(&outcome, presenter);

            self.set_phase(GenerationPhase::AwaitingContinue);
            let max = self.config.max_generations;
            let reason = if max > 0 && outcome.generation + 1 >= max {
                Some(format!("Reached maximum generations ({})", max))
            } else if !signal.ask(outcome.generation) {
                Some("Stopped by user".to_string())
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    info!("{} after generation {}", reason, outcome.generation);
                    self.set_phase(GenerationPhase::Done);
                    self.stats.record(outcome.stats);
                    self.stats.set_termination_reason(&reason);
                    return Ok(InteractiveResult {
                        generations: outcome.generation + 1,
                        ranked: outcome.ranked,
                        next_generation: outcome.next_generation,
                        stats: self.stats.clone(),
                        termination_reason: reason,
                    });
                }
                None => self.advance(outcome),
            }
        }
    }
}

/// Builder for InteractiveGA with the standard operators
#[derive(Clone, Debug, Default)]
pub struct InteractiveGABuilder {
    config: InteractiveGAConfig,
}

impl InteractiveGABuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: InteractiveGAConfig) -> Self {
        Self { config }
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the genome length
    pub fn genome_length(mut self, length: usize) -> Self {
        self.config.genome_length = length;
        self
    }

    /// Set the number of index draws per mutation
    pub fn mutation_repeats(mut self, repeats: usize) -> Self {
        self.config.mutation_repeats = repeats;
        self
    }

    /// Set the per-draw flip probability
    pub fn flip_probability(mut self, probability: f64) -> Self {
        self.config.flip_probability = probability;
        self
    }

    /// Set the invalid score policy
    pub fn invalid_score_policy(mut self, policy: InvalidScorePolicy) -> Self {
        self.config.invalid_score_policy = policy;
        self
    }

    /// Set maximum generations (0 = unlimited)
    pub fn max_generations(mut self, max: usize) -> Self {
        self.config.max_generations = max;
        self
    }

    /// Build the InteractiveGA
    pub fn build(self) -> EvoResult<InteractiveGA> {
        InteractiveGA::from_config(self.config)
    }
}
