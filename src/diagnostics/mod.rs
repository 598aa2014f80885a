//! Diagnostics and statistics
//!
//! This module provides per-generation statistics for interactive runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fitness::traits::Score;
use crate::population::record::FitnessRecord;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Number of individuals evaluated
    pub population_size: usize,
    /// Best score in this generation
    pub best_score: Score,
    /// Worst score in this generation
    pub worst_score: Score,
    /// Mean score
    pub mean_score: f64,
    /// Number of ratings replaced by the invalid-score policy
    pub invalid_scores: usize,
    /// Mean pairwise Hamming distance, normalised by genome length
    pub diversity: f64,
    /// Timing information
    pub timing: TimingStats,
}

/// Timing statistics
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    /// Time spent waiting on the fitness provider (ms)
    pub evaluation_ms: f64,
    /// Time spent on selection, crossover and mutation (ms)
    pub breeding_ms: f64,
}

impl TimingStats {
    /// Create new timing stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Set evaluation time
    pub fn with_evaluation(mut self, duration: Duration) -> Self {
        self.evaluation_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// Set breeding time
    pub fn with_breeding(mut self, duration: Duration) -> Self {
        self.breeding_ms = duration.as_secs_f64() * 1000.0;
        self
    }
}

impl GenerationStats {
    /// Compute statistics from a generation's fitness records
    pub fn from_records(records: &[FitnessRecord], generation: usize, invalid_scores: usize) -> Self {
        let scores: Vec<Score> = records.iter().map(|r| r.score).collect();

        let best = scores.iter().copied().max().unwrap_or(0);
        let worst = scores.iter().copied().min().unwrap_or(0);
        let mean = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64
        };

        Self {
            generation,
            population_size: records.len(),
            best_score: best,
            worst_score: worst,
            mean_score: mean,
            invalid_scores,
            diversity: diversity(records),
            timing: TimingStats::default(),
        }
    }

    /// Set timing information
    pub fn with_timing(mut self, timing: TimingStats) -> Self {
        self.timing = timing;
        self
    }
}

fn diversity(records: &[FitnessRecord]) -> f64 {
    let n = records.len();
    let length = records.first().map(|r| r.individual.genome.len()).unwrap_or(0);
    if n < 2 || length == 0 {
        return 0.0;
    }

    let mut total = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            total += records[i]
                .individual
                .genome
                .hamming_distance(&records[j].individual.genome);
        }
    }
    let pairs = n * (n - 1) / 2;
    total as f64 / (pairs * length) as f64
}

/// Statistics collector for an entire run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the best score across all generations
    pub fn best_score(&self) -> Option<Score> {
        self.generations.iter().map(|g| g.best_score).max()
    }

    /// Get the history of best scores
    pub fn best_score_history(&self) -> Vec<Score> {
        self.generations.iter().map(|g| g.best_score).collect()
    }

    /// Get the history of mean scores
    pub fn mean_score_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_score).collect()
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }
}

pub mod prelude {
    pub use super::{EvolutionStats, GenerationStats, TimingStats};
}
