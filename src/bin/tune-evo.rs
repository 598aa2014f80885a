//! Console front end for interactive tune evolution
//!
//! Presents every candidate of a generation on the terminal, reads a rating
//! for each, shows the two best and asks whether to breed another
//! generation.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tune_evo::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "tune-evo", version, about = "Evolve bit-string tunes by rating them")]
struct Cli {
    /// TOML configuration file; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of candidates in the first generation
    #[arg(short = 'n', long)]
    population_size: Option<usize>,

    /// Number of genes per candidate
    #[arg(short = 'l', long)]
    genome_length: Option<usize>,

    /// Index draws per mutation
    #[arg(short = 'm', long)]
    num_mutations: Option<usize>,

    /// Probability that a drawn gene is flipped
    #[arg(short = 'p', long)]
    mutation_probability: Option<f64>,

    /// Stop after this many generations (0 = ask every time)
    #[arg(long)]
    max_generations: Option<usize>,

    /// Abort on ratings that are not non-negative integers instead of scoring them 0
    #[arg(long)]
    strict: bool,

    /// Seed for the random number generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn load_config(&self) -> Result<InteractiveGAConfig> {
        let mut config = match &self.config {
            Some(path) => InteractiveGAConfig::from_file(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => InteractiveGAConfig::default(),
        };

        if let Some(size) = self.population_size {
            config.population_size = size;
        }
        if let Some(length) = self.genome_length {
            config.genome_length = length;
        }
        if let Some(repeats) = self.num_mutations {
            config.mutation_repeats = repeats;
        }
        if let Some(probability) = self.mutation_probability {
            config.flip_probability = probability;
        }
        if let Some(max) = self.max_generations {
            config.max_generations = max;
        }
        if self.strict {
            config.invalid_score_policy = InvalidScorePolicy::Reject;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.load_config()?;
    info!("Configuration: {:?}", config);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut iga = InteractiveGA::from_config(config).context("building the algorithm")?;

    let stdin = io::stdin();
    let (mut rater, mut presenter, mut prompt) = Console::new(stdin.lock(), io::stdout()).split();

    let result = iga
        .run(&mut rater, &mut presenter, &mut prompt, &mut rng)
        .context("evolution aborted")?;

    println!();
    println!("=== Results ===");
    println!("Generations: {}", result.generations);
    println!("Stopped: {}", result.termination_reason);
    println!(
        "Best score history: {:?}",
        result.stats.best_score_history()
    );
    let means: Vec<String> = result
        .stats
        .mean_score_history()
        .iter()
        .map(|m| format!("{:.2}", m))
        .collect();
    println!("Mean score history: [{}]", means.join(", "));
    if let Some(best) = result.ranked.into_iter().next() {
        println!("Best score: {}", best.score);
        println!("Best tune:  {}", best.individual.into_genome());
    }

    Ok(())
}
