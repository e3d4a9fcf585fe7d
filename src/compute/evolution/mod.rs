//! Genetic algorithm that evolves candidate strings toward a target.
//!
//! # Overview
//!
//! The evolutionary engine consists of:
//!
//! - **Fitness** (`fitness`): Counts genes matching the target position by position
//! - **Candidates** (`candidate`): Immutable genomes with a memoized score
//! - **Populations** (`population`): Fitness-sorted generations, culling and breeding
//! - **Search** (`search`): The generation loop that runs until an exact match
//! - **Randomness** (`rng`): Injectable random source for every draw
//!
//! # Example
//!
//! ```rust,no_run
//! use genetic_monkeys::compute::evolution::EvolutionEngine;
//! use genetic_monkeys::schema::EvolutionConfig;
//!
//! let mut engine = EvolutionEngine::new("TO BE OR NOT TO BE", EvolutionConfig::default())?;
//! let result = engine.run_with_callback(|report| {
//!     println!("Generation {}: {}", report.generation, report.fittest_genome);
//! })?;
//!
//! println!("Matched after {} generations", result.stats.generations);
//! # Ok::<(), genetic_monkeys::compute::evolution::EvolutionError>(())
//! ```
//!
//! # Generational step
//!
//! Each generation keeps the fittest `floor(N * survival_threshold)` candidates
//! and fills the remaining slots with offspring of two survivors picked
//! uniformly with replacement. Each offspring gene is either a random symbol
//! (with probability `mutation_rate`) or copied from a parent chosen 50/50.

mod candidate;
mod fitness;
mod population;
mod rng;
mod search;

use crate::schema::ConfigError;

pub use candidate::{Candidate, FitnessScore};
pub use fitness::FitnessEvaluator;
pub use population::Population;
pub use rng::{GenomeRng, RandomSource};
pub use search::EvolutionEngine;

/// Error type for evolution operations.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("Genome length mismatch: {left} genes vs {right} genes")]
    GenomeLengthMismatch { left: usize, right: usize },
    #[error("Gene index {index} out of range for genome of length {length}")]
    GeneIndexOutOfRange { index: usize, length: usize },
    #[error("Population must contain at least one candidate")]
    EmptyPopulation,
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
