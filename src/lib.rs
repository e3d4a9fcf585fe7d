//! Genetic Monkeys - a genetic algorithm demonstration.
//!
//! Suppose monkeys are genetically predisposed to type certain keys, so that
//! selective breeding could eventually produce a monkey that types a desired
//! sequence. Each monkey's genome *is* the sequence it types: one gene per
//! character, drawn from the space character and the uppercase letters.
//!
//! Starting from a random population, every generation keeps the fittest
//! monkeys, breeds them to refill the population (with occasional random
//! mutations), and repeats until one monkey types the target exactly.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, alphabets, targets, and reporting types
//! - `compute`: The evolutionary engine and a random-sampling baseline
//!
//! # Example
//!
//! ```rust,no_run
//! use genetic_monkeys::{EvolutionConfig, EvolutionEngine};
//!
//! let config = EvolutionConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut engine = EvolutionEngine::new("METHINKS IT IS LIKE A WEASEL", config)?;
//! let result = engine.run()?;
//!
//! println!(
//!     "Matched {:?} after {} generations",
//!     result.best.fittest_genome, result.stats.generations
//! );
//! # Ok::<(), genetic_monkeys::EvolutionError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{EvolutionEngine, EvolutionError, RandomSampler};
pub use schema::{Alphabet, EvolutionConfig, EvolutionResult, GenerationReport, Target};
