//! Reporting types produced by evolution and sampling runs.
//!
//! The library only produces these values; formatting and printing belong to
//! the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Average word length used by the typing-speed figure.
const CHARACTERS_PER_WORD: f64 = 5.0;

/// Cumulative count of candidates observed at each fitness score.
///
/// Buckets for every score `0..=genome_length` exist from construction and
/// iterate in ascending score order. Counts only ever grow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessDistribution {
    buckets: BTreeMap<usize, u64>,
}

impl FitnessDistribution {
    /// Create an empty distribution for genomes of the given length.
    pub fn new(genome_length: usize) -> Self {
        Self {
            buckets: (0..=genome_length).map(|score| (score, 0)).collect(),
        }
    }

    /// Count one more candidate at `score`.
    pub fn record(&mut self, score: usize) {
        *self.buckets.entry(score).or_insert(0) += 1;
    }

    /// Number of candidates recorded at `score`.
    pub fn count(&self, score: usize) -> u64 {
        self.buckets.get(&score).copied().unwrap_or(0)
    }

    /// Total number of candidates recorded.
    pub fn total(&self) -> u64 {
        self.buckets.values().sum()
    }

    /// `(score, count)` pairs in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.buckets.iter().map(|(&score, &count)| (score, count))
    }
}

/// Per-generation report: the fittest candidate of one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generation index, starting at 1 for the first evolved generation.
    pub generation: u64,
    /// Score of the fittest candidate.
    pub fittest_score: usize,
    /// Genome of the fittest candidate, rendered as text.
    pub fittest_genome: String,
    /// Genome length, the score of a perfect match.
    pub genome_length: usize,
}

impl GenerationReport {
    /// Whether the fittest candidate matches the target exactly.
    pub fn is_perfect(&self) -> bool {
        self.fittest_score == self.genome_length
    }
}

/// Statistics from an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Generations evolved before the target was matched.
    pub generations: u64,
    /// Candidates per generation.
    pub population_size: usize,
    /// Genome length.
    pub genome_length: usize,
    /// Candidates scored, including the initial population.
    pub total_evaluations: u64,
    /// Wall-clock time (in seconds).
    pub elapsed_seconds: f64,
}

impl EvolutionStats {
    /// Illustrative throughput: characters "typed" by every candidate of every
    /// generation, expressed in five-letter words per minute.
    pub fn words_per_minute(&self) -> f64 {
        let characters =
            self.generations as f64 * self.genome_length as f64 * self.population_size as f64;
        words_per_minute(characters, self.elapsed_seconds)
    }
}

/// Final result of an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Report for the generation that matched the target.
    pub best: GenerationReport,
    /// Statistics from the run.
    pub stats: EvolutionStats,
    /// Fitness distribution across every generation observed.
    pub distribution: FitnessDistribution,
}

/// Final result of a random-sampling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingResult {
    /// Samples drawn.
    pub iterations: u64,
    /// First sample that reached the best score.
    pub best_genome: String,
    /// Best score seen.
    pub best_score: usize,
    /// Genome length.
    pub genome_length: usize,
    /// Fitness distribution across all samples.
    pub distribution: FitnessDistribution,
    /// Wall-clock time (in seconds).
    pub elapsed_seconds: f64,
}

impl SamplingResult {
    /// Illustrative throughput in five-letter words per minute.
    pub fn words_per_minute(&self) -> f64 {
        words_per_minute(
            self.iterations as f64 * self.genome_length as f64,
            self.elapsed_seconds,
        )
    }
}

fn words_per_minute(characters: f64, elapsed_seconds: f64) -> f64 {
    let minutes = elapsed_seconds / 60.0;
    if minutes <= 0.0 {
        return 0.0;
    }
    characters / CHARACTERS_PER_WORD / minutes
}
