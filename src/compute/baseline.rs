//! Non-evolutionary baseline: score independent random samples.
//!
//! Every sample is a fresh uniformly random genome, so reaching anything but
//! the shortest targets takes astronomically long. The sampler therefore runs
//! a fixed number of iterations and reports the best sample it saw.

use std::time::Instant;

use crate::schema::{Alphabet, ConfigError, FitnessDistribution, SamplingResult, Target, render};

use super::evolution::{FitnessEvaluator, RandomSource};

/// Default number of samples drawn by the command-line baseline.
pub const DEFAULT_ITERATIONS: u64 = 100_000_000;

/// Draws random genomes and tracks the best one.
pub struct RandomSampler {
    evaluator: FitnessEvaluator,
    alphabet: Alphabet,
}

impl RandomSampler {
    /// Create a sampler for `target`, drawing symbols from `alphabet`.
    pub fn new(target: Target, alphabet: Alphabet) -> Self {
        Self {
            evaluator: FitnessEvaluator::new(target),
            alphabet,
        }
    }

    /// Draw `iterations` samples.
    ///
    /// The reported best genome is the first sample to reach the best score.
    pub fn run<R: RandomSource + ?Sized>(
        &self,
        iterations: u64,
        rng: &mut R,
    ) -> Result<SamplingResult, ConfigError> {
        if iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }

        let start_time = Instant::now();
        let genome_length = self.evaluator.genome_length();
        let mut distribution = FitnessDistribution::new(genome_length);
        let mut sample = vec![0u8; genome_length];
        let mut best_genome = Vec::new();
        let mut best_score = None;
        let report_every = (iterations / 10).max(1);

        for i in 0..iterations {
            for gene in sample.iter_mut() {
                *gene = self.alphabet.symbol(rng.index(self.alphabet.len()));
            }

            let score = self.evaluator.score_genome(&sample);
            distribution.record(score);

            if best_score.is_none_or(|best| score > best) {
                best_score = Some(score);
                best_genome.clone_from(&sample);
            }

            if (i + 1) % report_every == 0 {
                log::debug!(
                    "Sampled {}/{}: best [{}/{}] {}",
                    i + 1,
                    iterations,
                    best_score.unwrap_or(0),
                    genome_length,
                    render(&best_genome)
                );
            }
        }

        Ok(SamplingResult {
            iterations,
            best_genome: render(&best_genome),
            best_score: best_score.unwrap_or(0),
            genome_length,
            distribution,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
