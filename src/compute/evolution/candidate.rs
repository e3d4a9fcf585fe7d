//! Candidate genomes and their cached fitness.

use std::cell::Cell;
use std::fmt;

use crate::schema::{Alphabet, render};

use super::EvolutionError;
use super::fitness::FitnessEvaluator;
use super::rng::RandomSource;

/// Fitness cache state of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitnessScore {
    /// Not yet evaluated.
    #[default]
    Unscored,
    /// Evaluated; never changes afterwards.
    Scored(usize),
}

/// A single individual: a fixed-length genome plus its memoized fitness.
///
/// The genome never changes after construction. New genomes only come from
/// [`Candidate::random`] or [`Candidate::offspring`].
#[derive(Debug)]
pub struct Candidate {
    genome: Box<[u8]>,
    score: Cell<FitnessScore>,
}

impl Candidate {
    fn from_symbols(genome: Vec<u8>) -> Self {
        Self {
            genome: genome.into_boxed_slice(),
            score: Cell::new(FitnessScore::Unscored),
        }
    }

    /// Create a candidate whose genes are drawn uniformly from `alphabet`.
    pub fn random<R: RandomSource + ?Sized>(
        length: usize,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Self {
        let genome = (0..length)
            .map(|_| alphabet.symbol(rng.index(alphabet.len())))
            .collect();
        Self::from_symbols(genome)
    }

    /// Breed two parents into one offspring.
    ///
    /// For each position, with probability `mutation_rate` the gene is a
    /// uniformly random symbol from `alphabet`; otherwise it is copied from
    /// one of the parents, picked 50/50 per position.
    pub fn offspring<R: RandomSource + ?Sized>(
        first: &Candidate,
        second: &Candidate,
        mutation_rate: f64,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Self, EvolutionError> {
        if first.len() != second.len() {
            return Err(EvolutionError::GenomeLengthMismatch {
                left: first.len(),
                right: second.len(),
            });
        }

        let genome = first
            .genome
            .iter()
            .zip(second.genome.iter())
            .map(|(&a, &b)| {
                if rng.chance(mutation_rate) {
                    alphabet.symbol(rng.index(alphabet.len()))
                } else if rng.chance(0.5) {
                    a
                } else {
                    b
                }
            })
            .collect();

        Ok(Self::from_symbols(genome))
    }

    /// Genome length.
    pub fn len(&self) -> usize {
        self.genome.len()
    }

    /// True for a zero-length genome.
    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    /// The genome symbols.
    pub fn genome(&self) -> &[u8] {
        &self.genome
    }

    /// Gene at `index`.
    pub fn gene(&self, index: usize) -> Result<u8, EvolutionError> {
        self.genome
            .get(index)
            .copied()
            .ok_or(EvolutionError::GeneIndexOutOfRange {
                index,
                length: self.genome.len(),
            })
    }

    /// Fitness score, computed with `evaluator` on first call and cached.
    ///
    /// The first evaluator wins: later calls return the cached value even if
    /// given an evaluator for a different target.
    pub fn fitness_score(&self, evaluator: &FitnessEvaluator) -> usize {
        match self.score.get() {
            FitnessScore::Scored(score) => score,
            FitnessScore::Unscored => {
                let score = evaluator.score(self);
                self.score.set(FitnessScore::Scored(score));
                score
            }
        }
    }

    /// Current cache state, without computing anything.
    pub fn score_state(&self) -> FitnessScore {
        self.score.get()
    }

    #[cfg(test)]
    pub(crate) fn from_text(text: &str) -> Self {
        Self::from_symbols(text.bytes().collect())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.genome))
    }
}
