//! Fitness scoring against a fixed target sequence.

use std::cmp::Ordering;

use crate::schema::Target;

use super::candidate::Candidate;

/// Scores candidates by how many genes match the target at the same position.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    target: Target,
}

impl FitnessEvaluator {
    /// Create an evaluator that optimizes toward `target`.
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    /// The target sequence.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Genome length every candidate must have, and the perfect score.
    pub fn genome_length(&self) -> usize {
        self.target.len()
    }

    /// Number of positions where the candidate's gene equals the target's.
    ///
    /// Always recomputes; use [`Candidate::fitness_score`] for the cached value.
    pub fn score(&self, candidate: &Candidate) -> usize {
        self.score_genome(candidate.genome())
    }

    pub(crate) fn score_genome(&self, genome: &[u8]) -> usize {
        debug_assert_eq!(genome.len(), self.target.len());
        genome
            .iter()
            .zip(self.target.as_bytes())
            .filter(|(gene, expected)| gene == expected)
            .count()
    }

    /// Descending-fitness ordering: fitter candidates sort first.
    ///
    /// Uses each candidate's cached score, computing it with this evaluator
    /// if it is not yet set.
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        b.fitness_score(self).cmp(&a.fitness_score(self))
    }
}
