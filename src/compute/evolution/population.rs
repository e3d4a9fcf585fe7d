//! Fitness-sorted generations of candidates.

use std::rc::Rc;

use crate::schema::{Alphabet, FitnessDistribution, survivor_count, validate_breeding};

use super::EvolutionError;
use super::candidate::Candidate;
use super::fitness::FitnessEvaluator;
use super::rng::RandomSource;

/// One generation: a fixed number of candidates, fittest first.
///
/// Candidates are reference-counted so survivors can be carried into the
/// next generation without copying.
pub struct Population<'e> {
    candidates: Vec<Rc<Candidate>>,
    evaluator: &'e FitnessEvaluator,
}

impl<'e> Population<'e> {
    /// Create a population of `size` random candidates.
    pub fn random<R: RandomSource + ?Sized>(
        size: usize,
        genome_length: usize,
        alphabet: &Alphabet,
        evaluator: &'e FitnessEvaluator,
        rng: &mut R,
    ) -> Result<Self, EvolutionError> {
        if size == 0 {
            return Err(EvolutionError::EmptyPopulation);
        }
        if genome_length != evaluator.genome_length() {
            return Err(EvolutionError::GenomeLengthMismatch {
                left: genome_length,
                right: evaluator.genome_length(),
            });
        }

        let candidates = (0..size)
            .map(|_| Rc::new(Candidate::random(genome_length, alphabet, rng)))
            .collect();

        Ok(Self::from_candidates(candidates, evaluator))
    }

    /// Wrap existing candidates, sorting them by descending fitness.
    fn from_candidates(
        mut candidates: Vec<Rc<Candidate>>,
        evaluator: &'e FitnessEvaluator,
    ) -> Self {
        candidates.sort_by(|a, b| evaluator.compare(a, b));
        Self {
            candidates,
            evaluator,
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false for a constructed population.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates, fittest first.
    pub fn candidates(&self) -> &[Rc<Candidate>] {
        &self.candidates
    }

    /// The evaluator this population is sorted by.
    pub fn evaluator(&self) -> &'e FitnessEvaluator {
        self.evaluator
    }

    /// The highest-scoring candidate.
    pub fn fittest(&self) -> Result<&Rc<Candidate>, EvolutionError> {
        self.candidates.first().ok_or(EvolutionError::EmptyPopulation)
    }

    /// Produce the next generation.
    ///
    /// The fittest `floor(len * survival_threshold)` candidates survive
    /// unchanged. The remaining slots are filled with offspring of two
    /// survivors, each picked uniformly with replacement. `self` is left
    /// untouched.
    pub fn evolve<R: RandomSource + ?Sized>(
        &self,
        survival_threshold: f64,
        mutation_rate: f64,
        alphabet: &Alphabet,
        rng: &mut R,
    ) -> Result<Population<'e>, EvolutionError> {
        let size = self.candidates.len();
        validate_breeding(size, survival_threshold, mutation_rate)?;

        let culled_size = survivor_count(size, survival_threshold);
        let survivors = &self.candidates[..culled_size];

        let mut next = Vec::with_capacity(size);
        next.extend(survivors.iter().cloned());

        for _ in culled_size..size {
            let first = &survivors[rng.index(culled_size)];
            let second = &survivors[rng.index(culled_size)];
            let child = Candidate::offspring(first, second, mutation_rate, alphabet, rng)?;
            next.push(Rc::new(child));
        }

        Ok(Self::from_candidates(next, self.evaluator))
    }

    /// Add every candidate's score to `distribution`. Existing counts are kept.
    pub fn record_fitness_into(&self, distribution: &mut FitnessDistribution) {
        for candidate in &self.candidates {
            distribution.record(candidate.fitness_score(self.evaluator));
        }
    }
}
