//! Generation loop driving a population toward the target.

use std::time::Instant;

use crate::schema::{
    EvolutionConfig, EvolutionResult, EvolutionStats, FitnessDistribution, GenerationReport,
    Target,
};

use super::EvolutionError;
use super::fitness::FitnessEvaluator;
use super::population::Population;
use super::rng::GenomeRng;

/// Evolution engine that runs the search.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    rng: GenomeRng,
}

impl EvolutionEngine {
    /// Create a new evolution engine for `target`.
    ///
    /// Fails if the configuration is invalid or the target contains symbols
    /// outside the configured alphabet.
    pub fn new(target: &str, config: EvolutionConfig) -> Result<Self, EvolutionError> {
        config.validate()?;
        let target = Target::new(target, &config.alphabet)?;
        let rng = GenomeRng::from_optional_seed(config.random_seed);

        Ok(Self {
            config,
            evaluator: FitnessEvaluator::new(target),
            rng,
        })
    }

    /// Replace the random number generator.
    pub fn with_rng(mut self, rng: GenomeRng) -> Self {
        self.rng = rng;
        self
    }

    /// The run configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// The target sequence.
    pub fn target(&self) -> &Target {
        self.evaluator.target()
    }

    /// Run evolution until a candidate matches the target exactly.
    ///
    /// `callback` receives a report for every evolved generation. There is no
    /// generation cap: a configuration that cannot reach the target (for
    /// example a zero mutation rate after the needed symbols die out) runs
    /// forever.
    pub fn run_with_callback<F>(
        &mut self,
        mut callback: F,
    ) -> Result<EvolutionResult, EvolutionError>
    where
        F: FnMut(&GenerationReport),
    {
        let start_time = Instant::now();

        let evaluator = &self.evaluator;
        let config = &self.config;
        let rng = &mut self.rng;
        let genome_length = evaluator.genome_length();

        log::info!(
            "Evolving toward {:?}: population={}, survival={}, mutation={}",
            evaluator.target().to_string(),
            config.population_size,
            config.survival_threshold,
            config.mutation_rate
        );

        let mut distribution = FitnessDistribution::new(genome_length);
        let mut population = Population::random(
            config.population_size,
            genome_length,
            &config.alphabet,
            evaluator,
            rng,
        )?;
        population.record_fitness_into(&mut distribution);

        let mut generation = 0u64;
        let best = loop {
            population = population.evolve(
                config.survival_threshold,
                config.mutation_rate,
                &config.alphabet,
                rng,
            )?;
            population.record_fitness_into(&mut distribution);
            generation += 1;

            let fittest = population.fittest()?;
            let report = GenerationReport {
                generation,
                fittest_score: fittest.fitness_score(evaluator),
                fittest_genome: fittest.to_string(),
                genome_length,
            };

            log::debug!(
                "Generation {}: [{}/{}] {}",
                report.generation,
                report.fittest_score,
                genome_length,
                report.fittest_genome
            );
            callback(&report);

            if report.is_perfect() {
                break report;
            }
        };

        let elapsed = start_time.elapsed().as_secs_f64();
        let total_evaluations = (generation + 1) * config.population_size as u64;

        log::info!(
            "Target matched after {} generations ({} evaluations, {:.3}s)",
            generation,
            total_evaluations,
            elapsed
        );

        Ok(EvolutionResult {
            best,
            stats: EvolutionStats {
                generations: generation,
                population_size: config.population_size,
                genome_length,
                total_evaluations,
                elapsed_seconds: elapsed,
            },
            distribution,
        })
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> Result<EvolutionResult, EvolutionError> {
        self.run_with_callback(|_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Alphabet, ConfigError};

    fn small_config(
        alphabet: &str,
        size: usize,
        survival: f64,
        mutation: f64,
    ) -> EvolutionConfig {
        EvolutionConfig {
            population_size: size,
            survival_threshold: survival,
            mutation_rate: mutation,
            alphabet: Alphabet::new(alphabet).unwrap(),
            random_seed: Some(42),
        }
    }

    #[test]
    fn test_engine_rejects_invalid_setup() {
        assert!(matches!(
            EvolutionEngine::new("HELLO", small_config(" AB", 10, 0.5, 0.1)),
            Err(EvolutionError::Config(ConfigError::InvalidTargetSymbol { .. }))
        ));
        assert!(matches!(
            EvolutionEngine::new("AB", small_config(" AB", 4, 0.2, 0.1)),
            Err(EvolutionError::Config(ConfigError::EmptySurvivorPool { .. }))
        ));
        assert!(matches!(
            EvolutionEngine::new("", EvolutionConfig::default()),
            Err(EvolutionError::Config(ConfigError::EmptyTarget))
        ));
    }

    #[test]
    fn test_run_terminates_on_exact_match() {
        let mut engine = EvolutionEngine::new("AB", small_config(" AB", 4, 0.5, 0.2)).unwrap();

        let mut reports = Vec::new();
        let result = engine.run_with_callback(|r| reports.push(r.clone())).unwrap();

        assert_eq!(result.best.fittest_genome, "AB");
        assert_eq!(result.best.fittest_score, 2);
        assert_eq!(reports.len() as u64, result.stats.generations);
        assert_eq!(reports.last(), Some(&result.best));
        assert!(reports[..reports.len() - 1].iter().all(|r| !r.is_perfect()));
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.generation, i as u64 + 1);
        }
    }

    #[test]
    fn test_run_default_parameters() {
        let config = EvolutionConfig {
            population_size: 200,
            random_seed: Some(7),
            ..Default::default()
        };
        let mut engine = EvolutionEngine::new("HELLO WORLD", config).unwrap();
        let result = engine.run().unwrap();

        assert_eq!(result.best.fittest_genome, "HELLO WORLD");
        assert!(result.stats.generations >= 1);
        assert_eq!(
            result.stats.total_evaluations,
            (result.stats.generations + 1) * 200
        );
        assert_eq!(result.distribution.total(), result.stats.total_evaluations);
        assert!(result.distribution.count(11) >= 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let run = || {
            let mut engine =
                EvolutionEngine::new("GATTACA", small_config(" ACGT", 50, 0.2, 0.05)).unwrap();
            let mut trail = Vec::new();
            engine.run_with_callback(|r| trail.push(r.clone())).unwrap();
            trail
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_at_least_one_generation_evolves() {
        // A single-symbol alphabet makes every initial candidate a perfect match.
        let mut engine = EvolutionEngine::new("AAAA", small_config("A", 5, 0.4, 0.0)).unwrap();
        let result = engine.run().unwrap();
        assert_eq!(result.stats.generations, 1);
        assert_eq!(result.distribution.count(4), 10);
    }

    #[test]
    fn test_two_letter_scenario_without_mutation() {
        // Without mutation a run can stall if the survivors lose a needed
        // symbol, so drive the population directly with a generation cap.
        let alphabet = Alphabet::new(" AB").unwrap();
        let fitness = FitnessEvaluator::new(Target::new("AB", &alphabet).unwrap());

        let mut solved = 0;
        for seed in 0..20 {
            let mut rng = GenomeRng::new(seed);
            let mut population = Population::random(4, 2, &alphabet, &fitness, &mut rng).unwrap();
            for _ in 0..50 {
                population = population.evolve(0.5, 0.0, &alphabet, &mut rng).unwrap();
                let fittest = population.fittest().unwrap();
                if fittest.fitness_score(&fitness) == 2 {
                    assert_eq!(fittest.to_string(), "AB");
                    solved += 1;
                    break;
                }
            }
        }
        assert!(solved >= 5, "only {solved} of 20 runs solved");
    }
}
