//! Configuration types for the genetic algorithm.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Alphabet;

fn default_population_size() -> usize {
    1000
}
fn default_survival_threshold() -> f64 {
    0.2
}
fn default_mutation_rate() -> f64 {
    0.01
}

/// Top-level configuration for an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Number of candidates in every generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Fraction of each generation that survives the cull (0.0 exclusive to 1.0).
    #[serde(default = "default_survival_threshold")]
    pub survival_threshold: f64,
    /// Per-gene probability of replacement by a random symbol (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Symbols used for random genomes and mutations.
    #[serde(default)]
    pub alphabet: Alphabet,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            survival_threshold: default_survival_threshold(),
            mutation_rate: default_mutation_rate(),
            alphabet: Alphabet::default(),
            random_seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Number of candidates kept by each cull.
    #[inline]
    pub fn survivor_count(&self) -> usize {
        survivor_count(self.population_size, self.survival_threshold)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize);
        }
        validate_breeding(
            self.population_size,
            self.survival_threshold,
            self.mutation_rate,
        )
    }
}

/// `floor(population_size * survival_threshold)`.
pub(crate) fn survivor_count(population_size: usize, survival_threshold: f64) -> usize {
    (population_size as f64 * survival_threshold).floor() as usize
}

/// Check the parameters of a single generational step.
pub(crate) fn validate_breeding(
    population_size: usize,
    survival_threshold: f64,
    mutation_rate: f64,
) -> Result<(), ConfigError> {
    if !(survival_threshold > 0.0 && survival_threshold <= 1.0) {
        return Err(ConfigError::InvalidSurvivalThreshold(survival_threshold));
    }
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(ConfigError::InvalidMutationRate(mutation_rate));
    }
    if population_size > 0 && survivor_count(population_size, survival_threshold) == 0 {
        return Err(ConfigError::EmptySurvivorPool {
            population_size,
            survival_threshold,
        });
    }
    Ok(())
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("Alphabet contains duplicate symbol {0:?}")]
    DuplicateSymbol(char),
    #[error("Alphabet symbol {0:?} is not a space or an uppercase letter")]
    UnsupportedSymbol(char),
    #[error("Target sequence must not be empty")]
    EmptyTarget,
    #[error("Target symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidTargetSymbol { symbol: char, position: usize },
    #[error("population_size must be at least 1")]
    InvalidPopulationSize,
    #[error("survival_threshold must be in (0, 1], got {0}")]
    InvalidSurvivalThreshold(f64),
    #[error("mutation_rate must be in [0, 1], got {0}")]
    InvalidMutationRate(f64),
    #[error(
        "survival_threshold {survival_threshold} leaves no survivors in a population of {population_size}"
    )]
    EmptySurvivorPool {
        population_size: usize,
        survival_threshold: f64,
    },
    #[error("iterations must be at least 1")]
    InvalidIterations,
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_valid() {
        let config = EvolutionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population_size, 1000);
        assert_eq!(config.survivor_count(), 200);
    }

    #[test]
    fn test_invalid_parameters() {
        let config = EvolutionConfig {
            population_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPopulationSize)
        ));

        for threshold in [0.0, -0.5, 1.5, f64::NAN] {
            let config = EvolutionConfig {
                survival_threshold: threshold,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidSurvivalThreshold(_))
            ));
        }

        let config = EvolutionConfig {
            mutation_rate: 1.01,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMutationRate(_))
        ));
    }

    #[test]
    fn test_empty_survivor_pool() {
        let config = EvolutionConfig {
            population_size: 4,
            survival_threshold: 0.2,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptySurvivorPool {
                population_size: 4,
                ..
            }
        ));
        assert!(err.to_string().contains("survival_threshold"));
    }

    #[test]
    fn test_full_survival_is_valid() {
        let config = EvolutionConfig {
            population_size: 10,
            survival_threshold: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.survivor_count(), 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EvolutionConfig =
            serde_json::from_str(r#"{"population_size": 50, "alphabet": " AB"}"#).unwrap();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.survival_threshold, 0.2);
        assert_eq!(config.mutation_rate, 0.01);
        assert_eq!(config.alphabet.len(), 3);
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn test_serialization() {
        let config = EvolutionConfig {
            random_seed: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EvolutionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.population_size, config.population_size);
        assert_eq!(parsed.alphabet, config.alphabet);
        assert_eq!(parsed.random_seed, Some(7));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"mutation_rate": 0.05, "random_seed": 42}}"#).unwrap();

        let config = EvolutionConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.mutation_rate, 0.05);
        assert_eq!(config.random_seed, Some(42));
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            EvolutionConfig::from_json_file(&missing),
            Err(ConfigError::Io(_))
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"alphabet": "abc"}"#).unwrap();
        assert!(matches!(
            EvolutionConfig::from_json_file(&bad),
            Err(ConfigError::Parse(_))
        ));
    }
}
