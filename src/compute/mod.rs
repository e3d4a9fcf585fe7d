//! Compute module - Evolutionary search and the random-sampling baseline.

pub mod baseline;
pub mod evolution;

pub use baseline::*;
pub use evolution::{EvolutionEngine, EvolutionError};
