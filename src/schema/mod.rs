//! Schema module - Configuration, symbol sets, and reporting types.

mod alphabet;
mod config;
mod report;

pub use alphabet::*;
pub use config::*;
pub use report::*;
pub(crate) use alphabet::render;
pub(crate) use config::{survivor_count, validate_breeding};
