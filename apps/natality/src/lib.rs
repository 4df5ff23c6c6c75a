//! natality - Exploratory statistics on birth records
//!
//! Compares first babies with others: birth-weight means, variances and
//! Cohen's d, plus the mode and frequency ranking of pregnancy length.
//!
//! # Architecture
//!
//! - **analysis**: pure functions returning serializable results
//! - **report**: text rendering of those results
//! - **config**: TOML configuration with NSFG defaults

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;

pub use analysis::{
    explore, length_modes, load_birth_frames, weight_difference, Exploration, LengthModes,
    WeightDifference,
};
pub use config::NatalityConfig;
pub use error::{ConfigError, NatalityError, Result};
