//! natality-stats - Descriptive statistics for survey data
//!
//! This crate provides the distribution primitives used by the natality
//! analyses:
//!
//! - **Hist**: value → frequency counts over discrete observations
//! - **Pmf**: value → probability, normalized to sum to 1
//! - **Modes**: most frequent value and a full frequency ranking
//! - **Summary**: mean, sample variance and friends over `f64` samples
//! - **Effect size**: Cohen's d between two groups
//!
//! # Iteration order
//!
//! `Hist` and `Pmf` iterate in first-seen order. Anything that depends on
//! iteration order (such as [`mode`] tie-breaking) is therefore
//! deterministic for a given input sequence.

pub mod effect;
pub mod hist;
pub mod modes;
pub mod pmf;
pub mod summary;

pub use effect::*;
pub use hist::*;
pub use modes::*;
pub use pmf::*;
pub use summary::*;
