//! natality-io - Data loading for birth-record surveys
//!
//! This crate turns survey extracts into in-memory frames:
//!
//! - **CSV/TSV**: delimited text with column type inference
//! - **Frame**: named, equal-length columns with numeric extraction
//! - **Cleaning**: survey missing-value codes and derived birth weight
//! - **Partition**: live births split into first babies and others
//!
//! # Design
//!
//! Readers implement the `DataReader` trait for uniform access. Frames are
//! immutable; filtering and cleaning produce new frames.

pub mod clean;
pub mod csv_reader;
pub mod frame;
pub mod partition;
pub mod reader;
pub mod schema;

pub use clean::*;
pub use frame::*;
pub use partition::*;
pub use reader::*;
pub use schema::*;
