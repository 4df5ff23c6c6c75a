//! Partition of pregnancy records into live births, first babies and others

use crate::frame::Frame;
use crate::reader::IoResult;
use serde::{Deserialize, Serialize};

/// Options for `make_frames`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionOptions {
    /// Pregnancy outcome column
    pub outcome_column: String,
    /// Birth order column
    pub birth_order_column: String,
    /// Outcome code of a live birth
    pub live_birth_code: i64,
    /// Birth order of a first baby
    pub first_birth_order: i64,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            outcome_column: "outcome".to_string(),
            birth_order_column: "birthord".to_string(),
            live_birth_code: 1,
            first_birth_order: 1,
        }
    }
}

/// Live births and their first/other split
///
/// `firsts` and `others` are disjoint and together make up `live`.
#[derive(Debug, Clone)]
pub struct BirthFrames {
    /// All live births
    pub live: Frame,
    /// Live births with birth order 1
    pub firsts: Frame,
    /// All other live births
    pub others: Frame,
}

/// Split pregnancy records into live births, first babies and others
///
/// Live births with a missing birth order count as others.
pub fn make_frames(preg: &Frame, options: &PartitionOptions) -> IoResult<BirthFrames> {
    let live_code = options.live_birth_code as f64;
    let first_order = options.first_birth_order as f64;

    let live = preg.filter_by(&options.outcome_column, |outcome| outcome == live_code)?;
    let firsts = live.filter_by(&options.birth_order_column, |order| order == first_order)?;
    let others = live.filter_by(&options.birth_order_column, |order| order != first_order)?;

    tracing::info!(
        "Partitioned {} pregnancies: {} live, {} first, {} other",
        preg.len(),
        live.len(),
        firsts.len(),
        others.len()
    );

    Ok(BirthFrames {
        live,
        firsts,
        others,
    })
}
