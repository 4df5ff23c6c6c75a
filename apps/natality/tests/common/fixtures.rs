//! Test fixture loading utilities

use std::path::PathBuf;

use natality_io::{DataColumn, Frame};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Live-birth pregnancy lengths with the NSFG 2002 cycle's top counts
///
/// 39 weeks: 4693, 40: 1116, 38: 607, 41: 587, 37: 455.
pub fn nsfg_length_frame() -> Frame {
    let counts = [(39, 4693), (40, 1116), (38, 607), (41, 587), (37, 455)];
    let lengths: Vec<i64> = counts
        .iter()
        .flat_map(|&(weeks, n)| std::iter::repeat(weeks).take(n))
        .collect();

    Frame::from_columns(vec![("prglngth".to_string(), DataColumn::Int64(lengths))])
        .expect("single column frame")
}
