//! Mode finding over histograms

use crate::hist::Hist;
use std::hash::Hash;

/// Most frequent value in the histogram
///
/// Ties go to the value seen first. An empty histogram has no mode and
/// yields `T::default()` (zero for numeric values).
pub fn mode<T>(hist: &Hist<T>) -> T
where
    T: Copy + Eq + Hash + Default,
{
    hist.mode().unwrap_or_default()
}

/// All (value, frequency) pairs ranked by frequency, highest first
///
/// Equal frequencies are ordered by value, highest first, so the ranking is
/// fully deterministic.
pub fn all_modes<T>(hist: &Hist<T>) -> Vec<(T, u64)>
where
    T: Copy + Eq + Hash + Ord,
{
    let mut ranked: Vec<(T, u64)> = hist.items().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    ranked
}
