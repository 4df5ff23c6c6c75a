//! Probability mass function over discrete values
//!
//! A `Pmf` maps each value to its probability. Probabilities are computed
//! once, at construction, by normalizing a histogram.

use crate::hist::Hist;
use std::collections::HashMap;
use std::hash::Hash;

/// Probability mass function
#[derive(Debug, Clone)]
pub struct Pmf<T> {
    /// (value, probability) in first-seen order
    entries: Vec<(T, f64)>,
    index: HashMap<T, usize>,
}

impl<T: Copy + Eq + Hash> Pmf<T> {
    /// Normalize a histogram into a PMF
    ///
    /// An empty histogram gives an empty PMF.
    pub fn from_hist(hist: &Hist<T>) -> Self {
        let total = hist.total() as f64;
        let mut entries = Vec::with_capacity(hist.len());
        let mut index = HashMap::with_capacity(hist.len());

        if total > 0.0 {
            for (value, freq) in hist.items() {
                index.insert(value, entries.len());
                entries.push((value, freq as f64 / total));
            }
        }

        Self { entries, index }
    }

    /// Build a PMF directly from raw observations
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_hist(&Hist::from_values(values))
    }

    /// Probability of a value (0 if it was never observed)
    pub fn prob(&self, value: T) -> f64 {
        self.index
            .get(&value)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Iterate over (value, probability) pairs in first-seen order
    pub fn items(&self) -> impl Iterator<Item = (T, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all probabilities: 1 up to rounding, 0 when empty
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, p)| p).sum()
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the PMF has no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy + Eq + Hash + Into<f64>> Pmf<T> {
    /// Expectation of the distribution
    pub fn mean(&self) -> f64 {
        pmf_mean(self)
    }

    /// Variance of the distribution
    pub fn var(&self) -> f64 {
        pmf_var(self)
    }
}

/// Probability-weighted sum of values
pub fn pmf_mean<T>(pmf: &Pmf<T>) -> f64
where
    T: Copy + Eq + Hash + Into<f64>,
{
    pmf.items().map(|(value, p)| value.into() * p).sum()
}

/// Probability-weighted sum of squared deviations from the mean
pub fn pmf_var<T>(pmf: &Pmf<T>) -> f64
where
    T: Copy + Eq + Hash + Into<f64>,
{
    let mean = pmf_mean(pmf);
    pmf.items()
        .map(|(value, p)| {
            let dev = value.into() - mean;
            p * dev * dev
        })
        .sum()
}
