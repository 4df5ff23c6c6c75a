//! Frequency histogram over discrete values
//!
//! A `Hist` maps each distinct observed value to the number of times it was
//! seen. It is built once from a sequence of observations and is read-only
//! afterwards.

use std::collections::HashMap;
use std::hash::Hash;

/// Histogram of discrete observations
///
/// Entries are kept in first-seen order, so `items()` yields values in the
/// order they first appeared in the input.
#[derive(Debug, Clone)]
pub struct Hist<T> {
    /// (value, frequency) in first-seen order
    entries: Vec<(T, u64)>,
    /// Position of each value in `entries`
    index: HashMap<T, usize>,
    /// Sum of all frequencies
    total: u64,
}

impl<T: Copy + Eq + Hash> Hist<T> {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0,
        }
    }

    /// Build a histogram by counting each value in the sequence
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut hist = Self::new();
        for value in values {
            hist.increment(value);
        }
        hist
    }

    fn increment(&mut self, value: T) {
        match self.index.get(&value) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(value, self.entries.len());
                self.entries.push((value, 1));
            }
        }
        self.total += 1;
    }

    /// Frequency of a value (0 if it was never observed)
    pub fn freq(&self, value: T) -> u64 {
        self.index
            .get(&value)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Iterate over (value, frequency) pairs in first-seen order
    pub fn items(&self) -> impl Iterator<Item = (T, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Distinct values in first-seen order
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|&(value, _)| value)
    }

    /// Total number of observations
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Largest frequency (0 for an empty histogram)
    pub fn max_freq(&self) -> u64 {
        self.entries.iter().map(|&(_, f)| f).max().unwrap_or(0)
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was observed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most frequent value, or `None` when the histogram is empty
    ///
    /// Only a strictly higher frequency replaces the current candidate, so on
    /// ties the value seen first in the input wins.
    pub fn mode(&self) -> Option<T> {
        let mut best: Option<(T, u64)> = None;
        for (value, freq) in self.items() {
            match best {
                Some((_, max)) if freq <= max => {}
                _ => best = Some((value, freq)),
            }
        }
        best.map(|(value, _)| value)
    }
}

impl<T: Copy + Eq + Hash> Default for Hist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Eq + Hash> FromIterator<T> for Hist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let hist = Hist::from_values([1, 2, 2, 2, 3, 5]);

        assert_eq!(hist.freq(2), 3);
        assert_eq!(hist.freq(5), 1);
        assert_eq!(hist.freq(4), 0);
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.len(), 4);
        assert_eq!(hist.max_freq(), 3);
    }

    #[test]
    fn test_first_seen_order() {
        let hist: Hist<i32> = [5, 1, 5, 3, 1].into_iter().collect();
        let values: Vec<i32> = hist.values().collect();
        assert_eq!(values, vec![5, 1, 3]);
    }

    #[test]
    fn test_mode_tie_goes_to_first_seen() {
        let hist = Hist::from_values([7, 3, 3, 7]);
        assert_eq!(hist.mode(), Some(7));

        let hist = Hist::from_values([3, 7, 3, 7]);
        assert_eq!(hist.mode(), Some(3));
    }

    #[test]
    fn test_empty() {
        let hist: Hist<i32> = Hist::new();
        assert!(hist.is_empty());
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.max_freq(), 0);
        assert_eq!(hist.mode(), None);
    }
}
