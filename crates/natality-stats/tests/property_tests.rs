//! Property-based tests for histograms, modes and PMF moments

use natality_stats::{all_modes, mode, pmf_mean, pmf_var, Hist, Pmf};
use proptest::prelude::*;

// === Scenario Tests ===

#[test]
fn test_small_sample_modes() {
    let hist = Hist::from_values([1, 2, 2, 2, 3, 5]);
    assert_eq!(mode(&hist), 2);
    assert_eq!(all_modes(&hist), vec![(2, 3), (5, 1), (3, 1), (1, 1)]);
}

#[test]
fn test_pregnancy_length_counts() {
    // Top of the NSFG live-birth pregnancy-length distribution
    let counts = [(39, 4693u64), (40, 1116), (38, 607), (41, 587), (37, 455)];
    let values = counts
        .iter()
        .flat_map(|&(weeks, n)| std::iter::repeat(weeks).take(n as usize));
    let hist: Hist<i32> = values.collect();

    assert_eq!(mode(&hist), 39);
    assert_eq!(all_modes(&hist)[0], (39, 4693));
    assert_eq!(all_modes(&hist)[1], (40, 1116));
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_all_modes_is_sorted(values in prop::collection::vec(-20i32..20, 0..200)) {
        let hist = Hist::from_values(values);
        let ranked = all_modes(&hist);

        prop_assert_eq!(ranked.len(), hist.len());
        for pair in ranked.windows(2) {
            let (v1, f1) = pair[0];
            let (v2, f2) = pair[1];
            prop_assert!(f1 > f2 || (f1 == f2 && v1 >= v2), "out of order: {:?}", pair);
        }
    }

    #[test]
    fn test_mode_has_max_frequency(values in prop::collection::vec(0i32..30, 1..200)) {
        let hist = Hist::from_values(values);
        prop_assert_eq!(hist.freq(mode(&hist)), hist.max_freq());
    }

    #[test]
    fn test_frequencies_sum_to_total(values in prop::collection::vec(0i32..50, 0..200)) {
        let n = values.len() as u64;
        let hist = Hist::from_values(values);
        let sum: u64 = hist.items().map(|(_, f)| f).sum();
        prop_assert_eq!(sum, n);
        prop_assert_eq!(hist.total(), n);
    }

    #[test]
    fn test_pmf_moments(values in prop::collection::vec(0i32..60, 1..200)) {
        let pmf = Pmf::from_values(values.iter().copied());
        prop_assert!((pmf.total() - 1.0).abs() < 1e-9);

        let expected_mean: f64 = pmf.items().map(|(v, p)| f64::from(v) * p).sum();
        let mean = pmf_mean(&pmf);
        prop_assert!((mean - expected_mean).abs() < 1e-9);

        let expected_var: f64 = pmf
            .items()
            .map(|(v, p)| p * (f64::from(v) - mean).powi(2))
            .sum();
        let var = pmf_var(&pmf);
        prop_assert!((var - expected_var).abs() < 1e-9);
        prop_assert!(var >= 0.0);

        // Mean of the PMF equals the plain sample mean
        let sample_mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64;
        prop_assert!((mean - sample_mean).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_calls_agree(values in prop::collection::vec(0i32..10, 0..100)) {
        let hist = Hist::from_values(values);
        let pmf = Pmf::from_hist(&hist);

        prop_assert_eq!(mode(&hist), mode(&hist));
        prop_assert_eq!(all_modes(&hist), all_modes(&hist));
        prop_assert_eq!(pmf_mean(&pmf).to_bits(), pmf_mean(&pmf).to_bits());
        prop_assert_eq!(pmf_var(&pmf).to_bits(), pmf_var(&pmf).to_bits());
    }
}
