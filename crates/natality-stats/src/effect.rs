//! Standardized effect sizes between two groups

use crate::summary::SummaryStats;

/// Pooled variance of two groups, each weighted by its degrees of freedom
///
/// Returns NaN when the combined degrees of freedom are zero.
pub fn pooled_variance(group1: &SummaryStats, group2: &SummaryStats) -> f64 {
    let dof1 = group1.count.saturating_sub(1);
    let dof2 = group2.count.saturating_sub(1);
    let dof = dof1 + dof2;
    if dof == 0 {
        return f64::NAN;
    }

    let weighted = |stats: &SummaryStats, dof: usize| {
        if dof == 0 {
            0.0
        } else {
            dof as f64 * stats.variance
        }
    };

    (weighted(group1, dof1) + weighted(group2, dof2)) / dof as f64
}

/// Cohen's d: difference of means over the pooled standard deviation
///
/// Positive when `group1` has the larger mean. Non-finite values are
/// ignored; the result is NaN if either group is empty or there are not
/// enough observations to estimate a variance.
pub fn cohen_effect_size(group1: &[f64], group2: &[f64]) -> f64 {
    let stats1 = SummaryStats::from_data(group1);
    let stats2 = SummaryStats::from_data(group2);
    if stats1.count == 0 || stats2.count == 0 {
        return f64::NAN;
    }

    let diff = stats1.mean - stats2.mean;
    diff / pooled_variance(&stats1, &stats2).sqrt()
}
