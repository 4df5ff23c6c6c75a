//! Exploratory analyses over birth records
//!
//! Each analysis is a pure function from frames to a serializable result.
//! Printing lives in [`crate::report`].

use std::path::Path;

use natality_io::{clean_pregnancies, make_frames, open_file, BirthFrames, Frame};
use natality_stats::{all_modes, cohen_effect_size, mode, pmf_mean, pmf_var, Hist, Pmf, SummaryStats};
use serde::Serialize;

use crate::config::NatalityConfig;
use crate::error::{NatalityError, Result};

/// Ounces per pound
const OUNCES_PER_POUND: f64 = 16.0;

/// Birth-weight comparison between first babies and others
#[derive(Debug, Clone, Serialize)]
pub struct WeightDifference {
    /// Weight column compared
    pub column: String,
    /// Mean over all live births
    pub grand_mean: f64,
    /// Mean weight of first babies
    pub first_mean: f64,
    /// Mean weight of other babies
    pub other_mean: f64,
    /// Sample variance of first babies
    pub first_var: f64,
    /// Sample variance of other babies
    pub other_var: f64,
    /// Non-missing weights among first babies
    pub first_count: usize,
    /// Non-missing weights among other babies
    pub other_count: usize,
    /// first_mean - other_mean, in pounds
    pub diff_lbs: f64,
    /// Same difference in ounces
    pub diff_oz: f64,
    /// Difference as a percentage of the grand mean
    pub relative_diff_pct: f64,
    /// Cohen's d of first vs. other
    pub cohen_d: f64,
}

/// Compare a weight column between first babies and others
pub fn weight_difference(
    live: &Frame,
    firsts: &Frame,
    others: &Frame,
    column: &str,
) -> Result<WeightDifference> {
    let all = live.summary(column)?;
    let first_weights = firsts.column_f64(column)?;
    let other_weights = others.column_f64(column)?;
    let first = SummaryStats::from_data(&first_weights);
    let other = SummaryStats::from_data(&other_weights);

    for (group, stats) in [("live births", &all), ("first babies", &first), ("others", &other)] {
        if stats.count == 0 {
            return Err(NatalityError::EmptyGroup(format!("{} ({})", group, column)));
        }
    }

    let diff_lbs = first.mean - other.mean;

    Ok(WeightDifference {
        column: column.to_string(),
        grand_mean: all.mean,
        first_mean: first.mean,
        other_mean: other.mean,
        first_var: first.variance,
        other_var: other.variance,
        first_count: first.count,
        other_count: other.count,
        diff_lbs,
        diff_oz: diff_lbs * OUNCES_PER_POUND,
        relative_diff_pct: diff_lbs / all.mean * 100.0,
        cohen_d: cohen_effect_size(&first_weights, &other_weights),
    })
}

/// Mode and frequency ranking of pregnancy length
#[derive(Debug, Clone, Serialize)]
pub struct LengthModes {
    /// Length column used
    pub column: String,
    /// Non-missing observations
    pub observations: u64,
    /// Most common length
    pub mode: i32,
    /// How often the mode occurs
    pub mode_freq: u64,
    /// Highest-ranked (length, frequency) pairs
    pub top: Vec<(i32, u64)>,
    /// Mean length under the PMF
    pub pmf_mean: f64,
    /// Variance of length under the PMF
    pub pmf_var: f64,
}

/// Read a discrete column as integers, skipping missing values
fn discrete_values(frame: &Frame, column: &str) -> Result<Vec<i32>> {
    frame
        .column_f64(column)?
        .into_iter()
        .filter(|v| !v.is_nan())
        .map(|v| {
            if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) {
                Ok(v as i32)
            } else {
                Err(NatalityError::NonIntegral {
                    column: column.to_string(),
                    value: v,
                })
            }
        })
        .collect()
}

/// Histogram the length column and rank its values
pub fn length_modes(frame: &Frame, column: &str, top: usize) -> Result<LengthModes> {
    let hist: Hist<i32> = discrete_values(frame, column)?.into_iter().collect();
    if hist.is_empty() {
        return Err(NatalityError::EmptyGroup(column.to_string()));
    }

    let pmf = Pmf::from_hist(&hist);
    let mode = mode(&hist);

    Ok(LengthModes {
        column: column.to_string(),
        observations: hist.total(),
        mode,
        mode_freq: hist.freq(mode),
        top: all_modes(&hist).into_iter().take(top).collect(),
        pmf_mean: pmf_mean(&pmf),
        pmf_var: pmf_var(&pmf),
    })
}

/// Results of a full exploration run
#[derive(Debug, Clone, Serialize)]
pub struct Exploration {
    /// Live births analysed
    pub live_births: usize,
    /// First babies among them
    pub first_births: usize,
    /// Everyone else
    pub other_births: usize,
    pub weight: WeightDifference,
    pub lengths: LengthModes,
}

/// Run every analysis over partitioned births
pub fn explore(frames: &BirthFrames, config: &NatalityConfig) -> Result<Exploration> {
    let weight = weight_difference(
        &frames.live,
        &frames.firsts,
        &frames.others,
        &config.columns.weight,
    )?;
    let lengths = length_modes(&frames.live, &config.columns.length, config.report.top_modes)?;

    Ok(Exploration {
        live_births: frames.live.len(),
        first_births: frames.firsts.len(),
        other_births: frames.others.len(),
        weight,
        lengths,
    })
}

/// Read a pregnancy file, optionally clean it, and partition it
pub fn load_birth_frames(path: impl AsRef<Path>, config: &NatalityConfig) -> Result<BirthFrames> {
    let path = path.as_ref();
    let reader = open_file(path)?;
    let mut preg = reader.read_frame()?;
    tracing::info!(
        "Read {} records ({} columns) from {}",
        preg.len(),
        preg.column_names().len(),
        path.display()
    );

    if config.cleaning.enabled {
        preg = clean_pregnancies(preg, &config.cleaning.options)?;
    }

    Ok(make_frames(&preg, &config.partition)?)
}
