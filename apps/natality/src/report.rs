//! Human-readable rendering of analysis results

use std::io::{self, Write};

use crate::analysis::{Exploration, LengthModes, WeightDifference};

/// Write the weight comparison, one statistic per line
pub fn write_weight_difference<W: Write>(out: &mut W, weight: &WeightDifference) -> io::Result<()> {
    writeln!(out, "Mean")?;
    writeln!(out, "First babies {}", weight.first_mean)?;
    writeln!(out, "Others {}", weight.other_mean)?;

    writeln!(out, "Variance")?;
    writeln!(out, "First babies {}", weight.first_var)?;
    writeln!(out, "Others {}", weight.other_var)?;

    writeln!(out, "Difference in lbs {}", weight.diff_lbs)?;
    writeln!(out, "Difference in oz {}", weight.diff_oz)?;
    writeln!(
        out,
        "Difference relative to mean (%age points) {}",
        weight.relative_diff_pct
    )?;
    writeln!(out, "Cohen d {}", weight.cohen_d)
}

/// Write the mode and the ranked (value, frequency) pairs
pub fn write_length_modes<W: Write>(out: &mut W, lengths: &LengthModes) -> io::Result<()> {
    writeln!(out, "Mode of preg length {}", lengths.mode)?;
    for (value, freq) in &lengths.top {
        writeln!(out, "{} {}", value, freq)?;
    }
    writeln!(out, "PMF mean of preg length {}", lengths.pmf_mean)?;
    writeln!(out, "PMF variance of preg length {}", lengths.pmf_var)
}

/// Write the full report, ending with the completion line
pub fn write_report<W: Write>(out: &mut W, exploration: &Exploration, program: &str) -> io::Result<()> {
    write_weight_difference(out, &exploration.weight)?;
    write_length_modes(out, &exploration.lengths)?;
    writeln!(out, "{}: analysis complete.", program)
}
