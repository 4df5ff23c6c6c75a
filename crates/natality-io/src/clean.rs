//! Cleaning of raw pregnancy records
//!
//! Survey extracts encode "not ascertained", "refused" and "don't know" as
//! sentinel codes. Cleaning turns those into NaN, drops implausible birth
//! weights, and derives the combined birth weight in pounds.

use crate::frame::Frame;
use crate::reader::IoResult;
use crate::schema::DataColumn;
use serde::{Deserialize, Serialize};

/// Ounces per pound
const OUNCES_PER_POUND: f64 = 16.0;

/// Options for `clean_pregnancies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// Birth weight, whole pounds
    pub pounds_column: String,
    /// Birth weight, remaining ounces
    pub ounces_column: String,
    /// Derived total birth weight in pounds
    pub total_column: String,
    /// Codes meaning the answer is missing
    pub na_codes: Vec<f64>,
    /// Pound values above this are treated as missing
    pub max_pounds: f64,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            pounds_column: "birthwgt_lb".to_string(),
            ounces_column: "birthwgt_oz".to_string(),
            total_column: "totalwgt_lb".to_string(),
            na_codes: vec![97.0, 98.0, 99.0],
            max_pounds: 20.0,
        }
    }
}

impl CleaningOptions {
    fn is_na(&self, value: f64) -> bool {
        self.na_codes.iter().any(|&code| code == value)
    }
}

/// Replace missing-value codes and derive the total birth weight
///
/// Frames without the pound/ounce columns are returned unchanged, which lets
/// already-cleaned extracts pass through. An existing total-weight column is
/// never overwritten.
pub fn clean_pregnancies(frame: Frame, options: &CleaningOptions) -> IoResult<Frame> {
    if !frame.has_column(&options.pounds_column) || !frame.has_column(&options.ounces_column) {
        tracing::debug!(
            "Skipping birth-weight cleaning: {} or {} not present",
            options.pounds_column,
            options.ounces_column
        );
        return Ok(frame);
    }

    let pounds: Vec<f64> = frame
        .column_f64(&options.pounds_column)?
        .into_iter()
        .map(|lb| {
            if options.is_na(lb) || lb > options.max_pounds {
                f64::NAN
            } else {
                lb
            }
        })
        .collect();

    let ounces: Vec<f64> = frame
        .column_f64(&options.ounces_column)?
        .into_iter()
        .map(|oz| if options.is_na(oz) { f64::NAN } else { oz })
        .collect();

    let cleared = pounds.iter().filter(|lb| lb.is_nan()).count();
    tracing::debug!("{} of {} birth weights missing after cleaning", cleared, pounds.len());

    let derive_total = !frame.has_column(&options.total_column);
    let total: Vec<f64> = pounds
        .iter()
        .zip(ounces.iter())
        .map(|(lb, oz)| lb + oz / OUNCES_PER_POUND)
        .collect();

    let mut frame = frame
        .with_column(options.pounds_column.clone(), DataColumn::Float64(pounds))?
        .with_column(options.ounces_column.clone(), DataColumn::Float64(ounces))?;

    if derive_total {
        frame = frame.with_column(options.total_column.clone(), DataColumn::Float64(total))?;
    }

    Ok(frame)
}
