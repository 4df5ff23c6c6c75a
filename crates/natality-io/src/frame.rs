//! In-memory tabular dataset
//!
//! A `Frame` holds named columns of equal length, in the order they were
//! read. Row selection produces a new frame; nothing is mutated in place.

use crate::reader::{IoError, IoResult};
use crate::schema::{ColumnDescriptor, ColumnType, DataColumn, DataSchema};
use natality_stats::SummaryStats;

/// Named, equal-length columns
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: Vec<(String, DataColumn)>,
    num_rows: usize,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from (name, column) pairs
    ///
    /// Every column must have the same length as the first.
    pub fn from_columns(columns: Vec<(String, DataColumn)>) -> IoResult<Self> {
        let num_rows = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        for (name, column) in &columns {
            if column.len() != num_rows {
                return Err(IoError::LengthMismatch {
                    column: name.clone(),
                    expected: num_rows,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, num_rows })
    }

    /// Return a frame with `name` added, or replaced if it already exists
    pub fn with_column(mut self, name: impl Into<String>, data: DataColumn) -> IoResult<Self> {
        let name = name.into();
        if !self.columns.is_empty() && data.len() != self.num_rows {
            return Err(IoError::LengthMismatch {
                column: name,
                expected: self.num_rows,
                actual: data.len(),
            });
        }
        if self.columns.is_empty() {
            self.num_rows = data.len();
        }

        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = data,
            None => self.columns.push((name, data)),
        }
        Ok(self)
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.num_rows
    }

    /// Check if the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Check if a column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Describe the frame's columns
    pub fn schema(&self) -> DataSchema {
        let columns = self
            .columns
            .iter()
            .map(|(n, c)| ColumnDescriptor::new(n.clone(), c.dtype()))
            .collect();
        DataSchema::new(columns, self.num_rows)
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> IoResult<&DataColumn> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
    }

    /// Extract a numeric column as f64 (missing values are NaN)
    pub fn column_f64(&self, name: &str) -> IoResult<Vec<f64>> {
        let column = self.column(name)?;
        column.to_f64().ok_or_else(|| IoError::TypeMismatch {
            column: name.to_string(),
            expected: "numeric".to_string(),
            actual: column.dtype().name().to_string(),
        })
    }

    /// Summary statistics of a numeric column
    pub fn summary(&self, name: &str) -> IoResult<SummaryStats> {
        Ok(SummaryStats::from_data(&self.column_f64(name)?))
    }

    /// Mean of a numeric column, skipping missing values
    pub fn mean(&self, name: &str) -> IoResult<f64> {
        Ok(self.summary(name)?.mean)
    }

    /// Sample variance of a numeric column, skipping missing values
    pub fn var(&self, name: &str) -> IoResult<f64> {
        Ok(self.summary(name)?.variance)
    }

    /// Keep the rows at `indices`, in that order
    pub fn select_rows(&self, indices: &[usize]) -> Frame {
        Frame {
            columns: self
                .columns
                .iter()
                .map(|(n, c)| (n.clone(), c.take(indices)))
                .collect(),
            num_rows: indices.len(),
        }
    }

    /// Keep the rows whose value in a numeric column satisfies `predicate`
    ///
    /// Missing values are passed to the predicate as NaN.
    pub fn filter_by<F>(&self, name: &str, predicate: F) -> IoResult<Frame>
    where
        F: Fn(f64) -> bool,
    {
        let values = self.column_f64(name)?;
        let indices: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| predicate(v))
            .map(|(i, _)| i)
            .collect();
        Ok(self.select_rows(&indices))
    }

    /// Dtype of a column, if present
    pub fn dtype(&self, name: &str) -> Option<ColumnType> {
        self.column(name).ok().map(|c| c.dtype())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn births() -> Frame {
        Frame::from_columns(vec![
            ("prglngth".to_string(), DataColumn::Int64(vec![39, 40, 38, 39])),
            (
                "totalwgt_lb".to_string(),
                DataColumn::Float64(vec![7.5, f64::NAN, 6.5, 8.0]),
            ),
            (
                "label".to_string(),
                DataColumn::String(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_columns_checks_lengths() {
        let result = Frame::from_columns(vec![
            ("a".to_string(), DataColumn::Int64(vec![1, 2])),
            ("b".to_string(), DataColumn::Int64(vec![1])),
        ]);
        assert!(matches!(result, Err(IoError::LengthMismatch { .. })));
    }

    #[test]
    fn test_mean_and_var_skip_missing() {
        let frame = births();
        assert!((frame.mean("totalwgt_lb").unwrap() - 22.0 / 3.0).abs() < 1e-12);
        // deviations from 22/3: 1/6, -5/6, 2/3
        let expected = (1.0 / 36.0 + 25.0 / 36.0 + 16.0 / 36.0) / 2.0;
        assert!((frame.var("totalwgt_lb").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_non_numeric_column() {
        let frame = births();
        assert!(matches!(
            frame.column_f64("label"),
            Err(IoError::TypeMismatch { .. })
        ));
        assert!(matches!(
            frame.mean("missing"),
            Err(IoError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_filter_by() {
        let frame = births();
        let term = frame.filter_by("prglngth", |w| w >= 39.0).unwrap();
        assert_eq!(term.len(), 2);
        assert_eq!(
            term.column("prglngth").unwrap(),
            &DataColumn::Int64(vec![39, 40])
        );
        assert_eq!(term.column_names(), frame.column_names());
    }

    #[test]
    fn test_with_column_replaces() {
        let frame = births()
            .with_column("prglngth", DataColumn::Int64(vec![1, 2, 3, 4]))
            .unwrap();
        assert_eq!(frame.column_names().len(), 3);
        assert_eq!(frame.dtype("prglngth"), Some(ColumnType::Int64));
        assert_eq!(frame.column_f64("prglngth").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);

        let result = frame.with_column("short", DataColumn::Int64(vec![1]));
        assert!(matches!(result, Err(IoError::LengthMismatch { .. })));
    }

    #[test]
    fn test_schema() {
        let schema = births().schema();
        assert_eq!(schema.num_records, 4);
        assert_eq!(schema.column("label").unwrap().dtype, ColumnType::String);
    }
}
