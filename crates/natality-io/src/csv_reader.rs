//! CSV file reader with type inference

use crate::frame::Frame;
use crate::reader::{DataReader, IoError, IoResult};
use crate::schema::{ColumnDescriptor, ColumnType, DataColumn, DataSchema};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Rows sampled for type inference
const INFERENCE_ROWS: usize = 100;

/// CSV file reader
pub struct CsvReader {
    path: String,
    schema: DataSchema,
    metadata: HashMap<String, String>,
    delimiter: u8,
}

impl CsvReader {
    /// Open a comma-separated file
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        Self::open_with_delimiter(path, b',')
    }

    /// Open a delimited file with a header row
    pub fn open_with_delimiter(path: impl AsRef<Path>, delimiter: u8) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let mut reader = Self::csv_reader(path, delimiter)?;

        // Infer schema from first few rows
        let mut schema = Self::infer_schema(&mut reader)?;

        let mut metadata = HashMap::new();
        metadata.insert("format".to_string(), "CSV".to_string());
        metadata.insert("delimiter".to_string(), (delimiter as char).to_string());
        schema.metadata = metadata.clone();

        tracing::debug!(
            "Opened {} with {} columns, {} records",
            path.display(),
            schema.num_columns(),
            schema.num_records
        );

        Ok(Self {
            path: path.display().to_string(),
            schema,
            metadata,
            delimiter,
        })
    }

    fn csv_reader(path: &Path, delimiter: u8) -> IoResult<csv::Reader<BufReader<File>>> {
        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        Ok(csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file)))
    }

    fn infer_schema(reader: &mut csv::Reader<BufReader<File>>) -> IoResult<DataSchema> {
        let headers = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        // Read a few rows to infer types
        let mut sample_values: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut num_records = 0;

        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            for (i, value) in record.iter().enumerate() {
                if i < sample_values.len() {
                    sample_values[i].push(value.to_string());
                }
            }
            num_records += 1;

            if num_records >= INFERENCE_ROWS {
                break;
            }
        }

        // Continue counting records
        for result in reader.records() {
            result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            num_records += 1;
        }

        let columns: Vec<ColumnDescriptor> = headers
            .into_iter()
            .zip(sample_values.iter())
            .map(|(name, samples)| ColumnDescriptor::new(name, infer_type(samples)))
            .collect();

        Ok(DataSchema::new(columns, num_records))
    }

    /// Read every record, split into per-column string vectors
    fn read_raw_columns(&self) -> IoResult<Vec<Vec<String>>> {
        let mut reader = Self::csv_reader(Path::new(&self.path), self.delimiter)?;
        let mut columns: Vec<Vec<String>> =
            vec![Vec::with_capacity(self.schema.num_records); self.schema.num_columns()];

        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            for (j, column) in columns.iter_mut().enumerate() {
                column.push(record.get(j).unwrap_or("").to_string());
            }
        }

        Ok(columns)
    }
}

impl DataReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.schema.clone())
    }

    fn read_column(&self, name: &str) -> IoResult<DataColumn> {
        let col_index = self
            .schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;

        let col_desc = &self.schema.columns[col_index];

        let mut reader = Self::csv_reader(Path::new(&self.path), self.delimiter)?;
        let mut values = Vec::with_capacity(self.schema.num_records);
        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            values.push(record.get(col_index).unwrap_or("").to_string());
        }

        parse_column(name, &values, col_desc.dtype)
    }

    fn read_frame(&self) -> IoResult<Frame> {
        let raw = self.read_raw_columns()?;
        let columns = self
            .schema
            .columns
            .iter()
            .zip(raw.iter())
            .map(|(desc, values)| {
                parse_column(&desc.name, values, desc.dtype).map(|col| (desc.name.clone(), col))
            })
            .collect::<IoResult<Vec<_>>>()?;

        Frame::from_columns(columns)
    }

    fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    fn path(&self) -> Option<&str> {
        Some(&self.path)
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Infer column type from sample values
///
/// Integer-looking columns with blank cells are inferred as `Float64`, so the
/// blanks can be held as NaN.
fn infer_type(values: &[String]) -> ColumnType {
    let non_empty: Vec<&str> = values
        .iter()
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .collect();
    if non_empty.is_empty() {
        // Nothing but blanks: a fully-missing numeric column
        return if values.is_empty() {
            ColumnType::String
        } else {
            ColumnType::Float64
        };
    }

    let has_blanks = non_empty.len() < values.len();

    if non_empty.iter().all(|s| s.parse::<i64>().is_ok()) {
        return if has_blanks {
            ColumnType::Float64
        } else {
            ColumnType::Int64
        };
    }

    if non_empty.iter().all(|s| s.parse::<f64>().is_ok()) {
        return ColumnType::Float64;
    }

    // Bool columns have no missing-value marker, so blanks keep them as text
    let is_bool = |s: &&str| matches!(s.to_lowercase().as_str(), "true" | "false" | "yes" | "no");
    if !has_blanks && non_empty.iter().all(is_bool) {
        return ColumnType::Bool;
    }

    ColumnType::String
}

/// Parse column values into a DataColumn
///
/// Blank cells in numeric columns become NaN. An `Int64` column with blanks
/// or fractional values past the sampled rows is widened to `Float64`. Any
/// other cell that does not fit the column type is an error, wherever it
/// sits in the file.
fn parse_column(name: &str, values: &[String], dtype: ColumnType) -> IoResult<DataColumn> {
    let mismatch = |row: usize, value: &str| IoError::TypeMismatch {
        column: name.to_string(),
        expected: dtype.name().to_string(),
        actual: format!("\"{}\" at row {}", value, row + 1),
    };

    match dtype {
        ColumnType::Int64 => {
            let ints: Option<Vec<i64>> = values.iter().map(|s| s.parse().ok()).collect();
            match ints {
                Some(ints) => Ok(DataColumn::Int64(ints)),
                None => parse_column(name, values, ColumnType::Float64),
            }
        }
        ColumnType::Float64 => values
            .iter()
            .enumerate()
            .map(|(row, s)| {
                if s.is_empty() {
                    Ok(f64::NAN)
                } else {
                    s.parse().map_err(|_| mismatch(row, s))
                }
            })
            .collect::<IoResult<Vec<f64>>>()
            .map(DataColumn::Float64),
        ColumnType::Bool => values
            .iter()
            .enumerate()
            .map(|(row, s)| match s.to_lowercase().as_str() {
                "true" | "yes" => Ok(true),
                "false" | "no" => Ok(false),
                _ => Err(mismatch(row, s)),
            })
            .collect::<IoResult<Vec<bool>>>()
            .map(DataColumn::Bool),
        ColumnType::String => Ok(DataColumn::String(values.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_type_int() {
        assert_eq!(infer_type(&strings(&["1", "2", "3"])), ColumnType::Int64);
    }

    #[test]
    fn test_infer_type_int_with_blanks() {
        assert_eq!(infer_type(&strings(&["1", "", "3"])), ColumnType::Float64);
    }

    #[test]
    fn test_infer_type_float() {
        assert_eq!(
            infer_type(&strings(&["1.5", "2.7", "3.14"])),
            ColumnType::Float64
        );
    }

    #[test]
    fn test_infer_type_bool() {
        assert_eq!(
            infer_type(&strings(&["true", "false", "yes"])),
            ColumnType::Bool
        );
    }

    #[test]
    fn test_infer_type_string() {
        assert_eq!(infer_type(&strings(&["hello", "world"])), ColumnType::String);
    }

    #[test]
    fn test_parse_int_widens_on_late_blank() {
        let col = parse_column("prglngth", &strings(&["39", "40", ""]), ColumnType::Int64).unwrap();
        match col {
            DataColumn::Float64(v) => {
                assert_eq!(&v[..2], &[39.0, 40.0]);
                assert!(v[2].is_nan());
            }
            other => panic!("expected Float64, got {:?}", other.dtype()),
        }
    }

    #[test]
    fn test_infer_type_bool_with_blanks() {
        assert_eq!(infer_type(&strings(&["true", "", "no"])), ColumnType::String);
    }

    #[test]
    fn test_parse_rejects_non_numeric_cell() {
        let result = parse_column("totalwgt_lb", &strings(&["7.5", "n/a", ""]), ColumnType::Float64);
        match result {
            Err(IoError::TypeMismatch { column, actual, .. }) => {
                assert_eq!(column, "totalwgt_lb");
                assert!(actual.contains("n/a"));
                assert!(actual.contains("row 2"));
            }
            other => panic!("expected TypeMismatch, got {:?}", other),
        }

        // An integer column falls back to floats, which still reject text
        let result = parse_column("prglngth", &strings(&["39", "forty"]), ColumnType::Int64);
        assert!(matches!(result, Err(IoError::TypeMismatch { .. })));
    }

    #[test]
    fn test_parse_rejects_unknown_bool() {
        let result = parse_column("multbrth", &strings(&["yes", "maybe"]), ColumnType::Bool);
        assert!(matches!(result, Err(IoError::TypeMismatch { .. })));

        let col = parse_column("multbrth", &strings(&["Yes", "false"]), ColumnType::Bool).unwrap();
        assert_eq!(col, DataColumn::Bool(vec![true, false]));
    }

    /// A 200-row file with one bad weight cell at `bad_row` (1-based)
    fn weights_file(bad_row: usize) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "caseid,totalwgt_lb").unwrap();
        for row in 1..=200 {
            if row == bad_row {
                writeln!(file, "{},n/a", row).unwrap();
            } else {
                writeln!(file, "{},7.5", row).unwrap();
            }
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_bad_cell_fails_regardless_of_row() {
        // Inside the sampled rows the column is inferred as text
        let file = weights_file(10);
        let reader = CsvReader::open(file.path()).unwrap();
        let frame = reader.read_frame().unwrap();
        assert!(matches!(
            frame.column_f64("totalwgt_lb"),
            Err(IoError::TypeMismatch { .. })
        ));

        // Past the sampled rows the column is numeric and the cell is rejected
        let file = weights_file(150);
        let reader = CsvReader::open(file.path()).unwrap();
        assert_eq!(
            reader.read_schema().unwrap().column("totalwgt_lb").unwrap().dtype,
            ColumnType::Float64
        );
        assert!(matches!(
            reader.read_frame(),
            Err(IoError::TypeMismatch { .. })
        ));
        assert!(matches!(
            reader.read_column("totalwgt_lb"),
            Err(IoError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_read_frame() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "caseid,prglngth,totalwgt_lb").unwrap();
        writeln!(file, "1,39,8.8125").unwrap();
        writeln!(file, "2,40,").unwrap();
        writeln!(file, "3,38,7.5").unwrap();
        file.flush().unwrap();

        let reader = CsvReader::open(file.path()).unwrap();
        let schema = reader.read_schema().unwrap();
        assert_eq!(schema.num_records, 3);
        assert_eq!(schema.column("prglngth").unwrap().dtype, ColumnType::Int64);
        assert_eq!(schema.metadata.get("format").map(String::as_str), Some("CSV"));
        assert_eq!(schema.metadata, *reader.metadata());

        let frame = reader.read_frame().unwrap();
        assert_eq!(frame.len(), 3);
        let weights = frame.column_f64("totalwgt_lb").unwrap();
        assert!(weights[1].is_nan());

        let lengths = reader.read_column("prglngth").unwrap();
        assert_eq!(lengths, DataColumn::Int64(vec![39, 40, 38]));
        assert!(matches!(
            reader.read_column("birthord"),
            Err(IoError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CsvReader::open("/nonexistent/preg.csv"),
            Err(IoError::FileNotFound(_))
        ));
    }
}
