use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

pub const TIME_COLUMN: &str = "time_s";
pub const ALTITUDE_COLUMN: &str = "altitude_m";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("no data rows found")]
    Empty,
    #[error("row {row} has {found} fields, `{column}` missing")]
    ShortRow {
        row: usize,
        found: usize,
        column: &'static str,
    },
    #[error("row {row}, column `{column}`: `{value}` is not a finite number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// One flight's telemetry: aligned time and altitude sequences, ordered by
/// (nominally increasing) time. Immutable for the duration of an analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSeries {
    pub time_s: Vec<f64>,
    pub altitude_m: Vec<f64>,
}

impl FlightSeries {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }
}

/// Load a flight CSV from disk.
pub fn load_flight_csv(path: &Path) -> Result<FlightSeries, LoadError> {
    let file = File::open(path)?;
    read_flight_csv(file)
}

/// Parse flight telemetry from any reader.
///
/// The header row must contain `time_s` and `altitude_m` columns (extra
/// columns are ignored, names are matched after trimming). Every data row
/// must carry a finite number in both columns.
pub fn read_flight_csv<R: Read>(input: R) -> Result<FlightSeries, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let time_idx = headers
        .iter()
        .position(|h| h == TIME_COLUMN)
        .ok_or(LoadError::MissingColumn(TIME_COLUMN))?;
    let alt_idx = headers
        .iter()
        .position(|h| h == ALTITUDE_COLUMN)
        .ok_or(LoadError::MissingColumn(ALTITUDE_COLUMN))?;

    let mut time_s = Vec::new();
    let mut altitude_m = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        // 1-based file row, counting the header.
        let row = i + 2;
        time_s.push(field(&record, row, time_idx, TIME_COLUMN)?);
        altitude_m.push(field(&record, row, alt_idx, ALTITUDE_COLUMN)?);
    }

    if time_s.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(FlightSeries { time_s, altitude_m })
}

fn field(
    record: &csv::StringRecord,
    row: usize,
    idx: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    let raw = record.get(idx).ok_or(LoadError::ShortRow {
        row,
        found: record.len(),
        column,
    })?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::InvalidNumber {
            row,
            column,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_a_well_formed_file() {
        let csv = "time_s,altitude_m\n0.0,0.0\n0.1,4.5\n0.2,9.2\n";
        let series = read_flight_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.time_s, vec![0.0, 0.1, 0.2]);
        assert_eq!(series.altitude_m, vec![0.0, 4.5, 9.2]);
    }

    #[test]
    fn ignores_extra_columns_and_header_whitespace() {
        let csv = "temp_c, time_s ,voltage_v, altitude_m \n21.5,0.0,3.7,0.0\n21.4,0.1,3.7,4.5\n";
        let series = read_flight_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.time_s, vec![0.0, 0.1]);
        assert_eq!(series.altitude_m, vec![0.0, 4.5]);
    }

    #[test]
    fn missing_altitude_column_is_fatal() {
        let csv = "time_s,pressure_pa\n0.0,101325\n";
        match read_flight_csv(csv.as_bytes()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, ALTITUDE_COLUMN),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_fatal() {
        let csv = "time_s,altitude_m\n";
        assert!(matches!(read_flight_csv(csv.as_bytes()), Err(LoadError::Empty)));
    }

    #[test]
    fn short_row_is_fatal() {
        let csv = "time_s,altitude_m\n0.0,0.0\n0.1\n";
        match read_flight_csv(csv.as_bytes()) {
            Err(LoadError::ShortRow { row, column, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(column, ALTITUDE_COLUMN);
            }
            other => panic!("expected ShortRow, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cell_is_fatal() {
        let csv = "time_s,altitude_m\n0.0,launch\n";
        match read_flight_csv(csv.as_bytes()) {
            Err(LoadError::InvalidNumber { row, column, value }) => {
                assert_eq!(row, 2);
                assert_eq!(column, ALTITUDE_COLUMN);
                assert_eq!(value, "launch");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn infinite_values_are_rejected() {
        let csv = "time_s,altitude_m\n0.0,inf\n";
        assert!(matches!(
            read_flight_csv(csv.as_bytes()),
            Err(LoadError::InvalidNumber { .. })
        ));
    }
}
