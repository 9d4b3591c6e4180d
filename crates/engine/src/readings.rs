// crates/engine/src/readings.rs
use ffmc_shared_kernel::{InputError, Reading};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const X_COLUMN: &str = "X";
pub const Y_COLUMN: &str = "Y";

/// Cells read as missing values, besides empty ones.
const NA_TOKENS: &[&str] = &["NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "#N/A", "<NA>"];

/// Read the point grid from `path`.
///
/// # Errors
///
/// Fails when the file cannot be opened, a required column is missing, or a
/// non-empty cell in one of the used columns is not a number.
pub fn read_readings(path: &Path, value_column: &str) -> Result<Vec<Reading>, InputError> {
    let file = File::open(path).map_err(|source| open_error(path, source))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers().map_err(|e| malformed(path, &e))?.clone();
    let x_idx = column_index(&headers, X_COLUMN, path)?;
    let y_idx = column_index(&headers, Y_COLUMN, path)?;
    let v_idx = column_index(&headers, value_column, path)?;

    let mut readings = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| malformed(path, &e))?;
        let line = record.position().map_or(0, csv::Position::line);
        let cell = |idx: usize, column: &str| parse_cell(record.get(idx), column, line, path);

        readings.push(Reading {
            x: cell(x_idx, X_COLUMN)?,
            y: cell(y_idx, Y_COLUMN)?,
            value: cell(v_idx, value_column)?,
        });
    }

    Ok(readings)
}

fn column_index(headers: &csv::StringRecord, column: &str, path: &Path) -> Result<usize, InputError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| InputError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn parse_cell(
    raw: Option<&str>,
    column: &str,
    line: u64,
    path: &Path,
) -> Result<Option<f64>, InputError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };
    if raw.is_empty() || NA_TOKENS.contains(&raw) {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| InputError::InvalidValue {
            path: path.to_path_buf(),
            line,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

pub(crate) fn open_error(path: &Path, source: std::io::Error) -> InputError {
    if source.kind() == std::io::ErrorKind::NotFound {
        InputError::FileNotFound { path: path.to_path_buf() }
    } else {
        InputError::FileRead { path: path.to_path_buf(), source }
    }
}

fn malformed(path: &Path, err: &csv::Error) -> InputError {
    InputError::Malformed {
        path: path.to_path_buf(),
        format: "CSV".to_string(),
        details: err.to_string(),
    }
}
