// crates/engine/src/output.rs
use ffmc_shared_kernel::OutputError;
use std::path::Path;

use crate::aggregate::DistrictSummary;

pub const HEADER: [&str; 5] = ["Provinsi", "Kabupaten/Kota", "Kecamatan", "Max FFMC", "Kategori"];

/// `processed_<province>_<input stem>.csv`, province lower-cased with spaces
/// turned into underscores.
pub fn output_file_name(province: &str, input: &Path) -> String {
    let province = province.replace(' ', "_").to_lowercase();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("processed_{province}_{stem}.csv")
}

/// Write `rows` as CSV. The header is written even when there are no rows.
///
/// # Errors
///
/// Fails when the file cannot be created or written.
pub fn write_summaries(path: &Path, rows: &[DistrictSummary]) -> Result<(), OutputError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| write_error(path, e))?;

    writer.write_record(HEADER).map_err(|e| write_error(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| write_error(path, e))?;
    }
    writer.flush().map_err(|source| OutputError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_error(path: &Path, err: csv::Error) -> OutputError {
    let details = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => OutputError::FileWrite {
            path: path.to_path_buf(),
            source,
        },
        _ => OutputError::Serialization {
            format: "CSV".to_string(),
            details,
        },
    }
}
