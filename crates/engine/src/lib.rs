// crates/engine/src/lib.rs
use ffmc_shared_kernel::{Bounds, DomainError, ErrorContext, InputError, Reading, Result};
use log::info;
use std::path::Path;

pub mod aggregate;
pub mod boundary;
pub mod config;
pub mod output;
pub mod readings;
pub mod spatial;
pub mod stats;

use crate::aggregate::{DistrictSummary, MaxByDistrict};
use crate::boundary::Boundary;
use crate::config::Config;
use crate::spatial::BoundaryIndex;
use crate::stats::{RunResult, RunStats};

/// Run the whole pipeline and write the output CSV.
///
/// Nothing is written when any step before the write fails.
///
/// # Errors
///
/// Returns an error when an input file is missing or malformed, when the
/// province matches no boundary, or when the output cannot be written.
pub fn run(config: &Config) -> Result<RunResult> {
    config.validate()?;
    ensure_exists(&config.input)?;
    ensure_exists(&config.shapefile)?;

    let readings = readings::read_readings(&config.input, &config.value_column)
        .with_context(|| format!("reading points from {}", config.input.display()))?;
    info!("read {} points from {}", readings.len(), config.input.display());

    boundary::check_crs(&config.shapefile);
    let boundaries = boundary::read_boundaries(&config.shapefile)
        .with_context(|| format!("reading boundaries from {}", config.shapefile.display()))?;
    info!(
        "read {} boundaries from {}",
        boundaries.len(),
        config.shapefile.display()
    );

    let boundaries_read = boundaries.len();
    let selected = select_province(boundaries, &config.province)?;
    info!(
        "{} boundaries match province '{}'",
        selected.len(),
        config.province
    );

    let (rows, mut stats) = join_and_aggregate(&readings, &selected);
    stats.boundaries_read = boundaries_read;

    let output_path = config.output_path();
    output::write_summaries(&output_path, &rows)?;
    info!("wrote {} rows to {}", rows.len(), output_path.display());

    Ok(RunResult {
        output_path,
        rows,
        stats,
    })
}

/// Keep the boundaries whose province name contains `province`, ignoring case.
///
/// # Errors
///
/// `ProvinceNotFound` when nothing matches.
pub fn select_province(boundaries: Vec<Boundary>, province: &str) -> Result<Vec<Boundary>> {
    let selected: Vec<_> = boundaries
        .into_iter()
        .filter(|b| b.matches_province(province))
        .collect();

    if selected.is_empty() {
        return Err(DomainError::ProvinceNotFound {
            province: province.to_string(),
        }
        .into());
    }
    Ok(selected)
}

/// Bounding-box filter, spatial join and group-by-max over `selected`.
///
/// `boundaries_read` in the returned stats is left at zero.
pub fn join_and_aggregate(
    readings: &[Reading],
    selected: &[Boundary],
) -> (Vec<DistrictSummary>, RunStats) {
    let mut stats = RunStats {
        boundaries_selected: selected.len(),
        points_read: readings.len(),
        ..RunStats::default()
    };

    let Some(total) = Bounds::union_all(selected.iter().filter_map(Boundary::bounds)) else {
        return (Vec::new(), stats);
    };

    let index = BoundaryIndex::new(selected);
    let mut groups = MaxByDistrict::new();

    for reading in readings {
        let Some(position) = reading.position() else {
            continue;
        };
        if !total.contains(position[0], position[1]) {
            continue;
        }
        stats.points_in_bounds += 1;

        let Some(value) = reading.ffmc() else {
            continue;
        };
        for boundary in index.containing(position) {
            stats.points_joined += 1;
            if boundary.named {
                groups.record(&boundary.key, value);
            }
        }
    }

    info!(
        "{} of {} points fall inside the province bounds, {} joins into {} kecamatan",
        stats.points_in_bounds,
        stats.points_read,
        stats.points_joined,
        groups.len()
    );
    (groups.into_summaries(), stats)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into())
    }
}
