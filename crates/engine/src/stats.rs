// crates/engine/src/stats.rs
use ffmc_shared_kernel::DangerCategory;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::aggregate::DistrictSummary;

/// Row counts at each stage of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub boundaries_read: usize,
    pub boundaries_selected: usize,
    pub points_read: usize,
    pub points_in_bounds: usize,
    /// Point/polygon pairs; a point inside overlapping polygons counts once per polygon.
    pub points_joined: usize,
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub output_path: PathBuf,
    pub rows: Vec<DistrictSummary>,
    pub stats: RunStats,
}

impl RunResult {
    /// Number of output rows per category, every category present.
    pub fn category_counts(&self) -> BTreeMap<DangerCategory, usize> {
        let mut counts: BTreeMap<_, _> = DangerCategory::ALL.iter().map(|c| (*c, 0)).collect();
        for row in &self.rows {
            *counts.entry(row.kategori).or_insert(0) += 1;
        }
        counts
    }
}
