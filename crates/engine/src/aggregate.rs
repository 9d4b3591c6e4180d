// crates/engine/src/aggregate.rs
use ffmc_shared_kernel::{AdminKey, DangerCategory, round2};
use serde::Serialize;
use std::collections::BTreeMap;

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictSummary {
    #[serde(rename = "Provinsi")]
    pub provinsi: String,
    #[serde(rename = "Kabupaten/Kota")]
    pub kabupaten_kota: String,
    #[serde(rename = "Kecamatan")]
    pub kecamatan: String,
    #[serde(rename = "Max FFMC")]
    pub max_ffmc: f64,
    #[serde(rename = "Kategori")]
    pub kategori: DangerCategory,
}

impl DistrictSummary {
    /// Rounds `max` to two decimals and classifies the rounded value.
    pub fn new(key: AdminKey, max: f64) -> Self {
        let max_ffmc = round2(max);
        Self {
            provinsi: key.provinsi,
            kabupaten_kota: key.kabupaten_kota,
            kecamatan: key.kecamatan,
            max_ffmc,
            kategori: DangerCategory::from_ffmc(max_ffmc),
        }
    }
}

/// Running maximum per admin key, kept in key order.
#[derive(Debug, Default)]
pub struct MaxByDistrict {
    groups: BTreeMap<AdminKey, f64>,
}

impl MaxByDistrict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &AdminKey, value: f64) {
        if let Some(current) = self.groups.get_mut(key) {
            if value > *current {
                *current = value;
            }
        } else {
            self.groups.insert(key.clone(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_summaries(self) -> Vec<DistrictSummary> {
        self.groups
            .into_iter()
            .map(|(key, max)| DistrictSummary::new(key, max))
            .collect()
    }
}
