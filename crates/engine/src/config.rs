use derive_builder::Builder;
use ffmc_shared_kernel::DomainError;
use std::path::PathBuf;

use crate::output;

pub const DEFAULT_SHAPEFILE: &str = "Kecamatan_Indo.shp";
pub const DEFAULT_VALUE_COLUMN: &str = "EX_FFMC_001";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub input: PathBuf,
    pub province: String,
    #[builder(default = "PathBuf::from(DEFAULT_SHAPEFILE)")]
    pub shapefile: PathBuf,
    #[builder(default = "DEFAULT_VALUE_COLUMN.to_string()")]
    pub value_column: String,
    #[builder(default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,
}

impl Config {
    /// Where the run writes its CSV: `<output_dir>/processed_<province>_<stem>.csv`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(output::output_file_name(&self.province, &self.input))
    }

    /// # Errors
    ///
    /// Rejects a blank province name or value column.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.province.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "province name must not be empty".to_string(),
            });
        }
        if self.value_column.trim().is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "value column must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl From<ConfigBuilderError> for DomainError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::InvalidConfiguration { reason: err.to_string() }
    }
}
