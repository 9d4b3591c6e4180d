// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use ffmc_engine::config::{DEFAULT_SHAPEFILE, DEFAULT_VALUE_COLUMN};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ffmc_aggregate",
    version = crate::VERSION,
    about = "Maximum FFMC per kecamatan for one province, classified by fire danger"
)]
pub struct Args {
    /// CSV with numeric columns X, Y and the FFMC value column
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub input: PathBuf,

    /// Province name, matched case-insensitively as a substring of `namaprovin`
    #[arg(long, help_heading = "Input")]
    pub province: String,

    /// Kecamatan boundary shapefile (EPSG:4326)
    #[arg(long, default_value = DEFAULT_SHAPEFILE, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub shapefile: PathBuf,

    /// Column holding the FFMC value (older grids use EXTRACT_FFMC_1)
    #[arg(long, default_value = DEFAULT_VALUE_COLUMN, help_heading = "Input")]
    pub value_column: String,

    /// Directory that receives processed_<province>_<input>.csv
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath, help_heading = "Output")]
    pub output_dir: PathBuf,

    /// Report format on stdout
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Print row counts per danger category
    #[arg(long, help_heading = "Output")]
    pub summary: bool,

    /// Print nothing on success
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Output")]
    pub quiet: bool,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,
}
