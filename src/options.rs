// src/options.rs
use clap::ValueEnum;

/// Style of the report printed to stdout after the CSV is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
