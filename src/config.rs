// src/config.rs
use crate::args::Args;
use crate::presentation::ReportOptions;
pub use ffmc_engine::config::{Config, ConfigBuilder};
use ffmc_shared_kernel::DomainError;
use log::LevelFilter;

impl TryFrom<&Args> for Config {
    type Error = DomainError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let config = ConfigBuilder::default()
            .input(args.input.clone())
            .province(args.province.as_str())
            .shapefile(args.shapefile.clone())
            .value_column(args.value_column.as_str())
            .output_dir(args.output_dir.clone())
            .build()?;
        config.validate()?;
        Ok(config)
    }
}

impl From<&Args> for ReportOptions {
    fn from(args: &Args) -> Self {
        Self {
            format: args.format,
            summary: args.summary,
            quiet: args.quiet,
        }
    }
}

/// `warn` by default, one step louder per `-v`.
pub fn log_level(args: &Args) -> LevelFilter {
    match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
