use clap::Parser;
use ffmc_aggregate::args::Args;
use ffmc_aggregate::config::{self, Config};
use ffmc_aggregate::presentation::{self, ReportOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(config::log_level(&args))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = match Config::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match ffmc_engine::run(&config) {
        Ok(result) => {
            presentation::print_report(&result, &config.province, ReportOptions::from(&args));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
