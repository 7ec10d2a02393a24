use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use spdlog::{error, info, warn};

use postgen::generator::generate;
use postgen::logger::configure_logger;

use crate::config::{generate_cfg, open_config};

mod config;
mod config_data;

const CFG_FILE_NAME: &str = "postgen.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Writes a sample configuration (to the config path, if given) and exits
    #[arg(long)]
    write_sample_config: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    if args.write_sample_config {
        generate_cfg(&config_path)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run postgen --help");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Reading posts from {}", config.paths.records_file.display());

    match generate(&config) {
        Ok(report) => {
            info!("{} pages written, {} posts skipped", report.written.len(), report.skipped);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}
