//! Steering demo generator: records a GIF with an external tool, or renders
//! a static PNG when the tool is unavailable.

mod adapters;
mod cli;
mod config;
mod context;
mod error;
mod logging;
mod output;
mod ports;
mod probe;
mod render;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::DemoError;
use crate::output::print_summary;
use crate::ports::Artifact;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(artifact) => print_summary(&artifact),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Artifact, DemoError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let mut config = Config::load(&config_path).map_err(DemoError::Config)?;
    cli.apply(&mut config);

    if cli.verbose {
        eprintln!("Config: {}", config_path.display());
    }

    ServiceContext::from_config(&config).run()
}
