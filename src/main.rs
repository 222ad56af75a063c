mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod posts_cmd;
mod probe_cmd;
mod reconcile_cmd;
mod status_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::SuhbaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SuhbaConfig::load(&cli.config)?;
    match cli.command {
        Command::Status(args) => status_cmd::run(args, &config),
        Command::Probe(args) => probe_cmd::run(args, &config),
        Command::Calendar(args) => calendar_cmd::run(args, &config),
        Command::Posts(command) => posts_cmd::run(command, &config),
        Command::Reconcile(args) => reconcile_cmd::run(args, &config),
    }
}
