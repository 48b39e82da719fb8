//! texsynth CLI - Command-line interface for procedural texture synthesis
//!
//! This binary provides commands for validating specs, generating gradient and
//! noise textures, and printing starter specs.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use texsynth_cli::commands;
use texsynth_cli::logging::{init_logging, LoggingConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_flags(cli.verbose, cli.quiet));

    let result = match cli.command {
        Commands::Generate { spec, output, seed } => {
            commands::generate::run(&spec, output.as_deref(), seed)
        }
        Commands::Validate { spec, json } => commands::validate::run(&spec, json),
        Commands::Template { kind } => commands::template::run(kind),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
