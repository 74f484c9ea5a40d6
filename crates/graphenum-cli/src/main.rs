mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use clap::Parser;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin, StrategyArg};

use crate::error::CliError;
use crate::format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);
    logging::init(&config);

    if let Err(e) = dispatch(&cli, &config) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Reads the input named by the subcommand and runs it.
fn dispatch(cli: &Cli, config: &FormatterConfig) -> Result<(), CliError> {
    let enumeration = cli.enumeration_config();
    match &cli.command {
        Command::Validate { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::validate::run(&content, &cli.format, config)
        }
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, &cli.format)
        }
        Command::Subsets { file, list } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::subsets::run(&content, *list, &enumeration, &cli.format)
        }
        Command::Cycles {
            file,
            size,
            require,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::cycles::run(&content, *size, *require, &enumeration, &cli.format, config)
        }
        Command::Path { file, anchors } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::path::run(&content, anchors, &enumeration, &cli.format, config)
        }
        Command::Version => {
            println!("{}", graphenum_core::version());
            Ok(())
        }
    }
}
