//! fmext binary entry point

mod cli_bin;

use anyhow::Result;
use clap::Parser;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands;
use fmext::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.extract.verbose);

    match cli.command {
        Some(Commands::Version) => {
            commands::version_command();
        }
        Some(Commands::Alias(args)) => {
            let config = Config::from_env()?;
            commands::alias_command(args, &config)?;
        }
        None => {
            let had_errors = commands::extract_command(cli.extract)?;
            if had_errors {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
