mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Generate {
            schematic,
            name,
            no_style,
            no_format,
            test,
            dry_run,
            component,
            set,
        } => commands::generate::run(commands::generate::GenerateArgs {
            schematic,
            name,
            no_style,
            no_format,
            test,
            dry_run,
            component,
            set,
        }),
        Commands::Schematics => commands::schematics::run(),
    }
}
