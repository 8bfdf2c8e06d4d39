use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::open_output;

fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("confluence=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Diff(args) => {
            let mut out = open_output(None)?;
            commands::diff::run(args, cli.format, &mut out)
        }
        Commands::Patch(args) => {
            let mut out = open_output(args.output.as_deref())?;
            commands::patch::run(args, cli.format, &mut out)
        }
        Commands::Merge(args) => {
            let mut out = open_output(args.output.as_deref())?;
            commands::merge::run(args, cli.format, &mut out)
        }
    }
}
