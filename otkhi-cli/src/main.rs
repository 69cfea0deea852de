//! Binary entry point for the `otkhi` command.

use anyhow::Result;
use clap::Parser;

use otkhi_cli::commands::Commands;

/// Longest Georgian numeral-name chain search
#[derive(Debug, Parser)]
#[command(name = "otkhi", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    match &cli.command {
        Commands::Search(args) => args.execute(),
        Commands::Spell(args) => args.execute(),
        Commands::Devices => otkhi_cli::commands::devices::execute(),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
