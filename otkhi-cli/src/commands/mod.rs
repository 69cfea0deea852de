//! CLI command implementations

use clap::Subcommand;

pub mod devices;
pub mod search;
pub mod spell;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search a range for the value with the longest name-length chain
    Search(search::SearchArgs),

    /// Spell out a number's Georgian name and its chain
    Spell(spell::SpellArgs),

    /// List the compute devices this build can use
    Devices,
}
