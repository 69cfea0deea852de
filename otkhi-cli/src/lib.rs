//! Command-line interface for the Georgian numeral chain search.
//!
//! Subcommands: `search` scans a range for the value with the longest
//! letter-count chain, `spell` writes out a number's full name and chain,
//! and `devices` lists the compute devices a build can see.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
