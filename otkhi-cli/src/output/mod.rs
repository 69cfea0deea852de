//! Output formatting module

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use otkhi_engine::{NumeralModel, SearchOutcome};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for report formatters
pub trait ReportFormatter: Send + Sync {
    /// Write a finished search report.
    fn write_report(&self, report: &SearchReport, out: &mut dyn Write) -> Result<()>;
}

/// One value of the winning chain with its spelled-out name.
#[derive(Debug, Clone, Serialize)]
pub struct ChainEntry {
    /// The numeric value
    pub value: u64,
    /// Its full Georgian name
    pub name: String,
    /// Letter count of that name
    pub letters: u32,
}

/// Complete result of one search, ready for formatting.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Inclusive lower bound of the searched range
    pub start: u64,
    /// Exclusive upper bound of the searched range
    pub end: u64,
    /// Backend that ran the search
    pub backend: String,
    /// Number of candidates examined
    pub candidates: u64,
    /// Wall-clock seconds spent searching
    pub elapsed_seconds: f64,
    /// The winning chain, value by value (empty when nothing was found)
    pub chain: Vec<ChainEntry>,
}

impl SearchReport {
    /// Assemble a report from a search outcome, spelling out each chain
    /// value with the given group separator.
    pub fn from_outcome(
        outcome: &SearchOutcome,
        model: &NumeralModel,
        start: u64,
        end: u64,
        separator: &str,
    ) -> Self {
        let chain = outcome
            .chain
            .as_ref()
            .map(|chain| {
                chain
                    .values()
                    .iter()
                    .map(|&value| ChainEntry {
                        value,
                        name: model.spell_out(value, separator, true),
                        letters: model.count_letters(value, separator.chars().count() as u32),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            start,
            end,
            backend: outcome.stats.backend.name().to_string(),
            candidates: outcome.stats.candidates,
            elapsed_seconds: outcome.stats.elapsed.as_secs_f64(),
            chain,
        }
    }

    /// Chain length in values (0 when no chain was found).
    pub fn chain_len(&self) -> usize {
        self.chain.len()
    }
}
