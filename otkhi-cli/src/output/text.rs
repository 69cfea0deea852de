//! Plain text output formatter

use std::io::Write;

use anyhow::Result;

use super::{ReportFormatter, SearchReport};

/// Plain text formatter, one chain value per line
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_report(&self, report: &SearchReport, out: &mut dyn Write) -> Result<()> {
        if report.chain.is_empty() {
            writeln!(
                out,
                "No sequence found over {} and under {}.",
                report.start, report.end
            )?;
            return Ok(());
        }

        writeln!(
            out,
            "First longest ({}) sequence over {} and under {}:",
            report.chain_len(),
            report.start,
            report.end
        )?;
        for entry in &report.chain {
            writeln!(out, "\t{}: {} ({})", entry.value, entry.name, entry.letters)?;
        }
        writeln!(
            out,
            "Searched {} candidates on {} in {:.3}s.",
            report.candidates, report.backend, report.elapsed_seconds
        )?;
        out.flush()?;
        Ok(())
    }
}
