//! JSON output formatter

use std::io::Write;

use anyhow::Result;

use super::{ReportFormatter, SearchReport};

/// JSON formatter, one pretty-printed report object
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write_report(&self, report: &SearchReport, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
