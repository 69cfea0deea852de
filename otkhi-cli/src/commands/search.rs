//! Search command implementation

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use otkhi_engine::{Backend, ChainSearcher};

use crate::output::{JsonFormatter, ReportFormatter, SearchReport, TextFormatter};

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Lower bound of the search range (inclusive)
    #[arg(short, long, default_value_t = 0)]
    pub start: u64,

    /// Upper bound of the search range (exclusive)
    #[arg(short, long, default_value_t = 1_000_000_000)]
    pub end: u64,

    /// Number of CPU lanes (default: all cores minus two)
    #[arg(short, long, value_name = "N")]
    pub lanes: Option<usize>,

    /// Compute backend
    #[arg(short, long, value_enum, default_value = "cpu")]
    pub backend: BackendArg,

    /// CUDA block-count hint
    #[arg(long, default_value_t = 100_000)]
    pub blocks: u32,

    /// Host memory budget in GiB for in-flight device batches
    #[arg(short, long, default_value_t = 8)]
    pub memory: u64,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Join name groups with a bare space instead of ", "
    #[arg(long)]
    pub no_comma: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Single JSON report object
    Json,
}

/// Selectable compute backends
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BackendArg {
    /// Multi-lane CPU search
    Cpu,
    /// Batched OpenCL kernel search
    Opencl,
    /// Opaque CUDA accelerator
    Cuda,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Cpu => Backend::Cpu,
            BackendArg::Opencl => Backend::OpenCl,
            BackendArg::Cuda => Backend::Cuda,
        }
    }
}

impl SearchArgs {
    /// Execute the search command
    pub fn execute(&self) -> Result<()> {
        let separator = if self.no_comma { " " } else { ", " };

        let mut builder = ChainSearcher::builder()
            .backend(self.backend.into())
            .separator_len(separator.chars().count() as u32)
            .cuda_blocks(self.blocks)
            .system_memory_budget(self.memory.saturating_mul(1024 * 1024 * 1024));
        if let Some(lanes) = self.lanes {
            builder = builder.lanes(lanes);
        }
        let searcher = builder.build()?;

        let outcome = searcher
            .search(self.start, self.end)
            .context("search failed")?;
        let report =
            SearchReport::from_outcome(&outcome, searcher.model(), self.start, self.end, separator);

        let formatter: Box<dyn ReportFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
        };
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .with_context(|| format!("cannot create output file {}", path.display()))?;
                formatter.write_report(&report, &mut file)?;
            }
            None => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                formatter.write_report(&report, &mut lock)?;
                lock.flush()?;
            }
        }
        Ok(())
    }
}
