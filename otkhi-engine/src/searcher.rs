//! Search coordinator
//!
//! [`ChainSearcher`] owns the numeral model and the engine configuration
//! and dispatches a range search to the configured backend strategy,
//! wrapping the winning chain with run metadata.

use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use otkhi_core::NumeralModel;

use crate::config::{Backend, EngineConfig};
use crate::error::{EngineError, Result};
use crate::executor::{LaneSearch, SearchStrategy};
use crate::outcome::{SearchOutcome, SearchStats};

/// Coordinates range searches over a shared numeral model.
#[derive(Debug, Clone)]
pub struct ChainSearcher {
    model: Arc<NumeralModel>,
    config: EngineConfig,
}

impl ChainSearcher {
    /// Create a searcher with the standard model and default configuration.
    pub fn new() -> Self {
        Self {
            model: Arc::new(NumeralModel::standard()),
            config: EngineConfig::default(),
        }
    }

    /// Start building a searcher with a custom configuration.
    pub fn builder() -> ChainSearcherBuilder {
        ChainSearcherBuilder::new()
    }

    /// The model this searcher runs against.
    pub fn model(&self) -> &NumeralModel {
        &self.model
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search `[start, end)` for the value with the longest chain.
    ///
    /// A degenerate bound (`end <= start`) is widened to cover `start`
    /// alone, so a search always examines at least one candidate.
    pub fn search(&self, start: u64, end: u64) -> Result<SearchOutcome> {
        let end = if end <= start { start + 1 } else { end };
        let range = start..end;
        let candidates = range.end - range.start;

        let strategy = self.strategy()?;
        log::info!(
            "searching [{start}, {end}) with backend '{}' ({candidates} candidates)",
            strategy.name()
        );

        let began = Instant::now();
        let chain = strategy.search(&self.model, range, self.config.separator_len)?;
        let elapsed = began.elapsed();

        Ok(SearchOutcome {
            chain,
            stats: SearchStats {
                backend: self.config.backend,
                candidates,
                elapsed,
            },
        })
    }

    fn strategy(&self) -> Result<Box<dyn SearchStrategy>> {
        match self.config.backend {
            Backend::Cpu => Ok(Box::new(LaneSearch::new(self.config.effective_lanes()))),
            Backend::OpenCl => {
                #[cfg(feature = "opencl")]
                {
                    Ok(Box::new(crate::executor::opencl::ClBatchSearch::new(
                        self.config.effective_lanes(),
                        self.config.system_memory_budget,
                    )))
                }
                #[cfg(not(feature = "opencl"))]
                {
                    Err(EngineError::BackendDisabled {
                        backend: "opencl",
                        feature: "opencl",
                    })
                }
            }
            Backend::Cuda => {
                #[cfg(feature = "cuda")]
                {
                    Ok(Box::new(crate::executor::cuda::CudaSearch::new(
                        self.config.cuda_blocks,
                    )))
                }
                #[cfg(not(feature = "cuda"))]
                {
                    Err(EngineError::BackendDisabled {
                        backend: "cuda",
                        feature: "cuda",
                    })
                }
            }
        }
    }
}

impl Default for ChainSearcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`ChainSearcher`].
#[derive(Debug, Clone, Default)]
pub struct ChainSearcherBuilder {
    model: Option<Arc<NumeralModel>>,
    config: EngineConfig,
}

impl ChainSearcherBuilder {
    /// Start from defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific numeral model instead of the standard one.
    pub fn model(mut self, model: NumeralModel) -> Self {
        self.model = Some(Arc::new(model));
        self
    }

    /// Select the search backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Set an explicit lane count.
    pub fn lanes(mut self, lanes: usize) -> Self {
        self.config.lanes = Some(lanes);
        self
    }

    /// Set the group-separator character length.
    pub fn separator_len(mut self, separator_len: u32) -> Self {
        self.config.separator_len = separator_len;
        self
    }

    /// Set the CUDA block-count hint.
    pub fn cuda_blocks(mut self, blocks: u32) -> Self {
        self.config.cuda_blocks = blocks;
        self
    }

    /// Set the host memory budget in bytes for in-flight batches.
    pub fn system_memory_budget(mut self, bytes: u64) -> Self {
        self.config.system_memory_budget = bytes;
        self
    }

    /// Validate and build the searcher.
    pub fn build(self) -> Result<ChainSearcher> {
        self.config.validate()?;
        Ok(ChainSearcher {
            model: self
                .model
                .unwrap_or_else(|| Arc::new(NumeralModel::standard())),
            config: self.config,
        })
    }
}
