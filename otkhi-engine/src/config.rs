//! Engine configuration

use crate::error::{EngineError, Result};

/// Which search backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Multi-lane CPU search
    Cpu,
    /// Batched OpenCL kernel search
    OpenCl,
    /// Opaque CUDA accelerator gateway
    Cuda,
}

impl Backend {
    /// Human-readable backend name.
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Cpu => "cpu",
            Backend::OpenCl => "opencl",
            Backend::Cuda => "cuda",
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Backend selector
    pub backend: Backend,
    /// Number of CPU lanes, or in-flight reduction tasks for the OpenCL
    /// path (None = auto: all cores minus two, at least one)
    pub lanes: Option<usize>,
    /// Character length of the group separator text (2 for ", ")
    pub separator_len: u32,
    /// CUDA block-count hint passed to the accelerator gateway
    pub cuda_blocks: u32,
    /// System memory budget in bytes bounding OpenCL batches held on the
    /// host at once
    pub system_memory_budget: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Cpu,
            lanes: None,
            separator_len: 2,
            cuda_blocks: 100_000,
            system_memory_budget: 8 * 1024 * 1024 * 1024, // 8 GiB
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.lanes == Some(0) {
            return Err(EngineError::InvalidConfig(
                "lane count must be at least 1".to_string(),
            ));
        }
        if self.system_memory_budget == 0 {
            return Err(EngineError::InvalidConfig(
                "system memory budget must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the lane count: explicit value, or all cores minus two.
    pub fn effective_lanes(&self) -> usize {
        match self.lanes {
            Some(n) => n,
            None => default_lanes(),
        }
    }
}

/// Default lane count: leave two cores for the rest of the system.
pub fn default_lanes() -> usize {
    #[cfg(feature = "parallel")]
    {
        num_cpus::get().saturating_sub(2).max(1)
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.backend, Backend::Cpu);
        assert_eq!(config.separator_len, 2);
        assert!(config.effective_lanes() >= 1);
    }

    #[test]
    fn zero_lanes_is_rejected() {
        let config = EngineConfig {
            lanes: Some(0),
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn backend_names() {
        assert_eq!(Backend::Cpu.name(), "cpu");
        assert_eq!(Backend::OpenCl.name(), "opencl");
        assert_eq!(Backend::Cuda.name(), "cuda");
    }
}
