//! Search results and metadata

use std::time::Duration;

use otkhi_core::Chain;

use crate::config::Backend;

/// Result of one range search.
///
/// `chain` is `None` when the range was empty or the selected accelerator
/// had no platform/device available (graceful absence, not an error).
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The winning chain, if any candidate was examined
    pub chain: Option<Chain>,
    /// Search metadata
    pub stats: SearchStats,
}

/// Metadata about how a search ran.
#[derive(Debug, Clone)]
pub struct SearchStats {
    /// Backend that actually ran
    pub backend: Backend,
    /// Number of candidate values in the searched range
    pub candidates: u64,
    /// Wall-clock duration of the search
    pub elapsed: Duration,
}
