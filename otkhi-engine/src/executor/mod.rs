//! Search strategies
//!
//! Each strategy scans a candidate range and returns the winning chain
//! under the shared ordering (longer wins, equal length prefers the
//! smaller start). Strategies are result-equivalent: for the same range
//! and separator they must produce identical chains.

use std::ops::Range;

use otkhi_core::{Chain, NumeralModel};

use crate::error::Result;

pub mod batching;
#[cfg(feature = "cuda")]
pub mod cuda;
pub mod lanes;
#[cfg(feature = "opencl")]
pub mod opencl;

pub use lanes::LaneSearch;

/// Pluggable range-search strategy.
pub trait SearchStrategy: Send + Sync {
    /// Scan `range` and return the maximal chain, or `None` when the range
    /// is empty or no compute platform is available for this strategy.
    fn search(
        &self,
        model: &NumeralModel,
        range: Range<u64>,
        separator_len: u32,
    ) -> Result<Option<Chain>>;

    /// Human-readable strategy name.
    fn name(&self) -> &'static str;
}

/// Fold one candidate chain into the running best under the search
/// ordering. Commutative and associative over the comparison key, so
/// reductions are independent of discovery order.
pub fn reduce_best(best: Option<Chain>, candidate: Chain) -> Option<Chain> {
    match best {
        Some(current) if !candidate.beats(&current) => Some(current),
        _ => Some(candidate),
    }
}

/// A (chain length, starting value) pair as produced by accelerator
/// backends, before the winning chain is re-materialized on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Chain length from this start
    pub steps: i32,
    /// Candidate starting value
    pub start: u64,
}

impl Candidate {
    /// Same ordering as [`Chain::beats`]: longer wins, equal length
    /// prefers the smaller start.
    pub fn beats(&self, other: &Candidate) -> bool {
        self.steps > other.steps || (self.steps == other.steps && self.start < other.start)
    }
}

/// Fold an accelerator candidate into the running best.
pub fn reduce_best_candidate(best: &mut Option<Candidate>, candidate: Option<Candidate>) {
    if let Some(candidate) = candidate {
        match best {
            Some(current) if !candidate.beats(current) => {}
            _ => *best = Some(candidate),
        }
    }
}
