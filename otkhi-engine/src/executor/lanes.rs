//! Multi-lane CPU search
//!
//! Lane `i` of `n` visits candidates `start+i, start+i+n, start+i+2n, ...`
//! below the range end. Lanes share no mutable state: each keeps its own
//! running best and the per-lane bests are reduced after a join. Within a
//! lane candidates arrive in increasing order, so keeping only strictly
//! longer chains already prefers the smallest start at equal length; the
//! cross-lane reduction re-applies the full ordering.

use std::ops::Range;

use otkhi_core::{Chain, ChainIterator, NumeralModel};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::executor::{reduce_best, SearchStrategy};

/// Lane-partitioned CPU search strategy.
#[derive(Debug, Clone)]
pub struct LaneSearch {
    lanes: usize,
}

impl LaneSearch {
    /// Create a search over `lanes` independent lanes (at least 1).
    pub fn new(lanes: usize) -> Self {
        Self {
            lanes: lanes.max(1),
        }
    }

    /// Scan a single lane, returning its best chain.
    fn scan_lane(
        &self,
        model: &NumeralModel,
        range: &Range<u64>,
        separator_len: u32,
        lane: usize,
    ) -> Option<Chain> {
        let iterator = ChainIterator::new(model, separator_len);
        let mut best: Option<Chain> = None;
        let mut candidate = range.start + lane as u64;
        while candidate < range.end {
            let chain = iterator.iterate(candidate);
            // Strictly longer only: earlier (smaller) starts win ties.
            if best.as_ref().map_or(true, |b| chain.len() > b.len()) {
                best = Some(chain);
            }
            candidate += self.lanes as u64;
        }
        best
    }
}

impl SearchStrategy for LaneSearch {
    fn search(
        &self,
        model: &NumeralModel,
        range: Range<u64>,
        separator_len: u32,
    ) -> Result<Option<Chain>> {
        #[cfg(feature = "parallel")]
        let lane_bests: Vec<Option<Chain>> = (0..self.lanes)
            .into_par_iter()
            .map(|lane| self.scan_lane(model, &range, separator_len, lane))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let lane_bests: Vec<Option<Chain>> = (0..self.lanes)
            .map(|lane| self.scan_lane(model, &range, separator_len, lane))
            .collect();

        Ok(lane_bests
            .into_iter()
            .flatten()
            .fold(None, reduce_best))
    }

    fn name(&self) -> &'static str {
        "cpu-lanes"
    }
}
