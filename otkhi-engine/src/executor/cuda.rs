//! CUDA accelerator gateway
//!
//! Thin wrapper around an opaque native library exposing the three-call
//! contract `prepare` / `find_between` / `reset`. The accelerator is a
//! stateful singleton resource: `prepare` uploads the two static tables
//! and a block-count hint, `find_between` runs the full-range search on
//! the device, and `reset` releases device state. The guard type ties
//! `reset` to drop so release happens even on an early return.
//!
//! Nothing about the library's internals is assumed here; it only has to
//! honor the calling convention below and the shared result ordering.

use std::ops::Range;
use std::os::raw::c_int;

use otkhi_core::{Chain, ChainIterator, NumeralModel};

use crate::error::Result;
use crate::executor::{Candidate, SearchStrategy};

/// Best candidate found by the accelerator for a range.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Candidate starting value
    pub start: u64,
    /// Chain length from that start
    pub steps: c_int,
}

#[link(name = "otkhi_cuda")]
extern "C" {
    fn prepare(unit: *const c_int, tiers: *const c_int, blocks: u32);
    fn find_between(start: u64, end: u64) -> Section;
    fn reset();
}

/// Releases accelerator state on drop.
struct DeviceGuard;

impl Drop for DeviceGuard {
    fn drop(&mut self) {
        unsafe { reset() };
    }
}

/// Search strategy delegating to the native CUDA library.
#[derive(Debug, Clone)]
pub struct CudaSearch {
    blocks: u32,
}

impl CudaSearch {
    /// Create the strategy with a device block-count hint.
    pub fn new(blocks: u32) -> Self {
        Self { blocks }
    }
}

impl SearchStrategy for CudaSearch {
    fn search(
        &self,
        model: &NumeralModel,
        range: Range<u64>,
        separator_len: u32,
    ) -> Result<Option<Chain>> {
        if range.is_empty() {
            return Ok(None);
        }

        let unit: Vec<c_int> = model.unit_lengths().iter().map(|&v| v as c_int).collect();
        // The gateway takes the long suffix lengths; the device derives the
        // elided form by the uniform final-vowel contraction.
        let tiers: Vec<c_int> = model
            .tier_long_lengths()
            .iter()
            .map(|&v| v as c_int)
            .collect();

        let section = {
            let _guard = DeviceGuard;
            unsafe {
                prepare(unit.as_ptr(), tiers.as_ptr(), self.blocks);
                find_between(range.start, range.end)
            }
        };

        if section.steps <= 0 {
            log::warn!("cuda search returned no candidate");
            return Ok(None);
        }
        let candidate = Candidate {
            steps: section.steps,
            start: section.start,
        };
        Ok(Some(
            ChainIterator::new(model, separator_len).iterate(candidate.start),
        ))
    }

    fn name(&self) -> &'static str {
        "cuda"
    }
}
