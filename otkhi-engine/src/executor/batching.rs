//! Batch geometry for the accelerator scheduler
//!
//! Pure host-side arithmetic deciding how a candidate range is cut into
//! device-memory-bounded batches and how many per-batch reduction tasks
//! may be outstanding at once. Kept separate from the OpenCL plumbing so
//! the math is testable without a device.

/// Hard ceiling on candidates per batch, independent of device memory.
pub const MAX_BATCH: u64 = 2_000_000_000;

/// Working-memory margin reserved on the device beyond the output buffer
/// and the read-only tables.
pub const DEVICE_MARGIN_BYTES: u64 = 256 * 1024 * 1024;

/// Bytes per candidate in the step-count output buffer.
pub const BYTES_PER_CANDIDATE: u64 = 4;

/// How a range search is split into device batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    /// Candidates per batch (the final batch may be smaller)
    pub batch_size: u64,
    /// Total number of batches
    pub batch_count: u64,
    /// Maximum outstanding host-side reduction tasks
    pub in_flight: usize,
}

impl BatchPlan {
    /// Compute the plan for `total` candidates.
    ///
    /// The device bound is the usable global memory divided by the output
    /// footprint, rounded down to a multiple of the reservation unit
    /// (table bytes plus the fixed margin), then clamped by [`MAX_BATCH`].
    /// The in-flight limit is bounded by the batch count and by
    /// `system_budget / batch_size / 4`, and is always at least 1.
    ///
    /// Returns `None` for an empty range.
    pub fn compute(
        total: u64,
        device_global_mem: u64,
        table_bytes: u64,
        parallelism: usize,
        system_budget: u64,
    ) -> Option<Self> {
        if total == 0 {
            return None;
        }

        let reservation = table_bytes + DEVICE_MARGIN_BYTES;
        let mut device_bound = device_global_mem / BYTES_PER_CANDIDATE;
        device_bound -= device_bound % reservation;
        let batch_size = device_bound.min(MAX_BATCH).max(1).min(total);

        let batch_count = total.div_ceil(batch_size);
        let by_budget = (system_budget / batch_size / BYTES_PER_CANDIDATE).max(1);
        let in_flight = (parallelism as u64)
            .min(batch_count)
            .min(by_budget)
            .max(1) as usize;

        Some(Self {
            batch_size,
            batch_count,
            in_flight,
        })
    }
}
