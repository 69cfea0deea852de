//! Batched OpenCL search backend
//!
//! Host-side scheduler around the embedded `count_steps` kernel. The range
//! is cut into device-memory-bounded batches ([`BatchPlan`]); each batch is
//! dispatched, its step-count buffer read back, and the scan for the batch
//! maximum handed to a background task so it overlaps with the next
//! dispatch. Per-batch maxima are combined under the same total ordering
//! as the CPU path, so the result is independent of completion order.
//!
//! A machine without any OpenCL platform yields an empty result, not an
//! error. A device failure mid-run is logged and whatever was reduced from
//! completed batches stands.

use std::collections::VecDeque;
use std::ops::Range;
use std::ptr;
use std::thread;

use opencl3::command_queue::CommandQueue;
use opencl3::context::Context;
use opencl3::device::{get_all_devices, Device, CL_DEVICE_TYPE_ALL, CL_DEVICE_TYPE_GPU};
use opencl3::kernel::{ExecuteKernel, Kernel};
use opencl3::memory::{Buffer, CL_MEM_READ_ONLY, CL_MEM_WRITE_ONLY};
use opencl3::program::Program;
use opencl3::types::{cl_device_type, cl_int, cl_uint, cl_ulong, CL_BLOCKING};

use otkhi_core::{Chain, ChainIterator, NumeralModel};

use crate::error::Result;
use crate::executor::batching::BatchPlan;
use crate::executor::{reduce_best_candidate, Candidate, SearchStrategy};

/// Embedded kernel source: per-candidate chain-length computation,
/// a mechanical transliteration of `NumeralModel::count_letters` composed
/// with chain iteration. Compiled by the device runtime on first use.
const KERNEL_SOURCE: &str = include_str!("../../kernels/steps.cl");

/// Information about a discovered OpenCL device.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// Human-readable device name
    pub name: String,
    /// Device vendor string
    pub vendor: String,
    /// Whether this is a GPU device (vs CPU or accelerator)
    pub is_gpu: bool,
    /// Global memory size in bytes
    pub global_mem_size: u64,
}

/// Probe all available OpenCL devices.
///
/// Returns an empty vec if no OpenCL runtime is installed or no devices
/// are found (never errors).
pub fn probe_devices() -> Vec<DeviceInfo> {
    let device_ids = match get_all_devices(CL_DEVICE_TYPE_ALL) {
        Ok(ids) => ids,
        Err(_) => return Vec::new(),
    };

    device_ids
        .into_iter()
        .map(|id| {
            let dev = Device::new(id);
            let dev_type: cl_device_type = dev.dev_type().unwrap_or(0);
            DeviceInfo {
                name: dev.name().unwrap_or_default().trim().to_string(),
                vendor: dev.vendor().unwrap_or_default().trim().to_string(),
                is_gpu: (dev_type & CL_DEVICE_TYPE_GPU) != 0,
                global_mem_size: dev.global_mem_size().unwrap_or(0),
            }
        })
        .collect()
}

/// Pick the first GPU device, falling back to any device.
fn select_device() -> Option<Device> {
    let all = get_all_devices(CL_DEVICE_TYPE_ALL).unwrap_or_default();
    let gpus = get_all_devices(CL_DEVICE_TYPE_GPU).unwrap_or_default();
    gpus.first().or(all.first()).copied().map(Device::new)
}

/// Batched OpenCL search strategy.
#[derive(Debug, Clone)]
pub struct ClBatchSearch {
    parallelism: usize,
    system_memory_budget: u64,
}

impl ClBatchSearch {
    /// Create the strategy with an in-flight reduction-task hint and a
    /// host memory budget in bytes for outstanding batch buffers.
    pub fn new(parallelism: usize, system_memory_budget: u64) -> Self {
        Self {
            parallelism: parallelism.max(1),
            system_memory_budget,
        }
    }

    fn run_batches(
        &self,
        model: &NumeralModel,
        range: &Range<u64>,
        separator_len: u32,
        device: &Device,
        best: &mut Option<Candidate>,
    ) -> std::result::Result<(), String> {
        let unit_host: Vec<cl_int> = model.unit_lengths().iter().map(|&v| v as cl_int).collect();
        let tier_long_host: Vec<cl_int> = model
            .tier_long_lengths()
            .iter()
            .map(|&v| v as cl_int)
            .collect();
        let tier_short_host: Vec<cl_int> = model
            .tier_short_lengths()
            .iter()
            .map(|&v| v as cl_int)
            .collect();
        let table_bytes = ((unit_host.len() + tier_long_host.len() + tier_short_host.len())
            * std::mem::size_of::<cl_int>()) as u64;

        let total = range.end - range.start;
        let global_mem = device.global_mem_size().map_err(cl_err)?;
        let plan = match BatchPlan::compute(
            total,
            global_mem,
            table_bytes,
            self.parallelism,
            self.system_memory_budget,
        ) {
            Some(plan) => plan,
            None => return Ok(()),
        };
        log::debug!(
            "opencl plan: {} batch(es) of up to {} candidates, {} in flight",
            plan.batch_count,
            plan.batch_size,
            plan.in_flight
        );

        let context = Context::from_device(device).map_err(cl_err)?;
        // OpenCL 1.2 queue creation for the widest driver compatibility.
        #[allow(deprecated)]
        let queue = CommandQueue::create_default(&context, 0).map_err(cl_err)?;
        let program = Program::create_and_build_from_source(&context, KERNEL_SOURCE, "")
            .map_err(|build_log| format!("kernel build failed: {build_log}"))?;
        let kernel = Kernel::create(&program, "count_steps").map_err(cl_err)?;

        let mut unit_buf = unsafe {
            Buffer::<cl_int>::create(&context, CL_MEM_READ_ONLY, unit_host.len(), ptr::null_mut())
                .map_err(cl_err)?
        };
        let mut tier_long_buf = unsafe {
            Buffer::<cl_int>::create(
                &context,
                CL_MEM_READ_ONLY,
                tier_long_host.len(),
                ptr::null_mut(),
            )
            .map_err(cl_err)?
        };
        let mut tier_short_buf = unsafe {
            Buffer::<cl_int>::create(
                &context,
                CL_MEM_READ_ONLY,
                tier_short_host.len(),
                ptr::null_mut(),
            )
            .map_err(cl_err)?
        };
        let steps_buf = unsafe {
            Buffer::<cl_int>::create(
                &context,
                CL_MEM_WRITE_ONLY,
                plan.batch_size as usize,
                ptr::null_mut(),
            )
            .map_err(cl_err)?
        };

        for (buf, host) in [
            (&mut unit_buf, &unit_host),
            (&mut tier_long_buf, &tier_long_host),
            (&mut tier_short_buf, &tier_short_host),
        ] {
            let event = unsafe {
                queue
                    .enqueue_write_buffer(buf, CL_BLOCKING, 0, host, &[])
                    .map_err(cl_err)?
            };
            event.wait().map_err(cl_err)?;
        }

        // Reductions of finished batches run on background tasks while the
        // next batch is dispatched, bounded by the in-flight limit.
        let mut pending: VecDeque<thread::JoinHandle<Option<Candidate>>> = VecDeque::new();
        let mut cursor = range.start;
        while cursor < range.end {
            let size = plan.batch_size.min(range.end - cursor);

            let kernel_event = unsafe {
                ExecuteKernel::new(&kernel)
                    .set_arg(&unit_buf)
                    .set_arg(&tier_long_buf)
                    .set_arg(&tier_short_buf)
                    .set_arg(&steps_buf)
                    .set_arg(&(cursor as cl_ulong))
                    .set_arg(&(size as cl_uint))
                    .set_arg(&(separator_len as cl_int))
                    .set_global_work_size(size as usize)
                    .enqueue_nd_range(&queue)
                    .map_err(cl_err)?
            };
            kernel_event.wait().map_err(cl_err)?;

            let mut steps = vec![0 as cl_int; size as usize];
            let read_event = unsafe {
                queue
                    .enqueue_read_buffer(&steps_buf, CL_BLOCKING, 0, &mut steps, &[])
                    .map_err(cl_err)?
            };
            read_event.wait().map_err(cl_err)?;

            let batch_start = cursor;
            pending.push_back(thread::spawn(move || reduce_batch(batch_start, &steps)));
            if pending.len() >= plan.in_flight {
                if let Some(handle) = pending.pop_front() {
                    reduce_best_candidate(best, join_reduction(handle)?);
                }
            }

            cursor += size;
        }

        for handle in pending {
            reduce_best_candidate(best, join_reduction(handle)?);
        }
        Ok(())
    }
}

impl SearchStrategy for ClBatchSearch {
    fn search(
        &self,
        model: &NumeralModel,
        range: Range<u64>,
        separator_len: u32,
    ) -> Result<Option<Chain>> {
        if range.is_empty() {
            return Ok(None);
        }
        let device = match select_device() {
            Some(device) => device,
            None => {
                log::warn!("no OpenCL platform or device found");
                return Ok(None);
            }
        };

        let mut best: Option<Candidate> = None;
        if let Err(err) = self.run_batches(model, &range, separator_len, &device, &mut best) {
            // Completed batches' results stand; the failed remainder is
            // abandoned.
            log::warn!("opencl search aborted: {err}; returning partial result");
        }

        Ok(best.map(|candidate| ChainIterator::new(model, separator_len).iterate(candidate.start)))
    }

    fn name(&self) -> &'static str {
        "opencl-batch"
    }
}

/// Scan a batch's step counts for the maximum. Ties keep the first hit,
/// which is the smallest start since offsets ascend.
fn reduce_batch(batch_start: u64, steps: &[cl_int]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (offset, &count) in steps.iter().enumerate() {
        if best.map_or(true, |b| count > b.steps) {
            best = Some(Candidate {
                steps: count,
                start: batch_start + offset as u64,
            });
        }
    }
    best
}

fn join_reduction(
    handle: thread::JoinHandle<Option<Candidate>>,
) -> std::result::Result<Option<Candidate>, String> {
    handle
        .join()
        .map_err(|_| "batch reduction task panicked".to_string())
}

fn cl_err(err: impl std::fmt::Display) -> String {
    err.to_string()
}
