//! Fan-out/fan-in throughput harness.
//!
//! Spawns one CPU-bound worker thread per logical core, each with a
//! distinct seed, then joins them in submission order so results stay
//! index-aligned even when threads complete out of order. A single pass is
//! definitive: there are no retries, no timeouts, and no partial results.

use std::thread;

use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::report::AggregateReport;
use crate::worker;

/// Per-index seed stride.
///
/// Spreads worker seeds apart before the mixing XOR in the worker. No
/// formal collision bound; distinctness is asserted by test for the first
/// 256 indices, well past realistic core counts.
pub const SEED_STRIDE: u64 = 0xAB_CDEF;

/// Parallel throughput harness.
#[derive(Debug)]
pub struct Harness {
    config: BenchConfig,
}

impl Harness {
    /// Create a harness, failing fast on invalid knobs.
    pub fn new(config: BenchConfig) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Seed for a given worker index.
    pub fn worker_seed(index: usize) -> u64 {
        (index as u64).wrapping_mul(SEED_STRIDE)
    }

    /// Number of workers: the configured override, or one per logical core.
    fn worker_count(&self) -> Result<usize, BenchError> {
        if self.config.workers > 0 {
            return Ok(self.config.workers);
        }
        thread::available_parallelism()
            .map(|n| n.get())
            .map_err(|e| BenchError::Config(format!("cannot detect logical core count: {}", e)))
    }

    /// Run the full fan-out/fan-in pass and aggregate the results.
    pub fn run(&self) -> Result<AggregateReport, BenchError> {
        let n = self.worker_count()?;
        info!(
            workers = n,
            program_length = self.config.program_length,
            iterations_per_worker = self.config.iterations_per_worker,
            "starting throughput run"
        );

        let mut handles = Vec::with_capacity(n);
        for index in 0..n {
            let config = self.config.clone();
            let seed = Self::worker_seed(index);
            let handle = thread::Builder::new()
                .name(format!("bench-worker-{}", index))
                .spawn(move || worker::run_worker(seed, &config))
                .map_err(|e| BenchError::Worker {
                    index,
                    reason: format!("spawn failed: {}", e),
                })?;
            handles.push(handle);
        }

        // Join in submission order; completion order carries no meaning.
        let mut per_worker = Vec::with_capacity(n);
        for (index, handle) in handles.into_iter().enumerate() {
            let throughput = handle
                .join()
                .map_err(|_| BenchError::Worker {
                    index,
                    reason: "panicked before reporting a result".to_string(),
                })??;
            debug!(worker = index, programs_per_sec = throughput, "worker done");
            per_worker.push(throughput);
        }

        let report = AggregateReport::from_results(per_worker);
        info!(
            total_programs_per_sec = report.total(),
            workers = report.worker_count(),
            "throughput run complete"
        );
        Ok(report)
    }
}
