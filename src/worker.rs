//! Worker task: one timed generation loop per core.
//!
//! Each worker owns one generator session, builds a fixed number of
//! programs, and reports a single throughput figure. There is no
//! communication and no shared state; the only side effect is CPU time.

use std::time::{Duration, Instant};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::program::ProgramGenerator;

/// Mixing constant XORed into every worker seed.
///
/// Keeps workers with small, correlated seed values (0, 1, 2, ...) from
/// starting in nearby generator states, and keeps worker 0 off the zero
/// state entirely.
pub const SEED_MIX: u64 = 0x1234_5678_9ABC_DEF0;

/// Elapsed readings below this floor are rejected as measurement failures.
const MIN_ELAPSED: Duration = Duration::from_nanos(1);

/// Programs per second over a measured window.
///
/// A sub-floor elapsed reading is an explicit [`BenchError::ClockResolution`]
/// so that an infinity or NaN can never leak into the aggregate.
pub fn throughput(iterations: u64, elapsed: Duration) -> Result<f64, BenchError> {
    if elapsed < MIN_ELAPSED {
        return Err(BenchError::ClockResolution {
            elapsed_ns: elapsed.as_nanos(),
            iterations,
        });
    }
    Ok(iterations as f64 / elapsed.as_secs_f64())
}

/// Run one worker to completion and return its throughput.
///
/// The initial generator state is `seed ^ SEED_MIX`. The loop is tight and
/// non-yielding: exactly `iterations_per_worker` programs are built and
/// discarded between the two clock reads.
pub fn run_worker(seed: u64, config: &BenchConfig) -> Result<f64, BenchError> {
    let mut generator = ProgramGenerator::new(seed ^ SEED_MIX, config.program_length);

    let start = Instant::now();
    for _ in 0..config.iterations_per_worker {
        // black_box keeps the discarded program observable so the
        // generation loop cannot be optimized away.
        std::hint::black_box(generator.next_program());
    }
    let elapsed = start.elapsed();

    throughput(config.iterations_per_worker, elapsed)
}
