use thiserror::Error;

/// Failures that abort a benchmark run.
///
/// Nothing here is recovered silently: any variant surfaces as whole-run
/// termination, so a printed report always reflects a complete run.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Invalid benchmark knobs, or an unusable host capability query.
    #[error("configuration error: {0}")]
    Config(String),

    /// The monotonic clock reported an elapsed time too small to divide by.
    #[error("clock resolution too coarse: {elapsed_ns} ns elapsed over {iterations} iterations")]
    ClockResolution { elapsed_ns: u128, iterations: u64 },

    /// A worker terminated without producing a result.
    #[error("worker {index} failed: {reason}")]
    Worker { index: usize, reason: String },
}
