//! Single-thread duration-bounded baseline.
//!
//! The lower-complexity counterpart of the parallel harness: one generator,
//! one core, run until a deadline and count what was produced. Useful as a
//! sanity figure for the per-worker rates the harness reports.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::program::ProgramGenerator;
use crate::report::{format_count, format_rate};
use crate::worker;

/// Seed for the baseline's single generator session.
const BASELINE_SEED: u64 = 0;

/// Result of one baseline run.
#[derive(Debug, Clone)]
pub struct BaselineResult {
    pub programs: u64,
    pub elapsed: Duration,
    pub programs_per_sec: f64,
}

impl fmt::Display for BaselineResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- CPU Baseline Results ---")?;
        writeln!(f, "Duration: {:.2} s", self.elapsed.as_secs_f64())?;
        writeln!(f, "Programs generated: {}", format_count(self.programs))?;
        writeln!(
            f,
            "Estimated speed: {} programs/sec",
            format_rate(self.programs_per_sec)
        )?;
        writeln!(
            f,
            "Equivalent: {} kProg/s, {} MProg/s",
            format_rate(self.programs_per_sec / 1e3),
            format_rate(self.programs_per_sec / 1e6)
        )?;
        Ok(())
    }
}

/// Run the baseline for the configured duration.
pub fn run_baseline(config: &BenchConfig) -> Result<BaselineResult, BenchError> {
    if config.baseline_duration_secs == 0 {
        return Err(BenchError::Config(
            "baseline_duration_secs must be positive".to_string(),
        ));
    }
    run_for(config, Duration::from_secs(config.baseline_duration_secs))
}

/// Run the baseline for an explicit duration.
pub fn run_for(config: &BenchConfig, duration: Duration) -> Result<BaselineResult, BenchError> {
    config.validate()?;

    info!(
        duration_secs = duration.as_secs_f64(),
        program_length = config.program_length,
        "starting single-thread baseline"
    );

    let mut generator = ProgramGenerator::new(BASELINE_SEED ^ worker::SEED_MIX, config.program_length);
    let mut programs: u64 = 0;

    let start = Instant::now();
    let deadline = start + duration;
    while Instant::now() < deadline {
        std::hint::black_box(generator.next_program());
        programs += 1;
    }
    let elapsed = start.elapsed();

    let programs_per_sec = worker::throughput(programs, elapsed)?;
    Ok(BaselineResult {
        programs,
        elapsed,
        programs_per_sec,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_config() -> BenchConfig {
        BenchConfig {
            program_length: 4,
            ..Default::default()
        }
    }

    /// A short window still produces a complete, finite result.
    #[test]
    fn test_short_baseline_run() {
        let result = run_for(&tiny_config(), Duration::from_millis(20)).unwrap();

        assert!(result.programs > 0);
        assert!(result.elapsed >= Duration::from_millis(20));
        assert!(result.programs_per_sec.is_finite());
        assert!(result.programs_per_sec > 0.0);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = BenchConfig {
            baseline_duration_secs: 0,
            ..tiny_config()
        };

        assert!(matches!(
            run_baseline(&config),
            Err(BenchError::Config(_))
        ));
    }

    #[test]
    fn test_display_format() {
        let result = BaselineResult {
            programs: 1_234_567,
            elapsed: Duration::from_secs(10),
            programs_per_sec: 123_456.7,
        };
        let rendered = result.to_string();

        assert!(rendered.contains("Programs generated: 1,234,567"));
        assert!(rendered.contains("Estimated speed: 123,456.70 programs/sec"));
        assert!(rendered.contains("Duration: 10.00 s"));
    }
}
