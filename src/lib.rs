//! corebench - Multi-Core Synthetic-Program Throughput Benchmark
//!
//! Measures how many synthetic "programs" per second the host can generate,
//! one CPU-bound worker per logical core, and reports the aggregate plus a
//! per-worker breakdown.
//!
//! # Modules
//!
//! - [`rng`] - deterministic xorshift64 generator
//! - [`program`] - instruction decoding and program batch building
//! - [`worker`] - per-core timed generation loop
//! - [`harness`] - fan-out/fan-in across logical cores
//! - [`report`] - aggregate report and formatting
//! - [`baseline`] - single-thread duration-bounded baseline
//! - [`config`] - YAML configuration with defaults
//! - [`logging`] - tracing setup
//! - [`error`] - run-aborting error taxonomy

pub mod baseline;
pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod program;
pub mod report;
pub mod rng;
pub mod worker;

// Convenient re-exports at crate root
pub use baseline::BaselineResult;
pub use config::{AppConfig, BenchConfig};
pub use error::BenchError;
pub use harness::Harness;
pub use program::{Instruction, Program, ProgramGenerator};
pub use report::AggregateReport;
pub use rng::Xorshift64;
