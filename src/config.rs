use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;

use crate::error::BenchError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    #[serde(default)]
    pub bench: BenchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "corebench.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            bench: BenchConfig::default(),
        }
    }
}

/// Benchmark knobs.
///
/// All fields default so a partial YAML section works; the defaults match
/// the reference workload (512-instruction programs, 100k per worker).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BenchConfig {
    /// Instructions per synthetic program.
    #[serde(default = "default_program_length")]
    pub program_length: usize,
    /// Programs each worker generates before reporting.
    #[serde(default = "default_iterations_per_worker")]
    pub iterations_per_worker: u64,
    /// Worker threads; 0 means one per logical core.
    #[serde(default)]
    pub workers: usize,
    /// Single-thread baseline run duration in seconds.
    #[serde(default = "default_baseline_duration_secs")]
    pub baseline_duration_secs: u64,
}

fn default_program_length() -> usize {
    512
}

fn default_iterations_per_worker() -> u64 {
    100_000
}

fn default_baseline_duration_secs() -> u64 {
    10
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            program_length: default_program_length(),
            iterations_per_worker: default_iterations_per_worker(),
            workers: 0,
            baseline_duration_secs: default_baseline_duration_secs(),
        }
    }
}

impl BenchConfig {
    /// Fail fast on knobs that would make a run meaningless.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.program_length == 0 {
            return Err(BenchError::Config(
                "program_length must be positive".to_string(),
            ));
        }
        if self.iterations_per_worker == 0 {
            return Err(BenchError::Config(
                "iterations_per_worker must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`.
    ///
    /// A missing file falls back to built-in defaults so the benchmark runs
    /// on a bare checkout; a file that exists but fails to parse is fatal.
    pub fn load(env: &str) -> Result<Self, BenchError> {
        let config_path = format!("config/{}.yaml", env);
        match fs::read_to_string(&config_path) {
            Ok(content) => serde_yaml::from_str(&content).map_err(|e| {
                BenchError::Config(format!("failed to parse {}: {}", config_path, e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(BenchError::Config(format!(
                "failed to read {}: {}",
                config_path, e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();

        assert_eq!(config.program_length, 512);
        assert_eq!(config.iterations_per_worker, 100_000);
        assert_eq!(config.workers, 0);
        assert_eq!(config.baseline_duration_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_knobs() {
        let config = BenchConfig {
            program_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchError::Config(_))
        ));

        let config = BenchConfig {
            iterations_per_worker: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchError::Config(_))
        ));
    }

    /// A partial bench section fills the missing knobs from defaults.
    #[test]
    fn test_partial_yaml_section() {
        let yaml = r#"
log_level: "debug"
log_dir: "./logs"
log_file: "bench.log"
use_json: false
rotation: "never"
bench:
  program_length: 4
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.bench.program_length, 4);
        assert_eq!(config.bench.iterations_per_worker, 100_000);
        assert_eq!(config.bench.workers, 0);
    }

    /// Omitting the bench section entirely yields the full defaults.
    #[test]
    fn test_missing_bench_section() {
        let yaml = r#"
log_level: "info"
log_dir: "./logs"
log_file: "bench.log"
use_json: true
rotation: "daily"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.bench.program_length, 512);
        assert!(config.use_json);
    }
}
