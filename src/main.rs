//! corebench - Multi-Core Synthetic-Program Throughput Benchmark
//!
//! Entry point. Flow:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌───────────────┐    ┌──────────┐
//! │  Config  │───▶│ Logging  │───▶│ Harness (N    │───▶│  Report  │
//! │  (YAML)  │    │(tracing) │    │ worker threads)│    │ (stdout) │
//! └──────────┘    └──────────┘    └───────────────┘    └──────────┘
//! ```
//!
//! `--baseline` swaps the harness for the single-thread duration-bounded
//! run; `--env <name>` selects the config profile.

use corebench::baseline;
use corebench::config::AppConfig;
use corebench::harness::Harness;
use corebench::logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn use_baseline_mode() -> bool {
    std::env::args().any(|a| a == "--baseline")
}

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = logging::init_logging(&app_config);

    tracing::info!(
        git_hash = env!("GIT_HASH"),
        env = %env,
        "starting corebench"
    );

    if use_baseline_mode() {
        println!("=== corebench: single-thread baseline ===\n");
        let result = baseline::run_baseline(&app_config.bench)?;
        println!("{}", result);
        return Ok(());
    }

    println!("=== corebench: parallel throughput ===\n");
    let harness = Harness::new(app_config.bench.clone())?;
    let report = harness.run()?;
    println!("{}", report);

    Ok(())
}
