use crate::strategy::BatchConfig;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Run a Bankist action script and print the final account report
#[derive(Parser, Debug)]
#[command(name = "bankist")]
#[command(about = "Run a Bankist action script and print the final account report", long_about = None)]
pub struct CliArgs {
    /// Action script CSV (columns: action, username, pin, amount)
    #[arg(value_name = "SCRIPT", help = "Path to the action script CSV file")]
    pub script: PathBuf,

    /// Seed accounts CSV; the built-in accounts are used when absent
    #[arg(
        long = "accounts",
        value_name = "CSV",
        help = "Seed accounts CSV (columns: owner, movements, interest_rate, pin, type)"
    )]
    pub accounts: Option<PathBuf>,

    /// Processing strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for synchronous or 'async' for batched on a tokio runtime"
    )]
    pub strategy: StrategyType,

    /// Number of script rows per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of script rows per batch (default: 100)"
    )]
    pub batch_size: Option<usize>,

    /// Number of runtime worker threads (async mode only)
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    /// Echo every display refresh to stderr
    #[arg(long = "echo", help = "Echo every display refresh to stderr")]
    pub echo: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available processing strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments, falling back to defaults
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.worker_threads.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.worker_threads.unwrap_or(default.worker_threads),
            )
        } else {
            BatchConfig::default()
        }
    }
}
