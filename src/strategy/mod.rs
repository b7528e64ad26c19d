//! Processing strategy module for action scripts
//!
//! This module defines the Strategy pattern for complete processing pipelines:
//! reading an action script, running every action against a bank seeded with
//! the given accounts, and writing the final account report. Different
//! implementations (synchronous, asynchronous batch) can be selected at runtime.

use crate::cli::StrategyType;
use crate::types::Account;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete action script pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Run an action script and write the account report to output
    ///
    /// # Arguments
    ///
    /// * `accounts` - Seed accounts, in creation order
    /// * `script_path` - Path to the action script CSV
    /// * `output` - Writer receiving the account report
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the script ran to the end (refused or malformed actions included)
    /// * `Err(String)` if a fatal error occurred (file not found, I/O error, etc.)
    ///
    /// Refused actions and malformed rows are logged and skipped; they never
    /// make this method fail.
    fn process(
        &self,
        accounts: Vec<Account>,
        script_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional batch configuration (ignored for sync)
/// * `echo` - Echo every display refresh to stderr
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
    echo: bool,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(echo)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, echo))
        }
    }
}
