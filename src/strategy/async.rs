//! Asynchronous batch processing strategy
//!
//! Runs an action script on a tokio multi-threaded runtime.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, worker_threads)
//!     ├── AsyncReader (batch CSV reading)
//!     └── SharedBank (mutex-serialized Bank)
//! ```
//!
//! Batches are dispatched one after another and each batch runs its actions
//! in script order while holding the bank's lock, so the result is identical
//! to the synchronous strategy.

use crate::core::{Bank, DisplaySurface, ScreenState, SharedBank, TerminalDisplay};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_accounts_csv;
use crate::strategy::ProcessingStrategy;
use crate::types::Account;
use std::io::Write;
use std::path::Path;

/// Configuration for batch processing
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of script rows per batch
    pub batch_size: usize,
    /// Number of runtime worker threads
    pub worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 100,
            worker_threads: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, worker_threads: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                "Invalid worker_threads ({}), using default ({})",
                worker_threads,
                default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            batch_size,
            worker_threads,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    /// Batch processing configuration
    config: BatchConfig,
    /// Echo display refreshes to stderr
    echo: bool,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig, echo: bool) -> Self {
        Self { config, echo }
    }
}

/// Read the script batch by batch and dispatch through a shared bank
///
/// # Returns
///
/// The accounts left in the store, in creation order
async fn run_script<D>(
    bank: Bank<D>,
    script_path: &Path,
    batch_size: usize,
) -> Result<Vec<Account>, String>
where
    D: DisplaySurface + Send + 'static,
{
    let file = tokio::fs::File::open(script_path)
        .await
        .map_err(|e| format!("Failed to open file '{}': {}", script_path.display(), e))?;

    // Wrap tokio file in a compatibility layer for csv-async
    let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
    let mut reader = AsyncReader::new(compat_file);

    let shared = SharedBank::new(bank);

    loop {
        let (batch, done) = reader.read_batch(batch_size).await;

        if !batch.is_empty() {
            let results = shared.dispatch_batch(batch).await;
            let refused = results.iter().filter(|r| r.result.is_err()).count();
            tracing::debug!(actions = results.len(), refused, "batch dispatched");
        }

        if done {
            break;
        }
    }

    Ok(shared
        .inspect(|bank| {
            tracing::debug!(
                session = ?bank.session(),
                sorted = bank.is_sorted(),
                "script finished"
            );
            bank.store().accounts().to_vec()
        })
        .await)
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Run the action script and write the account report
    ///
    /// 1. Creates a tokio multi-threaded runtime
    /// 2. Reads the script in batches with AsyncReader
    /// 3. Dispatches each batch through a SharedBank, in order
    /// 4. Writes the remaining accounts with csv_format::write_accounts_csv
    fn process(
        &self,
        accounts: Vec<Account>,
        script_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .enable_all()
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        let batch_size = self.config.batch_size;
        let accounts = runtime.block_on(async {
            if self.echo {
                let bank = Bank::new(accounts, TerminalDisplay::new(std::io::stderr()))
                    .map_err(|e| e.to_string())?;
                run_script(bank, script_path, batch_size).await
            } else {
                let bank = Bank::new(accounts, ScreenState::new()).map_err(|e| e.to_string())?;
                run_script(bank, script_path, batch_size).await
            }
        })?;

        write_accounts_csv(&accounts, output)?;

        Ok(())
    }
}
