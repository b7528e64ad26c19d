//! Synchronous processing strategy
//!
//! Runs an action script on the calling thread. Orchestrates the flow between:
//! - `SyncReader` (action rows, one at a time)
//! - `Bank` (handlers)
//! - `csv_format::write_accounts_csv` (report)

use crate::core::{Bank, DisplaySurface, ScreenState, TerminalDisplay};
use crate::io::csv_format::write_accounts_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::Account;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use bankist::io::default_accounts;
/// use bankist::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(false);
/// let mut output = io::stdout();
///
/// strategy
///     .process(default_accounts()?, Path::new("actions.csv"), &mut output)
///     .expect("Processing failed");
/// # Ok::<(), bankist::BankError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    /// Echo display refreshes to stderr
    echo: bool,
}

impl SyncProcessingStrategy {
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

/// Dispatch every action from the reader, logging rejected rows
///
/// # Returns
///
/// The accounts left in the store, in creation order
fn run_script<D: DisplaySurface>(mut bank: Bank<D>, reader: SyncReader) -> Vec<Account> {
    for result in reader {
        match result {
            // refusals are logged by the bank
            Ok(action) => {
                let _ = bank.dispatch(action);
            }
            Err(e) => tracing::warn!("Skipping action: {}", e),
        }
    }

    tracing::debug!(
        session = ?bank.session(),
        sorted = bank.is_sorted(),
        "script finished"
    );

    let (store, _display) = bank.into_parts();
    store.accounts().to_vec()
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Run the action script and write the account report
    ///
    /// 1. Opens the script with a SyncReader (fails fast if it cannot)
    /// 2. Builds a Bank over the seed accounts
    /// 3. Dispatches each action in script order
    /// 4. Writes the remaining accounts with csv_format::write_accounts_csv
    fn process(
        &self,
        accounts: Vec<Account>,
        script_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), String> {
        let reader = SyncReader::new(script_path)?;

        let accounts = if self.echo {
            let bank = Bank::new(accounts, TerminalDisplay::new(std::io::stderr()))
                .map_err(|e| e.to_string())?;
            run_script(bank, reader)
        } else {
            let bank = Bank::new(accounts, ScreenState::new()).map_err(|e| e.to_string())?;
            run_script(bank, reader)
        };

        write_accounts_csv(&accounts, output)?;

        Ok(())
    }
}
