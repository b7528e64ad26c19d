//! Bankist CLI
//!
//! Command-line interface for running Bankist action scripts.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- actions.csv > accounts.csv
//! cargo run -- --accounts seed.csv actions.csv > accounts.csv
//! cargo run -- --strategy async --batch-size 500 --worker-threads 4 actions.csv > accounts.csv
//! cargo run -- --echo -vv actions.csv > accounts.csv
//! ```
//!
//! The program seeds the bank (built-in accounts unless `--accounts` is given),
//! runs every action in the script with the selected processing strategy, and
//! writes the remaining accounts to stdout. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, unreadable seed or script file, etc.)

use bankist::cli;
use bankist::io;
use bankist::logging;
use bankist::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();

    logging::set_up(args.verbose);

    let seed = match &args.accounts {
        Some(path) => io::load_accounts_csv(path),
        None => io::default_accounts(),
    };
    let accounts = match seed {
        Ok(accounts) => accounts,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), config, args.echo)
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(accounts, &args.script, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
