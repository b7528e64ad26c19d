//! Benchmark suite for comparing processing strategies
//!
//! Compares the synchronous and asynchronous strategies on generated action
//! scripts, and measures the ledger aggregation on its own, using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Scripts are written to a temporary file before timing starts. Each script
//! cycles through the four built-in accounts, logging in, transferring to the
//! next account, requesting a small loan and toggling the sort order.

use bankist::cli::StrategyType;
use bankist::core::Summary;
use bankist::io::default_accounts;
use bankist::strategy::{create_strategy, BatchConfig};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

const SCRIPT_LENGTHS: &[usize] = &[100, 1_000, 10_000];

fn main() {
    divan::main();
}

/// Write an action script of roughly `rows` rows
fn generate_script(rows: usize) -> NamedTempFile {
    const LOGINS: [(&str, u32); 4] = [("js", 1111), ("jd", 2222), ("stw", 3333), ("ss", 4444)];

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "action,username,pin,amount").expect("Failed to write header");

    for i in 0..rows / 4 {
        let (username, pin) = LOGINS[i % LOGINS.len()];
        let (recipient, _) = LOGINS[(i + 1) % LOGINS.len()];
        writeln!(file, "login,{},{},", username, pin).expect("Failed to write row");
        writeln!(file, "transfer,{},,{}", recipient, i % 50 + 1).expect("Failed to write row");
        writeln!(file, "loan,,,{}", i % 300 + 1).expect("Failed to write row");
        writeln!(file, "sort,,,").expect("Failed to write row");
    }

    file.flush().expect("Failed to flush temp file");
    file
}

fn run(strategy_type: StrategyType, config: Option<BatchConfig>, script: &NamedTempFile) {
    let strategy = create_strategy(strategy_type, config, false);
    let mut output = Vec::new();

    strategy
        .process(
            default_accounts().expect("Failed to build built-in accounts"),
            script.path(),
            &mut output,
        )
        .expect("Processing failed");
}

#[divan::bench(args = SCRIPT_LENGTHS)]
fn sync_strategy(bencher: divan::Bencher, rows: usize) {
    let script = generate_script(rows);
    bencher.bench_local(|| run(StrategyType::Sync, None, &script));
}

#[divan::bench(args = SCRIPT_LENGTHS)]
fn async_strategy(bencher: divan::Bencher, rows: usize) {
    let script = generate_script(rows);
    bencher.bench_local(|| run(StrategyType::Async, Some(BatchConfig::default()), &script));
}

/// Summary over a long movement history, mostly deposits
#[divan::bench(args = [10, 1_000, 100_000])]
fn ledger_summary(bencher: divan::Bencher, len: i64) {
    let movements: Vec<Decimal> = (0..len)
        .map(|i| {
            if i % 3 == 0 {
                Decimal::from(-(i % 500))
            } else {
                Decimal::from(i % 2_000)
            }
        })
        .collect();
    let rate = Decimal::new(12, 1);

    bencher.bench_local(|| Summary::compute(divan::black_box(&movements), rate));
}
