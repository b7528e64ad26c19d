//! Seed accounts
//!
//! Accounts are only ever created at start-up, either from the built-in data
//! set or from a seed CSV file with columns
//! `owner,movements,interest_rate,pin,type` where `movements` is a
//! `;`-separated list of signed amounts.

use crate::io::csv_format::{convert_seed_record, SeedCsvRecord};
use crate::types::{Account, AccountType, BankError};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;

fn movements(values: &[i64]) -> Vec<Decimal> {
    values.iter().map(|value| Decimal::from(*value)).collect()
}

/// The four built-in accounts, in creation order
///
/// # Errors
///
/// Propagates `Account::new` errors; the built-in figures never overflow.
pub fn default_accounts() -> Result<Vec<Account>, BankError> {
    Ok(vec![
        Account::new(
            "Jonas Schmedtmann",
            movements(&[200, 450, -400, 3000, -650, -130, 70, 1300]),
            Decimal::new(12, 1),
            1111,
            AccountType::Premium,
        )?,
        Account::new(
            "Jessica Davis",
            movements(&[5000, 3400, -150, -790, -3210, -1000, 8500, -30]),
            Decimal::new(15, 1),
            2222,
            AccountType::Premium,
        )?,
        Account::new(
            "Steven Thomas Williams",
            movements(&[200, -200, 340, -300, -20, 50, 400, -460]),
            Decimal::new(7, 1),
            3333,
            AccountType::Basic,
        )?,
        Account::new(
            "Sarah Smith",
            movements(&[430, 1000, 700, 50, 90]),
            Decimal::ONE,
            4444,
            AccountType::Standard,
        )?,
    ])
}

/// Load seed accounts from a CSV file
///
/// Unlike action scripts, a seed file is all-or-nothing: the first malformed
/// row aborts loading.
///
/// # Errors
///
/// - `FileNotFound` if the file does not exist
/// - `IoError` if it cannot be read
/// - `ParseError` with the line number for a malformed row
pub fn load_accounts_csv(path: &Path) -> Result<Vec<Account>, BankError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BankError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => BankError::from(e),
    })?;

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let mut accounts = Vec::new();
    for (index, result) in reader.deserialize::<SeedCsvRecord>().enumerate() {
        let record = result?;
        // header is line 1
        let line = index as u64 + 2;
        let account =
            convert_seed_record(record).map_err(|message| BankError::parse_error(Some(line), message))?;
        accounts.push(account);
    }

    tracing::debug!(count = accounts.len(), path = %path.display(), "loaded seed accounts");

    Ok(accounts)
}
