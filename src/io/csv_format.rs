//! CSV format handling for action scripts, seed accounts and the account report
//!
//! This module centralizes all CSV format concerns, providing:
//! - ActionCsvRecord structure and conversion to `Action`
//! - SeedCsvRecord structure and conversion to `Account`
//! - Account report serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::core::ledger::Summary;
use crate::types::{Account, AccountType, Action, BankError, Pin};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Separator between amounts in the seed file's `movements` column
pub const MOVEMENT_SEPARATOR: char = ';';

/// CSV record structure for one scripted action
///
/// Matches the action script columns: action, username, pin, amount.
/// Which of the optional columns are required depends on the action.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ActionCsvRecord {
    pub action: String,
    pub username: Option<String>,
    pub pin: Option<String>,
    pub amount: Option<String>,
}

/// CSV record structure for one seed account
///
/// Columns: owner, movements, interest_rate, pin, type
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedCsvRecord {
    pub owner: String,
    pub movements: String,
    pub interest_rate: String,
    pub pin: String,
    #[serde(rename = "type")]
    pub account_type: String,
}

/// Trimmed, non-empty value of an optional column
fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Plain (`12.5`) or scientific (`1.25e1`) decimal notation
fn parse_number(value: &str) -> Option<Decimal> {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// A PIN is any number with an integral value in range, so `1111.0` and
/// `1.111e3` are both PIN 1111
fn parse_pin(value: &str) -> Result<Pin, String> {
    parse_number(value)
        .filter(|pin| pin.fract().is_zero())
        .and_then(|pin| pin.to_u32())
        .ok_or_else(|| format!("Invalid pin '{}'", value))
}

fn parse_amount(value: &str) -> Result<Decimal, String> {
    parse_number(value).ok_or_else(|| format!("Invalid amount '{}'", value))
}

/// Convert an ActionCsvRecord to an Action
///
/// This function:
/// - Matches the action name case-insensitively
/// - Requires the columns the action reads and parses them
/// - Ignores columns the action does not read
///
/// # Returns
///
/// Result containing either:
/// - Ok(Action) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_action_record(record: ActionCsvRecord) -> Result<Action, String> {
    let name = record.action.trim().to_lowercase();

    let require = |field: &Option<String>, column: &str| {
        present(field)
            .map(str::to_string)
            .ok_or_else(|| format!("{} action requires the {} column", name, column))
    };

    match name.as_str() {
        "login" => Ok(Action::Login {
            username: require(&record.username, "username")?,
            pin: parse_pin(&require(&record.pin, "pin")?)?,
        }),
        "transfer" => Ok(Action::Transfer {
            to: require(&record.username, "username")?,
            amount: parse_amount(&require(&record.amount, "amount")?)?,
        }),
        "loan" => Ok(Action::Loan {
            amount: parse_amount(&require(&record.amount, "amount")?)?,
        }),
        "close" => Ok(Action::Close {
            username: require(&record.username, "username")?,
            pin: parse_pin(&require(&record.pin, "pin")?)?,
        }),
        "sort" => Ok(Action::Sort),
        _ => Err(format!("Invalid action: '{}'", record.action)),
    }
}

/// Convert a SeedCsvRecord to an Account
///
/// The username is derived from the owner and the cached balance computed
/// from the movements.
pub fn convert_seed_record(record: SeedCsvRecord) -> Result<Account, String> {
    let owner = record.owner.trim();
    if owner.is_empty() {
        return Err("Seed account requires an owner".to_string());
    }

    let movements = record
        .movements
        .split(MOVEMENT_SEPARATOR)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(parse_amount)
        .collect::<Result<Vec<Decimal>, String>>()?;

    let interest_rate = parse_number(&record.interest_rate)
        .ok_or_else(|| format!("Invalid interest rate '{}'", record.interest_rate))?;
    let pin = parse_pin(&record.pin)?;
    let account_type = AccountType::from_str(&record.account_type)?;

    Account::new(owner, movements, interest_rate, pin, account_type).map_err(|e| e.to_string())
}

/// Write the account report in CSV format
///
/// Writes accounts in store order with columns:
/// username, owner, type, balance, income, expenses, interest.
/// Figures are recomputed from the movements and printed with 2 decimals.
/// An account whose figures overflow fails the whole report; accounts built
/// with `Account::new` and mutated only by the bank never do.
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "username", "owner", "type", "balance", "income", "expenses", "interest",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for account in accounts {
        let summary = Summary::of(account).ok_or_else(|| {
            BankError::arithmetic_overflow("report", &account.username).to_string()
        })?;
        writer
            .write_record(&[
                account.username.clone(),
                account.owner.clone(),
                account.account_type.to_string(),
                format!("{:.2}", summary.balance),
                format!("{:.2}", summary.income),
                format!("{:.2}", summary.expenses),
                format!("{:.2}", summary.interest),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
