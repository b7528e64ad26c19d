//! Account-related types for the Bankist ledger
//!
//! This module defines the Account structure, the account classification tag,
//! and the username derivation rule used to look accounts up at login.

use crate::core::ledger::Summary;
use crate::types::BankError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Login name derived from the owner's initials (e.g. "js")
pub type Username = String;

/// Numeric account credential
///
/// Compared with strict numeric equality, so "0111" and "111" are the same PIN.
pub type Pin = u32;

/// Classification tag for an account
///
/// Display-only metadata. It never takes part in a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Premium,
    Standard,
    Basic,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountType::Premium => "premium",
            AccountType::Standard => "standard",
            AccountType::Basic => "basic",
        };
        f.write_str(label)
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "premium" => Ok(AccountType::Premium),
            "standard" => Ok(AccountType::Standard),
            "basic" => Ok(AccountType::Basic),
            other => Err(format!("Invalid account type: '{}'", other)),
        }
    }
}

/// Derive a username from an owner's full name
///
/// Lowercases the owner, splits on single spaces and joins the first character
/// of every word: "Jonas Schmedtmann" becomes "js". Empty words (from repeated
/// spaces) contribute nothing.
pub fn derive_username(owner: &str) -> Username {
    owner
        .to_lowercase()
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Bank account record
///
/// Movements are kept in insertion order, which is also chronological order.
/// `balance` is a cached value refreshed by the bank after every mutation; the
/// authoritative figure is always the sum of `movements`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Full display name of the owner
    pub owner: String,

    /// Lowercase initials of `owner`, fixed at creation
    pub username: Username,

    /// Signed amounts: positive for deposits, negative for withdrawals
    pub movements: Vec<Decimal>,

    /// Interest percentage paid on each qualifying deposit
    pub interest_rate: Decimal,

    /// Numeric credential, fixed at creation
    pub pin: Pin,

    /// Classification tag
    pub account_type: AccountType,

    /// Cached sum of `movements`
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with its username derived from `owner`
    ///
    /// # Arguments
    ///
    /// * `owner` - Full display name
    /// * `movements` - Initial movements in chronological order
    /// * `interest_rate` - Interest percentage (1.2 means 1.2%)
    /// * `pin` - Numeric credential
    /// * `account_type` - Classification tag
    ///
    /// # Returns
    ///
    /// A new Account whose cached balance already equals the sum of `movements`
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if any of the account's figures would not
    /// fit in a `Decimal`
    pub fn new(
        owner: impl Into<String>,
        movements: Vec<Decimal>,
        interest_rate: Decimal,
        pin: Pin,
        account_type: AccountType,
    ) -> Result<Self, BankError> {
        let owner = owner.into();
        let username = derive_username(&owner);
        let balance = Summary::compute(&movements, interest_rate)
            .ok_or_else(|| BankError::arithmetic_overflow("opening", &username))?
            .balance;

        Ok(Account {
            owner,
            username,
            movements,
            interest_rate,
            pin,
            account_type,
            balance,
        })
    }

    /// First word of the owner's name, used in the welcome message
    pub fn first_name(&self) -> &str {
        self.owner.split(' ').next().unwrap_or_default()
    }
}
