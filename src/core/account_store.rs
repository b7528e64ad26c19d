//! Account store module
//!
//! This module provides the `AccountStore` struct which holds every account in
//! creation order.
//!
//! The AccountStore is responsible for:
//! - Looking accounts up by username
//! - Locating and removing an account by position
//! - Appending movements and refreshing the cached balance
//!
//! Every account in the store has figures that fit in a `Decimal`. A movement
//! that would break this is refused before anything is appended.
//!
//! Usernames are assumed unique. Duplicates are not rejected; lookups return
//! the first account in creation order.

use crate::core::ledger::Summary;
use crate::types::{Account, BankError};
use rust_decimal::Decimal;
use std::iter;

/// Ordered collection of all accounts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountStore {
    /// Accounts in creation order
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create a store holding `accounts` in the given order
    ///
    /// Cached balances are recomputed so they match the movements.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` for the first account whose figures do
    /// not fit in a `Decimal`
    pub fn from_accounts(mut accounts: Vec<Account>) -> Result<Self, BankError> {
        for account in &mut accounts {
            let summary = Summary::of(account)
                .ok_or_else(|| BankError::arithmetic_overflow("opening", &account.username))?;
            account.balance = summary.balance;
        }

        Ok(AccountStore { accounts })
    }

    /// Find an account by username
    ///
    /// # Returns
    ///
    /// The first account whose username matches exactly, or `None`
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.username == username)
    }

    /// Find an account by username for mutation
    pub fn find_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.username == username)
    }

    /// Position of the first account with this username
    pub fn position(&self, username: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|account| account.username == username)
    }

    /// Remove and return the account at `index`
    ///
    /// # Returns
    ///
    /// * `Some(Account)` - The removed account; later accounts shift down by one
    /// * `None` - If `index` is out of range (nothing is removed)
    pub fn remove_at(&mut self, index: usize) -> Option<Account> {
        if index < self.accounts.len() {
            Some(self.accounts.remove(index))
        } else {
            None
        }
    }

    /// Figures an account would have after appending `amount`
    ///
    /// Nothing is changed.
    ///
    /// # Arguments
    ///
    /// * `operation` - Name used in the overflow error
    /// * `username` - The account to preview
    /// * `amount` - Signed amount (negative for a withdrawal)
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no account has this username
    /// - `ArithmeticOverflow` if any figure would not fit in a `Decimal`
    pub fn preview_movement(
        &self,
        operation: &str,
        username: &str,
        amount: Decimal,
    ) -> Result<Summary, BankError> {
        let account = self
            .find(username)
            .ok_or_else(|| BankError::account_not_found(username))?;

        Summary::compute(
            account.movements.iter().chain(iter::once(&amount)),
            account.interest_rate,
        )
        .ok_or_else(|| BankError::arithmetic_overflow(operation, username))
    }

    /// Append a movement to an account and refresh its cached balance
    ///
    /// # Errors
    ///
    /// Same as [`AccountStore::preview_movement`]; on error the account is
    /// left untouched.
    pub fn push_movement(
        &mut self,
        operation: &str,
        username: &str,
        amount: Decimal,
    ) -> Result<(), BankError> {
        let summary = self.preview_movement(operation, username, amount)?;
        let account = self
            .find_mut(username)
            .ok_or_else(|| BankError::account_not_found(username))?;

        account.movements.push(amount);
        account.balance = summary.balance;

        Ok(())
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
