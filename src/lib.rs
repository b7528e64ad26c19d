//! Bankist Library
//! # Overview
//!
//! This library models a small single-user banking application: a fixed set
//! of accounts, one current account at a time, and four user actions. Action
//! scripts in CSV form can be run through a synchronous or an async strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Action, BankError, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::bank`] - Session, sort flag and action handlers
//!   - [`core::account_store`] - Ordered account storage and lookup
//!   - [`core::ledger`] - Balance and summary aggregation
//!   - [`core::renderer`] - Movement rows in display order
//! - [`io`] - Seed loading, action script readers and the account report
//! - [`strategy`] - Complete processing pipelines, selectable at runtime
//! - [`logging`] - tracing subscriber setup
//!
//! # Actions
//!
//! - **Login**: Make an account current when username and PIN match
//! - **Transfer**: Move funds from the current account to another account
//! - **Loan**: Deposit a loan when an existing deposit covers 10% of it
//! - **Close**: Remove the current account after re-entering its credentials
//! - **Sort**: Toggle the movement list between chronological and by amount
//!
//! # Account Figures
//!
//! Every figure is derived from the account's movements:
//! - `balance`: Sum of all movements
//! - `income`: Sum of deposits
//! - `expenses`: Absolute sum of withdrawals
//! - `interest`: Per-deposit interest at the account's rate, counting only
//!   entries of at least 1

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use core::{AccountStore, Bank, ScreenState, SharedBank, Summary};
pub use io::{default_accounts, load_accounts_csv, write_accounts_csv};
pub use types::{Account, AccountType, Action, ActionOutcome, BankError, Pin, Username};
