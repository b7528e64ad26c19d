//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record, classification tag, username derivation
//! - `movement`: Movement classification and displayed rows
//! - `action`: User actions and their outcomes
//! - `error`: Error types for the bank

pub mod account;
pub mod action;
pub mod error;
pub mod movement;

pub use account::{derive_username, Account, AccountType, Pin, Username};
pub use action::{Action, ActionOutcome};
pub use error::BankError;
pub use movement::{MovementKind, MovementRow};
