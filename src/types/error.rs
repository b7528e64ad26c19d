//! Error types for the Bankist ledger
//!
//! This module defines every reason an action can be refused, plus the I/O and
//! parsing failures that can occur while loading seed accounts or action scripts.
//!
//! # Error Categories
//!
//! - **Session Errors**: no current account, stale session after a close
//! - **Precondition Errors**: bad credentials, invalid amounts, ineligible loans, etc.
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **CSV Parsing Errors**: malformed rows in seed files or action scripts
//! - **Arithmetic Errors**: an account figure that would overflow `Decimal`
//!
//! Precondition errors are never shown to the user. Handlers return them so
//! that callers and tests can tell a refused action apart from a successful one.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// An action that needs a current account ran before any login
    #[error("No account is logged in")]
    NotLoggedIn,

    /// The session still names an account that has since been closed
    #[error("Session account '{username}' no longer exists")]
    SessionAccountMissing {
        /// Username held by the stale session
        username: String,
    },

    /// Username unknown or PIN mismatch at login
    #[error("Invalid credentials for '{username}'")]
    InvalidCredentials {
        /// Username supplied at login
        username: String,
    },

    /// No account with this username exists
    #[error("Account '{username}' not found")]
    AccountNotFound {
        /// Username that was looked up
        username: String,
    },

    /// Amount is zero or negative
    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Transfer exceeds the sender's balance
    #[error("Insufficient funds for '{username}': balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Sender username
        username: String,
        /// Sender balance
        balance: Decimal,
        /// Requested transfer amount
        requested: Decimal,
    },

    /// Transfer recipient is the sender
    #[error("Cannot transfer from '{username}' to itself")]
    SelfTransfer {
        /// Sender username
        username: String,
    },

    /// No movement reaches 10% of the requested loan
    #[error("Loan of {requested} refused for '{username}': no movement of at least 10% of the amount")]
    LoanNotEligible {
        /// Borrower username
        username: String,
        /// Requested loan amount
        requested: Decimal,
    },

    /// Close confirmation does not match the current account
    #[error("Close confirmation does not match the current account")]
    CloseCredentialsMismatch,

    /// An account figure would no longer fit in a `Decimal`
    ///
    /// The action is refused and nothing is changed.
    #[error("Arithmetic overflow in {operation} for '{username}'")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account whose figures would overflow
        username: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create a SessionAccountMissing error
    pub fn session_account_missing(username: &str) -> Self {
        BankError::SessionAccountMissing {
            username: username.to_string(),
        }
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials(username: &str) -> Self {
        BankError::InvalidCredentials {
            username: username.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(username: &str) -> Self {
        BankError::AccountNotFound {
            username: username.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(username: &str, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            username: username.to_string(),
            balance,
            requested,
        }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(username: &str) -> Self {
        BankError::SelfTransfer {
            username: username.to_string(),
        }
    }

    /// Create a LoanNotEligible error
    pub fn loan_not_eligible(username: &str, requested: Decimal) -> Self {
        BankError::LoanNotEligible {
            username: username.to_string(),
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, username: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            username: username.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        BankError::ParseError {
            line,
            message: message.into(),
        }
    }
}
