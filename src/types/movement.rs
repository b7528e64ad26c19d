//! Movement-related types for the Bankist ledger
//!
//! A movement is a single signed amount on an account. These types describe
//! how a movement is classified and how it appears as a displayed row.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Classification of a movement by sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Strictly positive amount
    Deposit,

    /// Zero or negative amount
    Withdrawal,
}

impl MovementKind {
    /// Classify an amount: anything not strictly positive is a withdrawal
    pub fn of(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementKind::Deposit => f.write_str("deposit"),
            MovementKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// One displayed movement row
///
/// `position` is the 1-based chronological position of the movement in the
/// account. It is never renumbered when rows are shown in sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MovementRow {
    /// 1-based chronological position
    pub position: usize,

    /// Deposit or withdrawal
    pub kind: MovementKind,

    /// Raw signed amount
    pub amount: Decimal,
}
