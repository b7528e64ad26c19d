//! Core traits for the bank's collaborators
//!
//! The bank never draws anything itself. It pushes figures and rows to a
//! `DisplaySurface`, which lets the terminal front end, the report writer and
//! tests observe the same refresh cycle.

use crate::core::ledger::Summary;
use crate::types::MovementRow;
use rust_decimal::Decimal;

/// Trait for the display surface the bank refreshes
///
/// Every method replaces what was previously shown for that element.
pub trait DisplaySurface {
    /// Replace the whole movement list with these rows, top row first
    fn show_movements(&mut self, rows: &[MovementRow]);

    /// Replace the welcome message
    fn set_welcome(&mut self, message: &str);

    /// Replace the balance figure
    fn set_balance(&mut self, balance: Decimal);

    /// Replace the income, expenses and interest figures
    fn set_summary(&mut self, summary: &Summary);

    /// Show or hide the main application panel
    fn set_app_visible(&mut self, visible: bool);
}
