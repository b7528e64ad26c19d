//! Display surface implementations
//!
//! - `ScreenState` records the latest value of every displayed element and is
//!   what tests and the strategies inspect.
//! - `TerminalDisplay` writes each refresh as text lines to any writer.

use crate::core::ledger::Summary;
use crate::core::traits::DisplaySurface;
use crate::types::MovementRow;
use rust_decimal::Decimal;
use std::io::Write;

/// Currency suffix shown after every amount
pub const CURRENCY_SUFFIX: &str = "€";

/// Format an amount the way the page labels show it
pub fn format_amount(amount: Decimal) -> String {
    format!("{}{}", amount.normalize(), CURRENCY_SUFFIX)
}

/// Format a movement row as "<position> <kind> <amount>"
pub fn format_row(row: &MovementRow) -> String {
    format!("{} {} {}", row.position, row.kind, format_amount(row.amount))
}

/// In-memory record of what is currently displayed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenState {
    /// Movement rows, top row first
    pub rows: Vec<MovementRow>,

    /// Welcome message, empty before the first login
    pub welcome: String,

    /// Last balance shown
    pub balance: Option<Decimal>,

    /// Last summary shown
    pub summary: Option<Summary>,

    /// Whether the main panel is visible
    pub app_visible: bool,

    /// Number of times the movement list was replaced
    pub movement_refreshes: usize,
}

impl ScreenState {
    /// Create an empty, hidden screen
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for ScreenState {
    fn show_movements(&mut self, rows: &[MovementRow]) {
        self.rows = rows.to_vec();
        self.movement_refreshes += 1;
    }

    fn set_welcome(&mut self, message: &str) {
        self.welcome = message.to_string();
    }

    fn set_balance(&mut self, balance: Decimal) {
        self.balance = Some(balance);
    }

    fn set_summary(&mut self, summary: &Summary) {
        self.summary = Some(*summary);
    }

    fn set_app_visible(&mut self, visible: bool) {
        self.app_visible = visible;
    }
}

/// Text display writing every refresh to a writer
///
/// Write failures are logged and otherwise ignored; the bank state is already
/// updated when the display is refreshed.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    /// Create a display writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("failed to write to display: {}", e);
        }
    }
}

impl<W: Write> DisplaySurface for TerminalDisplay<W> {
    fn show_movements(&mut self, rows: &[MovementRow]) {
        self.line("Movements:");
        for row in rows {
            let text = format!("  {}", format_row(row));
            self.line(&text);
        }
    }

    fn set_welcome(&mut self, message: &str) {
        self.line(message);
    }

    fn set_balance(&mut self, balance: Decimal) {
        let text = format!("Balance: {}", format_amount(balance));
        self.line(&text);
    }

    fn set_summary(&mut self, summary: &Summary) {
        let text = format!(
            "In: {}  Out: {}  Interest: {}",
            format_amount(summary.income),
            format_amount(summary.expenses),
            format_amount(summary.interest)
        );
        self.line(&text);
    }

    fn set_app_visible(&mut self, visible: bool) {
        if !visible {
            self.line("(application hidden)");
        }
    }
}
