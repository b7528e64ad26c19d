//! User actions and their outcomes
//!
//! An `Action` is one activation of a control on the input surface with the
//! raw values read from its fields already parsed.

use super::account::{Pin, Username};
use rust_decimal::Decimal;
use std::fmt;

/// A single user action
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Authenticate as `username` with `pin`
    Login { username: Username, pin: Pin },

    /// Move `amount` from the current account to `to`
    Transfer { to: Username, amount: Decimal },

    /// Request a loan of `amount` for the current account
    Loan { amount: Decimal },

    /// Close the current account, confirming its credentials
    Close { username: Username, pin: Pin },

    /// Flip between chronological and ascending display order
    Sort,
}

impl Action {
    /// Short lowercase name used in logs and action scripts
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Transfer { .. } => "transfer",
            Action::Loan { .. } => "loan",
            Action::Close { .. } => "close",
            Action::Sort => "sort",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Login { username, .. } => write!(f, "login as '{}'", username),
            Action::Transfer { to, amount } => write!(f, "transfer {} to '{}'", amount, to),
            Action::Loan { amount } => write!(f, "loan of {}", amount),
            Action::Close { username, .. } => write!(f, "close '{}'", username),
            Action::Sort => f.write_str("sort toggle"),
        }
    }
}

/// What a successful action did
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// A session was opened for this username
    LoggedIn { username: Username },

    /// Funds moved between two accounts
    Transferred {
        from: Username,
        to: Username,
        amount: Decimal,
    },

    /// A loan was credited to the current account
    LoanGranted { username: Username, amount: Decimal },

    /// The account was removed from the store
    Closed { username: Username },

    /// The sort flag now has this value
    SortToggled { sorted: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names() {
        let login = Action::Login {
            username: "js".to_string(),
            pin: 1111,
        };
        assert_eq!(login.name(), "login");
        assert_eq!(Action::Sort.name(), "sort");
        assert_eq!(
            Action::Loan {
                amount: Decimal::from(500)
            }
            .name(),
            "loan"
        );
    }

    #[test]
    fn test_action_display_hides_pin() {
        let close = Action::Close {
            username: "js".to_string(),
            pin: 1111,
        };
        let rendered = close.to_string();
        assert_eq!(rendered, "close 'js'");
        assert!(!rendered.contains("1111"));
    }
}
