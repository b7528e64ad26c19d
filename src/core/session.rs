//! Session state
//!
//! At most one account is current at a time. The session stores the current
//! account's username and is resolved against the account store on every use.
//!
//! There is no logout. Closing the current account hides the application but
//! does not clear the session, which keeps the removed username. Because the
//! username is looked up again on every use, the removed account is never
//! acted on: actions that need the current account fail with
//! `SessionAccountMissing` until the next successful login.

use crate::types::Username;

/// Login state of the application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No successful login yet
    #[default]
    LoggedOut,

    /// An account is current
    LoggedIn {
        /// Username of the current account
        username: Username,
    },
}

impl Session {
    /// Make `username` the current account, replacing any previous one
    pub fn log_in(&mut self, username: impl Into<Username>) {
        *self = Session::LoggedIn {
            username: username.into(),
        };
    }

    /// Username of the current account, if any
    pub fn current(&self) -> Option<&str> {
        match self {
            Session::LoggedOut => None,
            Session::LoggedIn { username } => Some(username),
        }
    }
}
