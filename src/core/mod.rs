//! Core business logic module
//!
//! This module contains the bank's components:
//! - `traits` - Display surface abstraction the bank refreshes
//! - `account_store` - Ordered account storage and lookup
//! - `ledger` - Balance, income, expenses and interest aggregation
//! - `renderer` - Movement rows in display order
//! - `session` - Login state
//! - `display` - Recording and terminal display surfaces
//! - `bank` - Application state and action handlers
//! - `async` - Serialized access for concurrent callers

pub mod account_store;
pub mod r#async;
pub mod bank;
pub mod display;
pub mod ledger;
pub mod renderer;
pub mod session;
pub mod traits;

pub use account_store::AccountStore;
pub use bank::Bank;
pub use display::{ScreenState, TerminalDisplay};
pub use ledger::Summary;
pub use r#async::{ActionResult, SharedBank};
pub use renderer::{render_movements, MovementView};
pub use session::Session;
pub use traits::DisplaySurface;
