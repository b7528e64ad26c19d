//! Concurrent access to the core components
//!
//! The bank itself is strictly single-writer. This module provides the
//! wrapper that makes it usable from several async tasks at once:
//!
//! - **SharedBank**: Cloneable handle that serializes every action behind one mutex

pub mod shared_bank;

pub use shared_bank::{ActionResult, SharedBank};
