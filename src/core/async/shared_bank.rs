//! Serialized access to a bank from concurrent tasks
//!
//! This module provides `SharedBank`, a cloneable handle that lets several
//! async tasks submit actions to one `Bank`.
//!
//! # Design
//!
//! The bank is a single writer: every handler assumes it runs to completion
//! before the next one starts. `SharedBank` keeps that guarantee by putting
//! the whole bank behind one `tokio::sync::Mutex`. A dispatched action or
//! batch holds the lock until it has finished, so actions from different
//! tasks are applied one after another, never interleaved.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::core::bank::Bank;
use crate::core::traits::DisplaySurface;
use crate::types::{Action, ActionOutcome, BankError};

/// Result of dispatching a single action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult {
    /// The action that was dispatched
    pub action: Action,

    /// What the bank did with it
    pub result: Result<ActionOutcome, BankError>,
}

/// Cloneable, mutex-serialized handle to a bank
#[derive(Debug)]
pub struct SharedBank<D: DisplaySurface> {
    bank: Arc<Mutex<Bank<D>>>,
}

impl<D: DisplaySurface> Clone for SharedBank<D> {
    fn clone(&self) -> Self {
        Self {
            bank: Arc::clone(&self.bank),
        }
    }
}

impl<D: DisplaySurface + Send> SharedBank<D> {
    /// Wrap a bank for shared use
    pub fn new(bank: Bank<D>) -> Self {
        Self {
            bank: Arc::new(Mutex::new(bank)),
        }
    }

    /// Dispatch one action, waiting for any action in progress to finish
    pub async fn dispatch(&self, action: Action) -> Result<ActionOutcome, BankError> {
        let mut bank = self.bank.lock().await;
        bank.dispatch(action)
    }

    /// Dispatch a batch of actions in order without letting other tasks in
    ///
    /// # Returns
    ///
    /// One result per action, in the order the actions were given
    pub async fn dispatch_batch(&self, actions: Vec<Action>) -> Vec<ActionResult> {
        let mut bank = self.bank.lock().await;

        actions
            .into_iter()
            .map(|action| {
                let result = bank.dispatch(action.clone());
                ActionResult { action, result }
            })
            .collect()
    }

    /// Run a read-only closure against the bank
    pub async fn inspect<T>(&self, f: impl FnOnce(&Bank<D>) -> T) -> T {
        let bank = self.bank.lock().await;
        f(&bank)
    }
}
