//! Ledger aggregation
//!
//! Pure functions that compute the displayed figures of an account from its
//! movements. Every figure is recomputed from scratch on each call.
//!
//! All reductions start from zero, so an account without withdrawals reports
//! zero expenses and an account without qualifying deposits reports zero
//! interest instead of failing.
//!
//! Every reduction is checked: a figure that does not fit in a `Decimal` is
//! `None`, never a panic.

use crate::types::Account;
use rust_decimal::Decimal;

/// Smallest per-deposit interest amount that is paid out
const MIN_INTEREST_PAYOUT: Decimal = Decimal::ONE;

/// Aggregated figures for one account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum of all movements
    pub balance: Decimal,

    /// Sum of deposits
    pub income: Decimal,

    /// Absolute value of the sum of withdrawals
    pub expenses: Decimal,

    /// Sum of per-deposit interest amounts of at least 1
    pub interest: Decimal,
}

impl Summary {
    /// Compute all four figures for a movements list and interest rate
    ///
    /// Returns `None` if any figure overflows.
    pub fn compute<'a, I>(movements: I, interest_rate: Decimal) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Decimal> + Clone,
    {
        Some(Summary {
            balance: balance(movements.clone())?,
            income: income(movements.clone())?,
            expenses: expenses(movements.clone())?,
            interest: interest(movements, interest_rate)?,
        })
    }

    /// Compute the summary of an account from its current movements
    pub fn of(account: &Account) -> Option<Self> {
        Self::compute(&account.movements, account.interest_rate)
    }
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.try_fold(Decimal::ZERO, Decimal::checked_add)
}

/// Sum of all movements
pub fn balance<'a>(movements: impl IntoIterator<Item = &'a Decimal>) -> Option<Decimal> {
    checked_sum(movements.into_iter().copied())
}

/// Sum of deposits (strictly positive movements)
pub fn income<'a>(movements: impl IntoIterator<Item = &'a Decimal>) -> Option<Decimal> {
    checked_sum(
        movements
            .into_iter()
            .copied()
            .filter(|mov| *mov > Decimal::ZERO),
    )
}

/// Absolute value of the sum of withdrawals (strictly negative movements)
pub fn expenses<'a>(movements: impl IntoIterator<Item = &'a Decimal>) -> Option<Decimal> {
    checked_sum(
        movements
            .into_iter()
            .copied()
            .filter(|mov| *mov < Decimal::ZERO),
    )
    .map(|total| total.abs())
}

/// Interest earned on deposits
///
/// Each deposit earns `deposit * interest_rate / 100`. Only amounts of at
/// least 1 are kept before summing.
pub fn interest<'a>(
    movements: impl IntoIterator<Item = &'a Decimal>,
    interest_rate: Decimal,
) -> Option<Decimal> {
    movements
        .into_iter()
        .copied()
        .filter(|mov| *mov > Decimal::ZERO)
        .try_fold(Decimal::ZERO, |total, deposit| {
            let earned = deposit
                .checked_mul(interest_rate)?
                .checked_div(Decimal::ONE_HUNDRED)?;

            if earned >= MIN_INTEREST_PAYOUT {
                total.checked_add(earned)
            } else {
                Some(total)
            }
        })
}
