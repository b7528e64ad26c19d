//! Movement rendering
//!
//! Projects an account's movements into display rows, most recent first.
//!
//! Rows are produced by laying the movements out oldest to newest (or
//! smallest to largest when sorted) and stacking each new row on top of the
//! previous one, so the last movement laid out ends up as the first row.
//! Sorting works on a permutation of positions; the movements themselves are
//! never reordered.

use crate::types::{MovementKind, MovementRow};
use rust_decimal::Decimal;

/// A display-ready view over a movements list
///
/// The view is lazy: rows are built only while iterating. It is also
/// restartable, since every call to [`MovementView::rows`] starts again from
/// the top row.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementView<'a> {
    movements: &'a [Decimal],
    /// Chronological indices in lay-out order (bottom row first)
    order: Vec<usize>,
}

impl<'a> MovementView<'a> {
    /// Iterate the rows from the top of the display down
    pub fn rows(&self) -> impl Iterator<Item = MovementRow> + '_ {
        self.order.iter().rev().map(move |&index| MovementRow {
            position: index + 1,
            kind: MovementKind::of(self.movements[index]),
            amount: self.movements[index],
        })
    }
}

/// Build the display view for a movements list
///
/// # Arguments
///
/// * `movements` - Movements in chronological order
/// * `sort` - Lay movements out by ascending amount instead of chronologically
///
/// # Returns
///
/// A view whose rows carry the chronological position of each movement,
/// whichever order they are shown in
pub fn render_movements(movements: &[Decimal], sort: bool) -> MovementView<'_> {
    let mut order: Vec<usize> = (0..movements.len()).collect();
    if sort {
        // stable: equal amounts keep their chronological order
        order.sort_by_key(|&index| movements[index]);
    }

    MovementView { movements, order }
}
