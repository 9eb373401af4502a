// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the solver implementations: one solver per item
//! model plus a batch solver which spreads many independent instances over
//! a pool of threads. It also exposes one convenience function per model for
//! those who simply want to compute an optimum with the default settings.
mod zero_one;
mod unbounded;
mod bounded;
mod batch;

pub use zero_one::*;
pub use unbounded::*;
pub use bounded::*;
pub use batch::*;

use crate::{Item, BoundedItem, Memo, Reuse, Strategy, Solver, Table, RollingRow, Result};
use super::validation::check_items;

/// A type alias to emphasize that this is the solver that should be used by
/// default for bounded items.
pub type DefaultBoundedSolver = BinarySplitSolver;

/// Returns the optimum of the 0-1 knapsack: each item is used at most once.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let items = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
/// assert_eq!(Ok(220), solve_zero_one(&items, 50));
/// ```
pub fn solve_zero_one(items: &[Item], capacity: usize) -> Result<isize> {
    ZeroOneSolver::default().maximize(items, capacity)
}
/// Returns the optimum of the unbounded knapsack: each item may be used as
/// many times as the capacity allows.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let items = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
/// assert_eq!(Ok(300), solve_unbounded(&items, 50));
/// ```
pub fn solve_unbounded(items: &[Item], capacity: usize) -> Result<isize> {
    UnboundedSolver::default().maximize(items, capacity)
}
/// Returns the optimum of the bounded knapsack by enumerating every feasible
/// number of copies of every item. O(n * capacity * max count).
pub fn solve_multiple_naive(items: &[BoundedItem], capacity: usize) -> Result<isize> {
    NaiveBoundedSolver.maximize(items, capacity)
}
/// Returns the optimum of the bounded knapsack by reducing it to a 0-1
/// knapsack over the binary split of the items. O(n * capacity * log(max count)).
///
/// # Example
/// ```
/// # use knapsack::*;
/// let items = [BoundedItem::new(10, 60, 2), BoundedItem::new(20, 100, 3)];
/// assert_eq!(solve_multiple_naive(&items, 50), solve_multiple_optimized(&items, 50));
/// ```
pub fn solve_multiple_optimized(items: &[BoundedItem], capacity: usize) -> Result<isize> {
    DefaultBoundedSolver::default().maximize(items, capacity)
}

/// Validates the instance, then tabulates the dynamic program of the given
/// model in a memo of the given kind and returns the optimum.
pub(crate) fn tabulate(items: &[Item], capacity: usize, reuse: Reuse, strategy: Strategy) -> Result<isize> {
    let rows = match strategy {
        Strategy::Table   => items.len().saturating_add(1),
        Strategy::Rolling => 1,
    };
    let bound = check_items(items, capacity, reuse, rows)?;
    tabulate_within(items, capacity, reuse, strategy, bound)
}

/// Tabulates items whose optimum is already known not to exceed `bound`.
/// Only the allocation of the memo may still fail.
pub(crate) fn tabulate_within(items: &[Item], capacity: usize, reuse: Reuse, strategy: Strategy, bound: isize) -> Result<isize> {
    let best = match strategy {
        Strategy::Table   => Table::try_for_items(capacity, items.len())?.fill(items, reuse),
        Strategy::Rolling => RollingRow::try_new(capacity)?.fill(items, reuse),
    };
    tracing::debug!(nb_items = items.len(), capacity, ?reuse, ?strategy, bound, best, "knapsack solved");
    Ok(best)
}
