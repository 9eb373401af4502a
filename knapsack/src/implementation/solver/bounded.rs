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

//! This module provides the solvers of the bounded (a.k.a. multiple)
//! knapsack problem, where item `i` may be put in the sack at most `count_i`
//! times. The naive solver enumerates the number of copies of each item,
//! while the binary split solver reduces the problem to a 0-1 knapsack.

use crate::{BoundedItem, Memo, Solver, Strategy, Table, ZeroOneSolver, Result, expand};

use super::super::validation::check_bounded;

/// The naive solver of the bounded knapsack. It fills a full table where
/// `dp[i][w] = max_k dp[i-1][w - k*weight_i] + k*value_i` for
/// `k = 0..=min(count_i, w / weight_i)`.
///
/// This costs O(n * capacity * max count) which is only acceptable for small
/// counts. It mainly serves as a reference for the `BinarySplitSolver`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaiveBoundedSolver;

impl Solver for NaiveBoundedSolver {
    type Item = BoundedItem;

    fn maximize(&self, items: &[BoundedItem], capacity: usize) -> Result<isize> {
        let bound = check_bounded(items, capacity, items.len().saturating_add(1))?;

        let mut table = Table::try_for_items(capacity, items.len())?;
        for item in items.iter().copied() {
            table.push_bounded(item);
        }
        let best = table.best_value();
        tracing::debug!(nb_items = items.len(), capacity, bound, best, "bounded knapsack solved (naive)");
        Ok(best)
    }
}

/// The binary split solver of the bounded knapsack. Each bounded item is
/// expanded into O(log count) single-use batches (see `BinarySplit`) and the
/// resulting 0-1 instance is handed over to a `ZeroOneSolver`. It reports
/// an `Overflow` for the very same instances as the `NaiveBoundedSolver`.
///
/// This costs O(n * capacity * log(max count)).
///
/// # Example
/// ```
/// # use knapsack::*;
/// let items = [
///     BoundedItem::new(2, 3, 2),
///     BoundedItem::new(3, 4, 3),
///     BoundedItem::new(4, 5, 1),
/// ];
/// assert_eq!(Ok(14), BinarySplitSolver::default().maximize(&items, 10));
/// assert_eq!(Ok(14), NaiveBoundedSolver.maximize(&items, 10));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BinarySplitSolver {
    inner: ZeroOneSolver,
}
impl BinarySplitSolver {
    pub fn new(inner: ZeroOneSolver) -> Self {
        Self { inner }
    }
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(ZeroOneSolver::with_strategy(strategy))
    }
    /// Returns the 0-1 solver the expanded instances are delegated to.
    pub fn inner(&self) -> &ZeroOneSolver {
        &self.inner
    }
}
impl Solver for BinarySplitSolver {
    type Item = BoundedItem;

    fn maximize(&self, items: &[BoundedItem], capacity: usize) -> Result<isize> {
        // every selection of batches is a selection of the bounded items:
        // the bound of the bounded instance holds for the expanded one
        let bound    = check_bounded(items, capacity, 1)?;
        let expanded = expand(items);
        self.inner.maximize_within(&expanded, capacity, bound)
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
