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

//! This module provides the solver of the 0-1 knapsack problem, where each
//! item may be put in the sack at most once.

use crate::{Item, Reuse, Strategy, Solver, Result};

use super::{tabulate, tabulate_within};

/// The solver of the 0-1 knapsack.
///
/// Both strategies apply the recurrence
/// `dp[i][w] = max(dp[i-1][w], dp[i-1][w - weight_i] + value_i)`. The
/// rolling row realizes it by sweeping the capacities in decreasing order.
///
/// # Example
/// ```
/// # use knapsack::*;
/// let items  = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 8)];
/// let table  = ZeroOneSolver::with_strategy(Strategy::Table);
/// let rolling= ZeroOneSolver::with_strategy(Strategy::Rolling);
/// assert_eq!(Ok(15), table.maximize(&items, 10));
/// assert_eq!(Ok(15), rolling.maximize(&items, 10));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroOneSolver {
    strategy: Strategy,
}
impl ZeroOneSolver {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    /// Maximizes over items that were derived from an instance validated
    /// elsewhere, and whose optimum is known not to exceed `bound`.
    pub(crate) fn maximize_within(&self, items: &[Item], capacity: usize, bound: isize) -> Result<isize> {
        tabulate_within(items, capacity, Reuse::Once, self.strategy, bound)
    }
}
impl Solver for ZeroOneSolver {
    type Item = Item;

    fn maximize(&self, items: &[Item], capacity: usize) -> Result<isize> {
        tabulate(items, capacity, Reuse::Once, self.strategy)
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_zero_one {
    use crate::*;

    const STRATEGIES: [Strategy; 2] = [Strategy::Table, Strategy::Rolling];

    fn scenario() -> Vec<Item> {
        vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 8)]
    }

    #[test]
    fn the_default_solver_uses_a_rolling_row() {
        assert_eq!(Strategy::Rolling, ZeroOneSolver::new().strategy());
    }

    #[test]
    fn golden_value_of_the_four_items_scenario() {
        for strategy in STRATEGIES {
            assert_eq!(Ok(15), ZeroOneSolver::with_strategy(strategy).maximize(&scenario(), 10));
        }
    }

    #[test]
    fn golden_values_for_every_capacity() {
        let expected = [0, 0, 3, 4, 5, 8, 8, 11, 12, 13, 15];
        for strategy in STRATEGIES {
            let solver = ZeroOneSolver::with_strategy(strategy);
            for (capacity, value) in expected.iter().copied().enumerate() {
                assert_eq!(Ok(value), solver.maximize(&scenario(), capacity));
            }
        }
    }

    #[test]
    fn items_are_not_reused() {
        let items = [Item::new(1, 10)];
        assert_eq!(Ok(10), solve_zero_one(&items, 5));
        assert_eq!(Ok(10), ZeroOneSolver::with_strategy(Strategy::Table).maximize(&items, 5));
    }

    #[test]
    fn no_item_means_no_value() {
        for strategy in STRATEGIES {
            assert_eq!(Ok(0), ZeroOneSolver::with_strategy(strategy).maximize(&[], 42));
        }
    }

    #[test]
    fn no_capacity_means_no_value() {
        for strategy in STRATEGIES {
            assert_eq!(Ok(0), ZeroOneSolver::with_strategy(strategy).maximize(&scenario(), 0));
        }
    }

    #[test]
    fn a_single_item_is_taken_iff_it_fits() {
        let item = [Item::new(4, 7)];
        for capacity in 0..10 {
            let expected = if capacity >= 4 { 7 } else { 0 };
            assert_eq!(Ok(expected), solve_zero_one(&item, capacity));
        }
    }

    #[test]
    fn the_greedy_choice_is_not_always_optimal() {
        // the best ratio (item 0) must be left out
        let items = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
        assert_eq!(Ok(220), solve_zero_one(&items, 50));
    }

    #[test]
    fn weightless_items_are_taken_once() {
        let items = [Item::new(0, 5), Item::new(3, 4)];
        assert_eq!(Ok(5), solve_zero_one(&items, 0));
        assert_eq!(Ok(9), solve_zero_one(&items, 3));
    }

    #[test]
    fn malformed_instances_are_rejected() {
        let items = [Item::new(1, 3), Item::new(1, -3)];
        for strategy in STRATEGIES {
            assert_eq!(
                Err(Error::InvalidArgument(InvalidArgument::NegativeValue { index: 1, value: -3 })),
                ZeroOneSolver::with_strategy(strategy).maximize(&items, 10));
        }
        assert_eq!(
            Err(Error::InvalidArgument(InvalidArgument::CapacityTooLarge { capacity: usize::MAX })),
            solve_zero_one(&[], usize::MAX));
    }

    #[test]
    fn a_memo_that_cannot_be_allocated_is_reported() {
        for strategy in STRATEGIES {
            assert_eq!(
                Err(Error::InvalidArgument(InvalidArgument::CapacityTooLarge { capacity: 1 << 58 })),
                ZeroOneSolver::with_strategy(strategy).maximize(&[], 1 << 58));
            assert_eq!(
                Err(Error::InvalidArgument(InvalidArgument::CapacityTooLarge { capacity: 1 << 58 })),
                UnboundedSolver::with_strategy(strategy).maximize(&[Item::new(3, 4)], 1 << 58));
        }
    }

    #[test]
    fn overflowing_instances_are_rejected() {
        let items = [Item::new(1, isize::MAX), Item::new(1, isize::MAX)];
        assert_eq!(Err(Error::Overflow), solve_zero_one(&items, 2));
        // the second one never fits: the optimum is representable
        let items = [Item::new(1, isize::MAX), Item::new(2, isize::MAX)];
        assert_eq!(Ok(isize::MAX), solve_zero_one(&items, 1));
    }
}
