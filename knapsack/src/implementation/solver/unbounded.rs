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

//! This module provides the solver of the unbounded (a.k.a. complete)
//! knapsack problem, where each item may be put in the sack as many times as
//! the capacity allows.

use crate::{Item, Reuse, Strategy, Solver, Result};

use super::tabulate;

/// The solver of the unbounded knapsack.
///
/// It differs from the 0-1 solver by one single detail: the 'take' branch of
/// the recurrence reads from the current row,
/// `dp[i][w] = max(dp[i-1][w], dp[i][w - weight_i] + value_i)`, which the
/// rolling row realizes by sweeping the capacities in increasing order.
///
/// # Note
/// An item that weighs nothing but is worth something would make the
/// optimum infinite. Such instances are rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnboundedSolver {
    strategy: Strategy,
}
impl UnboundedSolver {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}
impl Solver for UnboundedSolver {
    type Item = Item;

    fn maximize(&self, items: &[Item], capacity: usize) -> Result<isize> {
        tabulate(items, capacity, Reuse::Unlimited, self.strategy)
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_unbounded {
    use crate::*;

    const STRATEGIES: [Strategy; 2] = [Strategy::Table, Strategy::Rolling];

    fn scenario() -> Vec<Item> {
        vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)]
    }

    #[test]
    fn golden_value_of_the_three_items_scenario() {
        for strategy in STRATEGIES {
            assert_eq!(Ok(15), UnboundedSolver::with_strategy(strategy).maximize(&scenario(), 10));
        }
    }

    #[test]
    fn golden_values_for_every_capacity() {
        let expected = [0, 0, 3, 4, 6, 7, 9, 10, 12, 13, 15];
        for strategy in STRATEGIES {
            let solver = UnboundedSolver::with_strategy(strategy);
            for (capacity, value) in expected.iter().copied().enumerate() {
                assert_eq!(Ok(value), solver.maximize(&scenario(), capacity));
            }
        }
    }

    #[test]
    fn reusing_items_never_hurts() {
        let zero_one  = solve_zero_one(&scenario(), 10).unwrap();
        let unbounded = solve_unbounded(&scenario(), 10).unwrap();
        assert_eq!(12, zero_one);
        assert!(unbounded >= zero_one);
    }

    #[test]
    fn the_best_item_is_repeated() {
        let items = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
        assert_eq!(Ok(300), solve_unbounded(&items, 50));
        assert_eq!(Ok(300), UnboundedSolver::with_strategy(Strategy::Table).maximize(&items, 50));
    }

    #[test]
    fn no_item_means_no_value() {
        for strategy in STRATEGIES {
            assert_eq!(Ok(0), UnboundedSolver::with_strategy(strategy).maximize(&[], 42));
        }
    }

    #[test]
    fn no_capacity_means_no_value() {
        for strategy in STRATEGIES {
            assert_eq!(Ok(0), UnboundedSolver::with_strategy(strategy).maximize(&scenario(), 0));
        }
    }

    #[test]
    fn weightless_worthless_items_are_harmless() {
        let items = [Item::new(0, 0), Item::new(3, 4)];
        for strategy in STRATEGIES {
            assert_eq!(Ok(12), UnboundedSolver::with_strategy(strategy).maximize(&items, 10));
        }
    }

    #[test]
    fn weightless_profitable_items_are_rejected() {
        let items = [Item::new(3, 4), Item::new(0, 1)];
        assert_eq!(
            Err(Error::InvalidArgument(InvalidArgument::WeightlessItem { index: 1, value: 1 })),
            solve_unbounded(&items, 10));
    }

    #[test]
    fn overflowing_instances_are_rejected() {
        let items = [Item::new(1, isize::MAX / 2)];
        assert_eq!(Ok(isize::MAX / 2 * 2), solve_unbounded(&items, 2));
        assert_eq!(Err(Error::Overflow), solve_unbounded(&items, 3));
    }
}
