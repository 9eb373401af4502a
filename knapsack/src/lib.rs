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

//! # Knapsack
//! This crate provides exact dynamic programming solvers for the three
//! classic flavors of the knapsack problem. Given a set of items, each of
//! which having a weight and a value, and a sack of some capacity, the goal
//! is always to maximize the total value of the items put in the sack without
//! exceeding its capacity. The flavors only differ in the number of times an
//! item may be selected:
//!
//! * the **0-1** knapsack lets you take each item at most once
//!   (`ZeroOneSolver`, `solve_zero_one`),
//! * the **unbounded** knapsack lets you take each item as many times as you
//!   like (`UnboundedSolver`, `solve_unbounded`),
//! * the **bounded** knapsack lets you take item `i` up to `count_i` times
//!   (`NaiveBoundedSolver`, `BinarySplitSolver`, `solve_multiple_naive`,
//!   `solve_multiple_optimized`).
//!
//! All solvers only compute the *value* of an optimal selection, not the
//! selection itself.
//!
//! ## Quick Example
//! ```
//! # use knapsack::*;
//! let items = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 8)];
//!
//! // Each item at most once: take the items weighing 2, 3 and 5.
//! assert_eq!(Ok(15), solve_zero_one(&items, 10));
//! // Each item as often as you like
//! assert_eq!(Ok(16), solve_unbounded(&items, 10));
//!
//! // Bounded supplies
//! let items = [
//!     BoundedItem::new(2, 3, 2),
//!     BoundedItem::new(3, 4, 3),
//!     BoundedItem::new(4, 5, 1),
//! ];
//! assert_eq!(Ok(14), solve_multiple_naive(&items, 10));
//! assert_eq!(Ok(14), solve_multiple_optimized(&items, 10));
//! ```
//!
//! ## Strategies
//! The 0-1 and unbounded dynamic programs can either be tabulated in a full
//! `(n+1) x (capacity+1)` table or in one single row which is overwritten for
//! each item (the default). Both strategies yield the very same optimum; the
//! choice is only a matter of memory.
//! ```
//! # use knapsack::*;
//! let items  = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)];
//! let table  = UnboundedSolver::with_strategy(Strategy::Table);
//! let row    = UnboundedSolver::with_strategy(Strategy::Rolling);
//! assert_eq!(table.maximize(&items, 10), row.maximize(&items, 10));
//! ```
//!
//! ## Errors
//! Instances are validated before anything gets allocated. Values must be
//! non negative, counts must be positive and an item weighing nothing may not
//! be worth anything under the unbounded model. Values are `isize`: when the
//! optimum of an instance could exceed `isize::MAX`, the instance is rejected
//! with `Error::Overflow` rather than silently overflowing.
//! ```
//! # use knapsack::*;
//! let items = [Item::new(2, -3)];
//! assert_eq!(
//!     Err(Error::InvalidArgument(InvalidArgument::NegativeValue { index: 0, value: -3 })),
//!     solve_zero_one(&items, 10));
//! ```
//!
//! ## Going parallel
//! Solving one instance is inherently sequential. But when you have many
//! independent instances to solve, a `BatchSolver` will use all of your
//! hardware to solve them in parallel.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
