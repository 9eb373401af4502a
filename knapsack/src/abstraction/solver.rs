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

//! This module defines the `Solver` trait.

use crate::Result;

/// This is the solver abstraction. It is implemented by all the structures
/// that compute the exact optimum of some flavor of the knapsack problem.
/// The associated `Item` type tells what kind of items the solver works with
/// (`Item` for the 0-1 and unbounded models, `BoundedItem` for the bounded
/// model).
pub trait Solver {
    /// The kind of items this solver chooses from
    type Item;

    /// This method returns the maximum total value that fits in a sack of
    /// the given `capacity` when choosing among the given `items`.
    ///
    /// The instance is fully validated before the dynamic program is even
    /// allocated: a malformed instance yields an `Err` and no partial
    /// computation ever takes place. An empty set of items is not an error;
    /// its optimum is simply zero.
    fn maximize(&self, items: &[Self::Item], capacity: usize) -> Result<isize>;
}
