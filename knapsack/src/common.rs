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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// This type denotes one resource unit that may be put in the sack. It costs
/// `weight` units of capacity and yields `value` units of profit.
///
/// Whether an item may be selected once or as many times as one likes is not
/// a property of the item itself; it is decided by the solver (0-1 or
/// unbounded) which is used to maximize the profit.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Item {
    pub weight : usize,
    pub value  : isize,
}
impl Item {
    /// Creates a new item.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack::Item;
    /// let item = Item::new(3, 4);
    /// assert_eq!(3, item.weight);
    /// assert_eq!(4, item.value);
    /// ```
    pub fn new(weight: usize, value: isize) -> Self {
        Self { weight, value }
    }
}

// ----------------------------------------------------------------------------
// --- BOUNDED ITEM -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// An item that comes in a limited supply: it may be selected anywhere between
/// zero and `count` times.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoundedItem {
    pub weight : usize,
    pub value  : isize,
    pub count  : usize,
}
impl BoundedItem {
    /// Creates a new bounded item.
    pub fn new(weight: usize, value: isize, count: usize) -> Self {
        Self { weight, value, count }
    }
    /// Returns one single copy of this item.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack::{BoundedItem, Item};
    /// assert_eq!(Item::new(2, 3), BoundedItem::new(2, 3, 10).unit());
    /// ```
    pub fn unit(self) -> Item {
        Item::new(self.weight, self.value)
    }
}

// ----------------------------------------------------------------------------
// --- REUSE ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Tells how many times each item may be selected by a recurrence. This is
/// the one and only difference between the 0-1 and the unbounded knapsack.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Reuse {
    /// Every item is used at most once (0-1 knapsack)
    Once,
    /// Every item may be used as many times as the capacity allows
    /// (unbounded, a.k.a. complete knapsack)
    Unlimited,
}

// ----------------------------------------------------------------------------
// --- STRATEGY ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The storage used to memoize the dynamic program.
///
/// Both strategies compute the exact same optimum. The full table keeps one
/// row per item, which is handy for debugging and inspection, whereas the
/// rolling row only keeps the latest row and uses O(capacity) memory.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// A full `(n+1) x (capacity+1)` table.
    Table,
    /// A single row of `capacity+1` cells, updated in place.
    #[default]
    Rolling,
}

// ----------------------------------------------------------------------------
// --- INSTANCE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An owned problem instance: the items to choose from and the capacity of
/// the sack. `T` is either `Item` or `BoundedItem`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Instance<T> {
    pub items    : Vec<T>,
    pub capacity : usize,
}
impl <T> Instance<T> {
    pub fn new(items: Vec<T>, capacity: usize) -> Self {
        Self { items, capacity }
    }
}

// ----------------------------------------------------------------------------
// --- ERRORS -----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The reasons why an instance might be rejected before any computation
/// takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    /// Item `index` has a negative value
    #[error("item {index} has a negative value ({value})")]
    NegativeValue { index: usize, value: isize },
    /// Bounded item `index` may not be selected at all
    #[error("bounded item {index} has a count of zero")]
    ZeroCount { index: usize },
    /// Item `index` weighs nothing but yields some profit. Under the unbounded
    /// model, it could be selected infinitely many times.
    #[error("item {index} weighs nothing but is worth {value}: the optimum is unbounded")]
    WeightlessItem { index: usize, value: isize },
    /// The memo of the dynamic program cannot be sized for this capacity
    #[error("capacity {capacity} is too large to be tabulated")]
    CapacityTooLarge { capacity: usize },
}

/// This enumeration groups the kind of errors that might be reported by a
/// solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The instance is malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    /// The optimum of the instance might not fit in an isize
    #[error("the optimum might exceed {}", isize::MAX)]
    Overflow,
}

/// Convenient alias for the results produced by this library.
pub type Result<T> = std::result::Result<T, Error>;


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_common {
    use crate::*;

    #[test]
    fn unit_drops_the_count() {
        let bounded = BoundedItem::new(4, 5, 3);
        assert_eq!(Item { weight: 4, value: 5 }, bounded.unit());
    }

    #[test]
    fn by_default_the_strategy_is_rolling() {
        assert_eq!(Strategy::Rolling, Strategy::default());
    }

    #[test]
    fn invalid_arguments_convert_into_errors() {
        let err: Error = InvalidArgument::ZeroCount { index: 2 }.into();
        assert_eq!(Error::InvalidArgument(InvalidArgument::ZeroCount { index: 2 }), err);
    }

    #[test]
    fn errors_have_a_readable_message() {
        let err: Error = InvalidArgument::NegativeValue { index: 1, value: -3 }.into();
        assert_eq!("invalid argument: item 1 has a negative value (-3)", err.to_string());
    }
}
