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

//! This module checks an instance before any memo gets allocated. Once an
//! instance has been admitted, the solvers can run without ever checking an
//! addition: the optimum (and hence every cell of the memo) is bounded by a
//! value that is known to fit in an isize.

use crate::{Item, BoundedItem, Reuse, InvalidArgument, Error, Result};

/// How many copies of an item a model allows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Copies {
    AtMost(usize),
    Unlimited,
}

/// Accumulates an upper bound on the optimum of the instance while its items
/// are admitted one after the other.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Validator {
    capacity: usize,
    bound: isize,
}

impl Validator {
    /// Creates a validator for a sack of the given `capacity` whose memo
    /// will comprise `rows` rows of `capacity + 1` cells.
    pub fn new(capacity: usize, rows: usize) -> Result<Self> {
        let bytes = capacity.checked_add(1)
            .and_then(|width| width.checked_mul(rows))
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<isize>()));

        match bytes {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(Self { capacity, bound: 0 }),
            _ => Err(InvalidArgument::CapacityTooLarge { capacity }.into()),
        }
    }
    /// Admits the item at position `index` or tells why it cannot be.
    pub fn admit(&mut self, index: usize, weight: usize, value: isize, copies: Copies) -> Result<()> {
        if value < 0 {
            return Err(InvalidArgument::NegativeValue { index, value }.into());
        }
        if copies == Copies::AtMost(0) {
            return Err(InvalidArgument::ZeroCount { index }.into());
        }
        if weight == 0 && copies == Copies::Unlimited && value > 0 {
            return Err(InvalidArgument::WeightlessItem { index, value }.into());
        }
        if value == 0 {
            return Ok(());
        }

        let fitting = if weight == 0 { usize::MAX } else { self.capacity / weight };
        let copies  = match copies {
            Copies::AtMost(count) => count.min(fitting),
            Copies::Unlimited     => fitting,
        };
        self.bound = isize::try_from(copies).ok()
            .and_then(|copies| copies.checked_mul(value))
            .and_then(|total| total.checked_add(self.bound))
            .ok_or(Error::Overflow)?;
        Ok(())
    }
    /// Returns an upper bound on the optimum of the items admitted so far.
    pub fn bound(&self) -> isize {
        self.bound
    }
}

/// Checks the items of a 0-1 or unbounded instance whose memo will comprise
/// `rows` rows.
pub(crate) fn check_items(items: &[Item], capacity: usize, reuse: Reuse, rows: usize) -> Result<isize> {
    let copies = match reuse {
        Reuse::Once      => Copies::AtMost(1),
        Reuse::Unlimited => Copies::Unlimited,
    };
    let mut validator = Validator::new(capacity, rows)?;
    for (index, item) in items.iter().enumerate() {
        validator.admit(index, item.weight, item.value, copies)?;
    }
    Ok(validator.bound())
}

/// Checks the items of a bounded instance whose memo will comprise `rows`
/// rows.
pub(crate) fn check_bounded(items: &[BoundedItem], capacity: usize, rows: usize) -> Result<isize> {
    let mut validator = Validator::new(capacity, rows)?;
    for (index, item) in items.iter().enumerate() {
        validator.admit(index, item.weight, item.value, Copies::AtMost(item.count))?;
    }
    Ok(validator.bound())
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_validation {
    use crate::*;
    use super::*;

    #[test]
    fn an_empty_instance_is_valid() {
        assert_eq!(Ok(0), check_items(&[], 10, Reuse::Once, 1));
        assert_eq!(Ok(0), check_bounded(&[], 10, 1));
    }

    #[test]
    fn negative_values_are_rejected() {
        let items = [Item::new(1, 1), Item::new(2, -1)];
        assert_eq!(
            Err(Error::InvalidArgument(InvalidArgument::NegativeValue { index: 1, value: -1 })),
            check_items(&items, 10, Reuse::Once, 1));
    }

    #[test]
    fn zero_counts_are_rejected() {
        let items = [BoundedItem::new(1, 1, 0)];
        assert_eq!(
            Err(Error::InvalidArgument(InvalidArgument::ZeroCount { index: 0 })),
            check_bounded(&items, 10, 1));
    }

    #[test]
    fn weightless_profitable_items_are_rejected_when_unlimited() {
        let items = [Item::new(0, 3)];
        assert_eq!(
            Err(Error::InvalidArgument(InvalidArgument::WeightlessItem { index: 0, value: 3 })),
            check_items(&items, 10, Reuse::Unlimited, 1));
        assert_eq!(Ok(3), check_items(&items, 10, Reuse::Once, 1));
    }

    #[test]
    fn weightless_worthless_items_are_accepted_when_unlimited() {
        assert_eq!(Ok(0), check_items(&[Item::new(0, 0)], 10, Reuse::Unlimited, 1));
    }

    #[test]
    fn a_capacity_that_cannot_be_tabulated_is_rejected() {
        assert_eq!(
            Err(Error::InvalidArgument(InvalidArgument::CapacityTooLarge { capacity: usize::MAX })),
            check_items(&[], usize::MAX, Reuse::Once, 1));
        assert_eq!(
            Err(Error::InvalidArgument(InvalidArgument::CapacityTooLarge { capacity: usize::MAX / 4 })),
            check_items(&[], usize::MAX / 4, Reuse::Once, 3));
    }

    #[test]
    fn the_bound_only_counts_the_copies_that_fit() {
        // 0-1: the second item does not fit at all
        assert_eq!(Ok(3), check_items(&[Item::new(2, 3), Item::new(11, 7)], 10, Reuse::Once, 1));
        // unbounded: 5 copies of the first one, none of the second
        assert_eq!(Ok(15), check_items(&[Item::new(2, 3), Item::new(11, 7)], 10, Reuse::Unlimited, 1));
        // bounded: min(count, capacity / weight)
        assert_eq!(Ok(6 + 12), check_bounded(&[BoundedItem::new(2, 3, 2), BoundedItem::new(3, 4, 7)], 10, 1));
    }

    #[test]
    fn an_optimum_that_might_not_fit_an_isize_is_rejected() {
        let items = [Item::new(1, isize::MAX), Item::new(1, 1)];
        assert_eq!(Err(Error::Overflow), check_items(&items, 2, Reuse::Once, 1));
        assert_eq!(Err(Error::Overflow), check_items(&[Item::new(1, isize::MAX / 2)], 3, Reuse::Unlimited, 1));
        assert_eq!(Ok(isize::MAX), check_items(&[Item::new(1, isize::MAX)], 2, Reuse::Once, 1));
    }

    #[test]
    fn weightless_bounded_items_count_all_their_copies() {
        assert_eq!(Ok(12), check_bounded(&[BoundedItem::new(0, 3, 4)], 0, 1));
    }
}
