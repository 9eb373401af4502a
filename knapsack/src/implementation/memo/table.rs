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

//! This module provides the full-table memo. Row `k` of the table holds the
//! best value reachable with the first `k` items for every capacity between
//! 0 and the capacity of the sack.
//!
//! Keeping all rows costs O(n * capacity) memory. In exchange, the table can
//! be inspected after the fact, and it is the natural support for the naive
//! bounded recurrence which needs random access to the previous row.

use crate::{Item, BoundedItem, Memo, Reuse, InvalidArgument, Error, Result};

/// A `(n+1) x (capacity+1)` table stored row after row in one flat vector.
/// The table starts with one single row (no item at all) filled with zeroes
/// and grows by one row each time an item is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The number of cells per row (capacity + 1)
    width: usize,
    /// All the cells of the table. Row `k` spans the cells
    /// `k * width .. (k+1) * width`.
    cells: Vec<isize>,
}

impl Table {
    /// Creates an empty table (one row of zeroes) for a sack of the given
    /// `capacity`.
    pub fn new(capacity: usize) -> Self {
        let width = capacity + 1;
        Self { width, cells: vec![0; width] }
    }
    /// Creates an empty table and reserves the room needed to push
    /// `nb_items` items without reallocating. Fails with `CapacityTooLarge`
    /// when that room cannot be allocated.
    ///
    /// # Example
    /// ```
    /// # use knapsack::*;
    /// assert!(Table::try_for_items(10, 4).is_ok());
    /// assert_eq!(
    ///     Err(Error::InvalidArgument(InvalidArgument::CapacityTooLarge { capacity: usize::MAX })),
    ///     Table::try_for_items(usize::MAX, 0));
    /// ```
    pub fn try_for_items(capacity: usize, nb_items: usize) -> Result<Self> {
        let too_large = || Error::from(InvalidArgument::CapacityTooLarge { capacity });

        let width = capacity.checked_add(1).ok_or_else(too_large)?;
        let size  = nb_items.checked_add(1)
            .and_then(|rows| rows.checked_mul(width))
            .ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| too_large())?;
        cells.resize(width, 0);
        Ok(Self { width, cells })
    }
    /// Returns the number of rows of the table (number of items + 1).
    pub fn nb_rows(&self) -> usize {
        self.cells.len() / self.width
    }
    /// Returns the best value reachable with the first `k` items in a sack
    /// of capacity `w`.
    ///
    /// # Panics
    /// When `k` is greater than the number of items pushed so far or when `w`
    /// is greater than the capacity of the table.
    pub fn value(&self, k: usize, w: usize) -> isize {
        self.row(k)[w]
    }
    /// Returns the row `k` of the table.
    ///
    /// # Panics
    /// When `k` is greater than the number of items pushed so far.
    pub fn row(&self, k: usize) -> &[isize] {
        &self.cells[k * self.width..(k + 1) * self.width]
    }
    /// Accounts for one more bounded item using the naive recurrence: for
    /// every capacity `w`, all the feasible numbers of copies `k` are
    /// enumerated and the best `dp[i-1][w - k*weight] + k*value` is kept.
    ///
    /// This costs O(capacity * count) per item.
    ///
    /// # Note
    /// The table does not validate its items. Values must be non negative
    /// and the optimum must fit in an isize, which is what the solvers check
    /// before they push anything. Out of that range, cells saturate or
    /// overflow.
    pub fn push_bounded(&mut self, item: BoundedItem) {
        let BoundedItem { weight, value, count } = item;
        let (prev, cur) = self.grow();

        if weight == 0 {
            // weightless copies never compete for capacity: take them all
            if value > 0 {
                let copies = isize::try_from(count).unwrap_or(isize::MAX);
                let bonus  = value.saturating_mul(copies);
                cur.iter_mut().for_each(|cell| *cell = cell.saturating_add(bonus));
            }
            return;
        }

        for (w, cell) in cur.iter_mut().enumerate() {
            let limit = count.min(w / weight);
            for k in 1..=limit {
                let candidate = prev[w - k * weight] + k as isize * value;
                *cell = (*cell).max(candidate);
            }
        }
    }
    /// Appends a new row which is a copy of the last one and returns both
    /// the previous row and the new (mutable) one.
    fn grow(&mut self) -> (&[isize], &mut [isize]) {
        let len = self.cells.len();
        self.cells.extend_from_within(len - self.width..);

        let (head, tail) = self.cells.split_at_mut(len);
        (&head[len - self.width..], tail)
    }
}

impl Memo for Table {
    fn capacity(&self) -> usize {
        self.width - 1
    }
    fn nb_items(&self) -> usize {
        self.nb_rows() - 1
    }
    /// Row `i` is first initialized with row `i-1` (item `i` is not taken).
    /// The 'take' branch then reads from row `i-1` when items are used once,
    /// and from row `i` itself when they may be reused. Reading from the
    /// current row is what lets item `i` occur several times.
    fn push(&mut self, item: Item, reuse: Reuse) {
        let Item { weight, value } = item;
        let (prev, cur) = self.grow();

        for w in weight..cur.len() {
            let take = match reuse {
                Reuse::Once      => prev[w - weight],
                Reuse::Unlimited => cur[w - weight],
            } + value;
            cur[w] = cur[w].max(take);
        }
    }
    fn best_value(&self) -> isize {
        self.cells[self.cells.len() - 1]
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_table {
    use crate::*;

    fn scenario() -> Vec<Item> {
        vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 8)]
    }

    #[test]
    fn a_fresh_table_has_one_row_of_zeroes() {
        let table = Table::new(5);
        assert_eq!(1, table.nb_rows());
        assert_eq!(0, table.nb_items());
        assert_eq!(5, table.capacity());
        assert_eq!(&[0, 0, 0, 0, 0, 0], table.row(0));
        assert_eq!(0, table.best_value());
    }

    #[test]
    fn pushing_an_item_adds_a_row() {
        let mut table = Table::new(4);
        table.push(Item::new(2, 3), Reuse::Once);
        assert_eq!(2, table.nb_rows());
        assert_eq!(&[0, 0, 3, 3, 3], table.row(1));
    }

    #[test]
    fn zero_one_rows_use_each_item_at_most_once() {
        let mut table = Table::new(10);
        assert_eq!(15, table.fill(&scenario(), Reuse::Once));
        assert_eq!(&[0, 0, 3, 4, 5, 8, 8, 11, 12, 13, 15], table.row(4));
    }

    #[test]
    fn unbounded_rows_let_items_recur() {
        let mut table = Table::new(6);
        table.push(Item::new(2, 3), Reuse::Unlimited);
        assert_eq!(&[0, 0, 3, 3, 6, 6, 9], table.row(1));
    }

    #[test]
    fn the_first_row_and_column_stay_zero() {
        let mut table = Table::try_for_items(10, 4).unwrap();
        table.fill(&scenario(), Reuse::Unlimited);
        for w in 0..=10 {
            assert_eq!(0, table.value(0, w));
        }
        for k in 0..table.nb_rows() {
            assert_eq!(0, table.value(k, 0));
        }
    }

    #[test]
    fn cells_are_non_decreasing_in_both_directions() {
        let mut table = Table::new(10);
        table.fill(&scenario(), Reuse::Once);
        for k in 0..table.nb_rows() {
            for w in 0..=10 {
                if w > 0 { assert!(table.value(k, w - 1) <= table.value(k, w)); }
                if k > 0 { assert!(table.value(k - 1, w) <= table.value(k, w)); }
            }
        }
    }

    #[test]
    fn every_zero_one_cell_either_skips_or_takes_the_item() {
        let items = scenario();
        let mut table = Table::new(10);
        table.fill(&items, Reuse::Once);
        for (i, item) in items.iter().enumerate() {
            let k = i + 1;
            for w in 0..=10 {
                let skip = table.value(k - 1, w);
                let take = if w >= item.weight { Some(table.value(k - 1, w - item.weight) + item.value) } else { None };
                let cell = table.value(k, w);
                assert!(cell == skip || Some(cell) == take);
            }
        }
    }

    #[test]
    fn every_unbounded_cell_either_skips_or_takes_from_its_own_row() {
        let items = scenario();
        let mut table = Table::new(10);
        table.fill(&items, Reuse::Unlimited);
        for (i, item) in items.iter().enumerate() {
            let k = i + 1;
            for w in 0..=10 {
                let skip = table.value(k - 1, w);
                let take = if w >= item.weight { Some(table.value(k, w - item.weight) + item.value) } else { None };
                let cell = table.value(k, w);
                assert!(cell == skip || Some(cell) == take, "k = {k}, w = {w}");
            }
        }
        // the item weighing 5 is taken twice, which no single-use row allows
        assert_eq!(16, table.best_value());
    }

    #[test]
    fn an_item_heavier_than_the_sack_changes_nothing() {
        let mut table = Table::new(3);
        table.push(Item::new(4, 100), Reuse::Once);
        assert_eq!(table.row(0), table.row(1));
    }

    #[test]
    fn bounded_rows_enumerate_all_feasible_copies() {
        let mut table = Table::new(10);
        table.push_bounded(BoundedItem::new(2, 3, 2));
        assert_eq!(&[0, 0, 3, 3, 6, 6, 6, 6, 6, 6, 6], table.row(1));
        table.push_bounded(BoundedItem::new(3, 4, 3));
        table.push_bounded(BoundedItem::new(4, 5, 1));
        assert_eq!(14, table.best_value());
    }

    #[test]
    fn weightless_bounded_copies_are_all_taken() {
        let mut table = Table::new(2);
        table.push_bounded(BoundedItem::new(0, 2, 3));
        assert_eq!(&[6, 6, 6], table.row(1));
    }

    #[test]
    fn counts_beyond_isize_saturate_instead_of_wrapping() {
        let mut table = Table::new(1);
        table.push_bounded(BoundedItem::new(0, 1, usize::MAX));
        assert_eq!(&[isize::MAX, isize::MAX], table.row(1));
        table.push_bounded(BoundedItem::new(0, 3, 2));
        assert_eq!(&[isize::MAX, isize::MAX], table.row(2));
    }

    #[test]
    fn a_table_that_cannot_be_allocated_is_reported() {
        let too_large = |capacity| Err(Error::InvalidArgument(InvalidArgument::CapacityTooLarge { capacity }));
        assert_eq!(too_large(usize::MAX), Table::try_for_items(usize::MAX, 0));
        assert_eq!(too_large(usize::MAX / 2), Table::try_for_items(usize::MAX / 2, 2));
        assert_eq!(too_large(1 << 58), Table::try_for_items(1 << 58, 0));
    }

    #[test]
    fn a_reserved_table_holds_all_its_rows() {
        let mut table = Table::try_for_items(10, 4).unwrap();
        assert_eq!(1, table.nb_rows());
        assert_eq!(15, table.fill(&scenario(), Reuse::Once));
        assert_eq!(5, table.nb_rows());
    }
}
