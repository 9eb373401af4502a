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

//! This module provides the rolling-row memo: the conceptual table is reduced
//! to its last row, which is updated in place each time an item is pushed.

use crate::{Item, Memo, Reuse, InvalidArgument, Error, Result};

/// A single row of `capacity + 1` cells.
///
/// # Note
/// The direction in which the row is swept is what makes this memo correct.
/// When an item may be used only once, the row is swept from the largest
/// capacity down to the weight of the item so that `row[w - weight]` still
/// holds the value of the *previous* row. When it may be reused, the row is
/// swept upwards so that `row[w - weight]` already accounts for the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingRow {
    row: Vec<isize>,
    nb_items: usize,
}

impl RollingRow {
    /// Creates a row of zeroes for a sack of the given `capacity`.
    pub fn new(capacity: usize) -> Self {
        Self { row: vec![0; capacity + 1], nb_items: 0 }
    }
    /// Creates a row of zeroes for a sack of the given `capacity`, or fails
    /// with `CapacityTooLarge` when the row cannot be allocated.
    pub fn try_new(capacity: usize) -> Result<Self> {
        let too_large = || Error::from(InvalidArgument::CapacityTooLarge { capacity });
        let width = capacity.checked_add(1).ok_or_else(too_large)?;

        let mut row = Vec::new();
        row.try_reserve_exact(width).map_err(|_| too_large())?;
        row.resize(width, 0);
        Ok(Self { row, nb_items: 0 })
    }
    /// Returns the best value reachable with the items pushed so far for
    /// every capacity.
    pub fn row(&self) -> &[isize] {
        &self.row
    }
}

impl Memo for RollingRow {
    fn capacity(&self) -> usize {
        self.row.len() - 1
    }
    fn nb_items(&self) -> usize {
        self.nb_items
    }
    fn push(&mut self, item: Item, reuse: Reuse) {
        let Item { weight, value } = item;
        let row = &mut self.row;

        match reuse {
            Reuse::Once => {
                for w in (weight..row.len()).rev() {
                    row[w] = row[w].max(row[w - weight] + value);
                }
            },
            Reuse::Unlimited => {
                for w in weight..row.len() {
                    row[w] = row[w].max(row[w - weight] + value);
                }
            }
        }
        self.nb_items += 1;
    }
    fn best_value(&self) -> isize {
        self.row[self.row.len() - 1]
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
