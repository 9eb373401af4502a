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

//! This module defines the memo of a knapsack dynamic program.
//!
//! Conceptually, the memo maps each pair (k, w) onto the best value that can
//! be obtained using only the first k items in a sack of capacity w. Whether
//! that mapping is stored as a full table or as one single row that gets
//! overwritten is an implementation detail: both must yield the same optimum.

use crate::{Item, Reuse};

/// A memo that is filled one item at a time (one row of the conceptual
/// table per item).
///
/// # Note
/// A memo trusts its items: it neither rejects negative values nor guards
/// its additions. The solvers validate an instance before pushing anything
/// into a memo.
pub trait Memo {
    /// Returns the capacity of the sack this memo was sized for.
    fn capacity(&self) -> usize;
    /// Returns the number of items that have been pushed so far.
    fn nb_items(&self) -> usize;
    /// Accounts for one more item whose number of copies is governed by
    /// `reuse`.
    fn push(&mut self, item: Item, reuse: Reuse);
    /// Returns the best value reachable with the items pushed so far in a
    /// sack of the full capacity.
    fn best_value(&self) -> isize;

    /// Pushes all the given items and returns the optimum.
    ///
    /// This method is (trivially) auto-implemented, but re-implementing it
    /// does not make much sense.
    fn fill(&mut self, items: &[Item], reuse: Reuse) -> isize {
        for item in items.iter().copied() {
            self.push(item, reuse);
        }
        self.best_value()
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_dp {
    use crate::{Memo, Item, Reuse};

    /// Counts the pushes and pretends every item is worth taking once.
    #[derive(Default)]
    struct DummyMemo {
        items: usize,
        total: isize,
    }
    impl Memo for DummyMemo {
        fn capacity(&self) -> usize { 0 }
        fn nb_items(&self) -> usize { self.items }
        fn push(&mut self, item: Item, _: Reuse) {
            self.items += 1;
            self.total += item.value;
        }
        fn best_value(&self) -> isize { self.total }
    }

    #[test]
    fn fill_pushes_every_item_then_reports_the_best_value() {
        let mut memo = DummyMemo::default();
        let best = memo.fill(&[Item::new(1, 2), Item::new(3, 4)], Reuse::Once);
        assert_eq!(2, memo.nb_items());
        assert_eq!(6, best);
    }

    #[test]
    fn fill_with_no_items_yields_the_initial_value() {
        let mut memo = DummyMemo::default();
        assert_eq!(0, memo.fill(&[], Reuse::Unlimited));
        assert_eq!(0, memo.nb_items());
    }
}
