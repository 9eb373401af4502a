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

//! This module implements the binary splitting of bounded items. A bounded
//! item with count C is replaced by O(log C) single-use "batches" of 1, 2, 4,
//! ... copies plus one last batch with whatever remains. Any number of copies
//! between 0 and C can be obtained by including or excluding whole batches,
//! which turns the bounded knapsack into an equivalent 0-1 knapsack.

use crate::{Item, BoundedItem};

/// Iterates over the batch sizes of the binary split of some count.
///
/// # Example
/// ```
/// # use knapsack::BinarySplit;
/// assert_eq!(vec![1, 2, 4, 3], BinarySplit::new(10).collect::<Vec<_>>());
/// assert_eq!(vec![1, 2, 4],    BinarySplit::new(7).collect::<Vec<_>>());
/// assert!(BinarySplit::new(0).next().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarySplit {
    /// The number of copies that are not covered by any batch yet
    remaining: usize,
    /// The size of the next power-of-two batch
    next: usize,
}
impl BinarySplit {
    pub fn new(count: usize) -> Self {
        Self { remaining: count, next: 1 }
    }
}
impl Iterator for BinarySplit {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let batch = self.next.min(self.remaining);
        self.remaining -= batch;
        self.next = self.next.saturating_mul(2);
        Some(batch)
    }
}

/// Expands all the given bounded items into single-use items. Each batch of
/// `k` copies of an item weighs `k * weight` and is worth `k * value`.
///
/// Weights and values saturate: a batch whose weight saturates can never fit
/// in a sack whose capacity is representable, hence its value is irrelevant.
pub fn expand(items: &[BoundedItem]) -> Vec<Item> {
    let mut expanded = vec![];
    for item in items {
        for batch in BinarySplit::new(item.count) {
            let copies = isize::try_from(batch).unwrap_or(isize::MAX);
            expanded.push(Item::new(
                item.weight.saturating_mul(batch),
                item.value.saturating_mul(copies)));
        }
    }
    tracing::trace!(original = items.len(), expanded = expanded.len(), "binary split");
    expanded
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
