// Copyright 2018-2019 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// See the LICENSE-APACHE or LICENSE-MIT files at the top-level directory
// of this distribution.

//! The work stack shared by the linear-time algorithms.
//!
//! A [`MonotonicStack`] holds indices into a borrowed sequence whose answer is not yet known.
//! Reading the stack from bottom to top, the values at those indices never increase. That
//! ordering is what makes the algorithms linear: when a new value arrives, the indices that it
//! resolves are exactly the ones at the top of the stack whose values are smaller than it, so we
//! can pop them off one by one and stop at the first one that is not smaller.
//!
//! For example, scanning `73 74 75 71 69 72` leaves the stack (as values) at `75 71 69` just
//! before `72` arrives. The `72` pops `69` and then `71`, stops at `75`, and is pushed itself,
//! giving `75 72`.

/// A stack of pending indices into `values`, ordered so that the values they point to are
/// non-increasing from bottom to top.
#[derive(Clone, Debug)]
pub struct MonotonicStack<'a, T> {
    values: &'a [T],
    indices: Vec<usize>,
}

impl<'a, T: Ord> MonotonicStack<'a, T> {
    /// Creates an empty stack over `values`.
    ///
    /// The stack never holds more than one entry per index, so we allocate room for all of them
    /// up front.
    pub fn new(values: &'a [T]) -> MonotonicStack<'a, T> {
        MonotonicStack {
            values,
            indices: Vec::with_capacity(values.len()),
        }
    }

    /// Pops every pending index whose value is strictly smaller than `value`, calling `resolved`
    /// on each one. The most recently pushed indices are resolved first.
    ///
    /// Indices whose values are equal to `value` stay on the stack.
    pub fn resolve<F: FnMut(usize)>(&mut self, value: &T, mut resolved: F) {
        while let Some(&top) = self.indices.last() {
            if self.values[top] >= *value {
                break;
            }
            self.indices.pop();
            resolved(top);
        }
    }

    /// Pushes a pending index.
    ///
    /// The caller must have called [`MonotonicStack::resolve`] with the value at `idx` first;
    /// otherwise the ordering of the stack could be broken. This is checked in debug builds.
    pub fn push(&mut self, idx: usize) {
        debug_assert!(
            self.indices
                .last()
                .is_none_or(|&top| self.values[top] >= self.values[idx]),
            "pushing index {idx} would break the monotonic ordering"
        );
        self.indices.push(idx);
    }

    /// The pending indices, from the bottom of the stack to the top.
    pub fn pending(&self) -> &[usize] {
        &self.indices
    }

    /// The number of pending indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if there are no pending indices.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Checks that the values at the pending indices are non-increasing from bottom to top.
    pub fn is_monotonic(&self) -> bool {
        self.indices
            .windows(2)
            .all(|pair| self.values[pair[0]] >= self.values[pair[1]])
    }
}
