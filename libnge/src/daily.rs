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

//! Distances to the next strictly greater value in a (non-circular) sequence.
//!
//! Given daily temperatures, `next_warmer_distances` answers "how many days until it gets
//! warmer?" for every day. A day with no warmer day after it gets 0. Only strictly warmer days
//! count, so `[55, 55, 55]` gives `[0, 0, 0]`.
//!
//! There are three implementations, which always agree:
//!
//! - [`next_warmer_distances`]: monotonic stack, O(n) time and O(n) extra space.
//! - [`next_warmer_distances_jump`]: right-to-left scan that reuses the answers already computed
//!   to skip ahead. No extra space beyond the output; quadratic in the worst case.
//! - [`next_warmer_distances_brute_force`]: checks every later day. O(n^2) time.

use crate::stack::MonotonicStack;

/// For every position `i`, returns the smallest `k > 0` with `temperatures[i + k] >
/// temperatures[i]`, or 0 if there is no such `k`.
pub fn next_warmer_distances<T: Ord>(temperatures: &[T]) -> Vec<usize> {
    let mut ret = vec![0; temperatures.len()];
    let mut stack = MonotonicStack::new(temperatures);

    for (curr, temp) in temperatures.iter().enumerate() {
        // Any pending day that is colder than today has been waiting for exactly this day: if
        // there were a warmer day in between, it would already have been popped.
        stack.resolve(temp, |prev| {
            trace!("day {prev} resolved by day {curr}");
            ret[prev] = curr - prev;
        });
        stack.push(curr);
    }

    // Whatever is left on the stack never sees a warmer day, and keeps its 0.
    ret
}

/// Computes the same thing as [`next_warmer_distances`], by scanning from right to left.
///
/// To find the answer for day `i`, we start at `i + 1` and, as long as the candidate day isn't
/// warmer than day `i`, we jump straight to the candidate's own next warmer day. Every day that
/// we skip is no warmer than the candidate, and hence no warmer than day `i` either. If the
/// candidate has no warmer day at all, neither does day `i`.
pub fn next_warmer_distances_jump<T: Ord>(temperatures: &[T]) -> Vec<usize> {
    let n = temperatures.len();
    let mut ret = vec![0; n];

    for i in (0..n.saturating_sub(1)).rev() {
        let mut j = i + 1;
        while j < n && temperatures[j] <= temperatures[i] {
            if ret[j] == 0 {
                j = n;
            } else {
                j += ret[j];
            }
        }
        if j < n {
            ret[i] = j - i;
        }
    }

    ret
}

/// Computes the same thing as [`next_warmer_distances`], by checking every later day.
pub fn next_warmer_distances_brute_force<T: Ord>(temperatures: &[T]) -> Vec<usize> {
    temperatures
        .iter()
        .enumerate()
        .map(|(i, temp)| {
            temperatures[i + 1..]
                .iter()
                .position(|later| later > temp)
                .map_or(0, |offset| offset + 1)
        })
        .collect()
}
