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

//! The next strictly greater element in a circular sequence.
//!
//! Here the sequence wraps around: after the last element, the search continues at the first
//! one, and it stops once every *other* element has been looked at. An element that is a
//! maximum of the whole sequence therefore has no answer.
//!
//! The index-level functions ([`next_greater_indices`] and
//! [`next_greater_indices_brute_force`]) work for any ordered type and return `None` for
//! elements without an answer. The value-level functions, for `i32` sequences, return the
//! greater value itself and use -1 for "none".

use crate::stack::MonotonicStack;

/// For every position `i`, returns the index of the first element strictly greater than
/// `values[i]`, searching forward from `i + 1` and wrapping around to the start, or `None` if
/// there is no such element.
///
/// This is linear time. We make two passes over the indices, but only push indices on the first
/// pass; the second pass just gives the indices that are still pending a chance to see the
/// elements that come before them.
pub fn next_greater_indices<T: Ord>(values: &[T]) -> Vec<Option<usize>> {
    let n = values.len();
    let mut ret = vec![None; n];
    let mut stack = MonotonicStack::new(values);

    let first_pass = (0..n).map(|i| (i, true));
    let second_pass = (0..n).map(|i| (i, false));
    for (curr, pushing) in first_pass.chain(second_pass) {
        stack.resolve(&values[curr], |idx| {
            trace!("index {idx} resolved by index {curr}");
            ret[idx] = Some(curr);
        });
        if pushing {
            stack.push(curr);
        }
    }

    debug!("{} of {n} indices have no greater element", stack.len());
    ret
}

/// Computes the same thing as [`next_greater_indices`] by checking, for every position, each of
/// the `n - 1` other positions in circular order.
pub fn next_greater_indices_brute_force<T: Ord>(values: &[T]) -> Vec<Option<usize>> {
    let n = values.len();
    (0..n)
        .map(|i| {
            (1..n)
                .map(|offset| (i + offset) % n)
                .find(|&next| values[next] > values[i])
        })
        .collect()
}

/// For every position `i`, returns the first element strictly greater than `values[i]`,
/// searching circularly, or -1 if there is none.
pub fn next_greater_elements(values: &[i32]) -> Vec<i32> {
    to_values(values, next_greater_indices(values))
}

/// Computes the same thing as [`next_greater_elements`], in quadratic time.
pub fn next_greater_elements_brute_force(values: &[i32]) -> Vec<i32> {
    to_values(values, next_greater_indices_brute_force(values))
}

pub(crate) fn to_values(values: &[i32], indices: Vec<Option<usize>>) -> Vec<i32> {
    indices
        .into_iter()
        .map(|idx| idx.map_or(-1, |idx| values[idx]))
        .collect()
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq, proptest::prelude::*};

    macro_rules! circular_test {
        ($name:ident, $values:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let values: &[i32] = &$values[..];
                let expected: &[i32] = &$expected[..];
                assert_eq!(next_greater_elements(values).as_slice(), expected);
                assert_eq!(next_greater_elements_brute_force(values).as_slice(), expected);
            }
        };
    }

    circular_test!(empty, [], []);
    circular_test!(single, [7], [-1]);
    circular_test!(small, [1, 2, 1], [2, -1, 2]);
    circular_test!(wraps, [1, 2, 3, 4, 3], [2, 3, 4, -1, 4]);
    circular_test!(all_equal, [5, 5, 5, 5], [-1, -1, -1, -1]);
    circular_test!(decreasing, [4, 3, 2, 1], [-1, 4, 4, 4]);
    circular_test!(two_maxima, [3, 1, 3], [-1, 3, -1]);
    circular_test!(negative, [-1, -3, -2], [-1, -2, -1]);

    #[test]
    fn indices() {
        let values = [1, 2, 3, 4, 3];
        let expected = vec![Some(1), Some(2), Some(3), None, Some(3)];
        assert_eq!(next_greater_indices(&values), expected);
        assert_eq!(next_greater_indices_brute_force(&values), expected);
    }

    #[test]
    fn generic_over_ord() {
        let words = ["b", "c", "a"];
        assert_eq!(next_greater_indices(&words), vec![Some(1), None, Some(0)]);
    }

    #[test]
    fn zero_sized_elements() {
        let units = [(); 1000];
        assert_eq!(next_greater_indices(&units), vec![None; 1000]);
        assert_eq!(next_greater_indices_brute_force(&units[..10]), vec![None; 10]);
    }

    fn sequences() -> BoxedStrategy<Vec<i32>> {
        prop::collection::vec(prop_oneof![10 => 0..10i32, 1 => -1000..1000i32], 0..100).boxed()
    }

    proptest! {
        #[test]
        fn strategies_agree(ref values in sequences()) {
            let stack = next_greater_indices(values);
            prop_assert_eq!(stack.len(), values.len());
            prop_assert_eq!(&stack, &next_greater_indices_brute_force(values));
        }

        #[test]
        fn only_maxima_are_unresolved(ref values in sequences()) {
            let max = values.iter().max();
            for (i, next) in next_greater_indices(values).into_iter().enumerate() {
                match next {
                    Some(j) => {
                        prop_assert_ne!(i, j);
                        prop_assert!(values[j] > values[i]);
                    }
                    None => {
                        prop_assert_eq!(Some(&values[i]), max);
                    }
                }
            }
        }
    }
}
