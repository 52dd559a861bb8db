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

use crate::Error;

/// Parses a sequence of integers.
///
/// The integers may be separated by commas, whitespace, or both, and the whole thing may be
/// wrapped in a single pair of square brackets. That is, `1 2 3`, `1,2,3` and `[1, 2, 3]` all
/// parse to the same thing. An empty string (or `[]`) is an empty sequence.
///
/// Returns [`Error::InvalidInput`] if any element fails to parse, including an empty element
/// between two commas.
pub fn parse_sequence(text: &str) -> Result<Vec<i32>, Error> {
    let text = text.trim();
    let text = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text);

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .flat_map(|chunk| {
            let mut words = chunk.split_whitespace().peekable();
            // An all-whitespace chunk still counts as one (empty) element, so that "1,,2" and
            // "1, ,2" are rejected instead of silently skipped.
            let empty = words.peek().is_none().then_some("");
            words.chain(empty)
        })
        .enumerate()
        .map(|(position, token)| {
            token.parse().map_err(|_| Error::InvalidInput {
                position,
                token: token.to_owned(),
            })
        })
        .collect()
}
