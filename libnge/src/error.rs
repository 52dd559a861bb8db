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

#![allow(missing_docs)]

use crate::{Problem, Strategy};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Element {position} is not a valid integer: {token:?}")]
    InvalidInput { position: usize, token: String },
    #[error("There is no strategy named {0:?}")]
    UnknownStrategy(String),
    #[error("The {strategy} strategy does not apply to the {problem} problem")]
    UnsupportedStrategy { problem: Problem, strategy: Strategy },
}
