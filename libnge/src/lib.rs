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

#![deny(missing_docs)]

//! Algorithms for the "next greater element" family of problems.
//!
//! Two variants are provided. In [`daily`], every position of a (non-circular) sequence is
//! mapped to the distance to the next strictly greater value; this is the classic "daily
//! temperatures" exercise. In [`circular`], the sequence wraps around and every position is
//! mapped to the *value* of the next strictly greater element.
//!
//! Each variant comes with a linear-time solution built on a [`MonotonicStack`] and with slower
//! reference solutions that are mostly useful for checking the fast ones. The [`Strategy`] enum
//! and the dispatch functions [`daily_temperatures`] and [`next_greater_circular`] choose
//! between them at runtime.

#[macro_use]
extern crate log;

pub mod circular;
pub mod daily;
mod error;
mod parse;
pub mod stack;
mod strategy;

pub use crate::{
    error::Error,
    parse::parse_sequence,
    stack::MonotonicStack,
    strategy::{
        Problem, Strategy, daily_temperatures, next_greater_circular,
        next_greater_circular_indices,
    },
};
