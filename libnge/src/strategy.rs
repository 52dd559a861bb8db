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

use std::{fmt, str::FromStr};

use crate::{Error, circular, daily};

/// The different ways of solving a problem.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Strategy {
    /// A single scan with a [`MonotonicStack`](crate::MonotonicStack). Linear time.
    Stack,
    /// A right-to-left scan that skips ahead using the answers found so far. Only available for
    /// the daily temperatures problem.
    Jump,
    /// Try everything. Quadratic time.
    BruteForce,
}

impl Strategy {
    /// All the strategies, fastest first.
    pub const ALL: [Strategy; 3] = [Strategy::Stack, Strategy::Jump, Strategy::BruteForce];

    fn name(self) -> &'static str {
        match self {
            Strategy::Stack => "stack",
            Strategy::Jump => "jump",
            Strategy::BruteForce => "brute-force",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Strategy, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" => Ok(Strategy::Stack),
            "jump" => Ok(Strategy::Jump),
            "brute-force" | "bruteforce" | "brute" => Ok(Strategy::BruteForce),
            _ => Err(Error::UnknownStrategy(s.to_owned())),
        }
    }
}

/// The problems that this crate solves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Problem {
    /// Distance to the next strictly greater value; see [`daily`].
    DailyTemperatures,
    /// Value of the next strictly greater element, wrapping around; see [`circular`].
    CircularNextGreater,
}

impl Problem {
    /// The strategies that can solve this problem.
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Problem::DailyTemperatures => &Strategy::ALL,
            Problem::CircularNextGreater => &[Strategy::Stack, Strategy::BruteForce],
        }
    }

    /// Returns true if `strategy` can solve this problem.
    pub fn supports(self, strategy: Strategy) -> bool {
        self.strategies().contains(&strategy)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::DailyTemperatures => fmt.write_str("daily temperatures"),
            Problem::CircularNextGreater => fmt.write_str("circular next greater element"),
        }
    }
}

/// For every day, the number of days until a strictly warmer one (or 0), computed with the given
/// strategy.
pub fn daily_temperatures(temperatures: &[i32], strategy: Strategy) -> Vec<usize> {
    debug!(
        "daily temperatures: {} values, {strategy} strategy",
        temperatures.len()
    );
    match strategy {
        Strategy::Stack => daily::next_warmer_distances(temperatures),
        Strategy::Jump => daily::next_warmer_distances_jump(temperatures),
        Strategy::BruteForce => daily::next_warmer_distances_brute_force(temperatures),
    }
}

/// For every element, the index of the next strictly greater element in circular order (or
/// `None`), computed with the given strategy.
///
/// Fails if the strategy doesn't apply to this problem.
pub fn next_greater_circular_indices<T: Ord>(
    values: &[T],
    strategy: Strategy,
) -> Result<Vec<Option<usize>>, Error> {
    debug!(
        "circular next greater: {} values, {strategy} strategy",
        values.len()
    );
    match strategy {
        Strategy::Stack => Ok(circular::next_greater_indices(values)),
        Strategy::BruteForce => Ok(circular::next_greater_indices_brute_force(values)),
        Strategy::Jump => Err(Error::UnsupportedStrategy {
            problem: Problem::CircularNextGreater,
            strategy,
        }),
    }
}

/// For every element, the next strictly greater element in circular order (or -1), computed
/// with the given strategy.
///
/// Fails if the strategy doesn't apply to this problem.
pub fn next_greater_circular(values: &[i32], strategy: Strategy) -> Result<Vec<i32>, Error> {
    let indices = next_greater_circular_indices(values, strategy)?;
    Ok(circular::to_values(values, indices))
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq};

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn strategy_aliases() {
        assert_eq!("Brute".parse::<Strategy>(), Ok(Strategy::BruteForce));
        assert_eq!(" STACK ".parse::<Strategy>(), Ok(Strategy::Stack));
        assert_eq!(
            "quick".parse::<Strategy>(),
            Err(Error::UnknownStrategy("quick".to_owned()))
        );
    }

    #[test]
    fn daily_dispatch() {
        let temps = [73, 74, 75, 71, 69, 72, 76, 73];
        for &strategy in Problem::DailyTemperatures.strategies() {
            assert_eq!(
                daily_temperatures(&temps, strategy),
                vec![1, 1, 4, 2, 1, 1, 0, 0]
            );
        }
    }

    #[test]
    fn circular_dispatch() {
        for &strategy in Problem::CircularNextGreater.strategies() {
            assert_eq!(
                next_greater_circular(&[1, 2, 3, 4, 3], strategy),
                Ok(vec![2, 3, 4, -1, 4])
            );
        }
    }

    #[test]
    fn circular_indices_dispatch() {
        // The first -1 is a real answer, the second one is the sentinel.
        let values = [-2, -1];
        for &strategy in Problem::CircularNextGreater.strategies() {
            assert_eq!(
                next_greater_circular_indices(&values, strategy),
                Ok(vec![Some(1), None])
            );
            assert_eq!(next_greater_circular(&values, strategy), Ok(vec![-1, -1]));
        }
    }

    #[test]
    fn circular_jump_is_unsupported() {
        assert!(!Problem::CircularNextGreater.supports(Strategy::Jump));
        let err = next_greater_circular(&[1, 2, 1], Strategy::Jump).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The jump strategy does not apply to the circular next greater element problem"
        );
    }
}
