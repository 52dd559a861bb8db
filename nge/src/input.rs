use {
    anyhow::{Context, Result, bail},
    clap::Parser,
    libnge::{Problem, Strategy},
    std::fmt::Display,
};

use crate::display::AnswersDisplay;

#[derive(Parser, Debug)]
pub struct Opts {
    /// the sequence, as separate arguments or as a list like "[1, 2, 3]"
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
    /// which algorithm to use: stack, jump or brute-force
    #[arg(short, long, default_value = "stack")]
    strategy: Strategy,
    /// run every strategy that applies, and check that they agree
    #[arg(short, long, conflicts_with = "strategy")]
    all: bool,
}

impl Opts {
    pub fn sequence(&self) -> Result<Vec<i32>> {
        let text = self.values.join(" ");
        libnge::parse_sequence(&text).context("Could not read the input sequence")
    }

    /// The strategies to run, in the order to run them.
    pub fn strategies(&self, problem: Problem) -> Result<Vec<Strategy>> {
        if self.all {
            Ok(problem.strategies().to_vec())
        } else if problem.supports(self.strategy) {
            Ok(vec![self.strategy])
        } else {
            bail!(
                "The {} strategy does not apply to the {problem} problem",
                self.strategy
            );
        }
    }
}

/// Runs `solve` with every requested strategy and prints the results, with `sentinel` standing
/// in for the positions that have no answer. If there was more than one strategy, their names
/// are printed too and we check that all the answers are the same.
pub fn run<T, F>(opts: &Opts, problem: Problem, sentinel: T, mut solve: F) -> Result<()>
where
    T: Display + PartialEq,
    F: FnMut(&[i32], Strategy) -> Result<Vec<Option<T>>>,
{
    let values = opts.sequence()?;
    let strategies = opts.strategies(problem)?;

    let mut results = Vec::with_capacity(strategies.len());
    for &strategy in &strategies {
        let result = solve(&values, strategy)
            .with_context(|| format!("The {strategy} strategy failed"))?;
        let display = AnswersDisplay::new(&result, &sentinel);
        if strategies.len() > 1 {
            println!("{strategy}: {display}");
        } else {
            println!("{display}");
        }
        results.push((strategy, result));
    }

    if let Some(((first_strategy, first), rest)) = results.split_first() {
        for (strategy, result) in rest {
            if result != first {
                bail!("The {first_strategy} and {strategy} strategies disagree");
            }
        }
    }
    Ok(())
}
