use {
    anyhow::Result,
    libnge::{Problem, Strategy, next_greater_circular_indices},
};

pub fn run(opts: super::input::Opts) -> Result<()> {
    super::input::run(&opts, Problem::CircularNextGreater, -1, |values, strategy| {
        answers(values, strategy)
    })
}

/// The next greater values, with `None` for the elements that don't have one. Unlike the -1
/// returned by `libnge::next_greater_circular`, this can't be confused with a real -1.
pub fn answers(values: &[i32], strategy: Strategy) -> Result<Vec<Option<i32>>> {
    let indices = next_greater_circular_indices(values, strategy)?;
    Ok(indices
        .into_iter()
        .map(|idx| idx.map(|idx| values[idx]))
        .collect())
}
