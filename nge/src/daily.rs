use {
    anyhow::Result,
    libnge::{Problem, Strategy, daily_temperatures},
};

pub fn run(opts: super::input::Opts) -> Result<()> {
    super::input::run(&opts, Problem::DailyTemperatures, 0, |temps, strategy| {
        Ok(answers(temps, strategy))
    })
}

/// The distances to the next warmer day, with `None` for the days that don't have one.
pub fn answers(temps: &[i32], strategy: Strategy) -> Vec<Option<usize>> {
    daily_temperatures(temps, strategy)
        .into_iter()
        .map(|d| (d > 0).then_some(d))
        .collect()
}
