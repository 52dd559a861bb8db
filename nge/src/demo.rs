use {
    anyhow::Result,
    libnge::Problem,
};

use crate::{
    circular, daily,
    display::{AnswersDisplay, SequenceDisplay},
};

const DAILY_EXAMPLES: &[&[i32]] = &[
    &[73, 74, 75, 71, 69, 72, 76, 73],
    &[30, 40, 50, 60],
    &[30, 60, 90],
];

const CIRCULAR_EXAMPLES: &[&[i32]] = &[&[1, 2, 1], &[1, 2, 3, 4, 3]];

pub fn run() -> Result<()> {
    let daily = Problem::DailyTemperatures;
    println!("{}:", capitalized(daily));
    for &strategy in daily.strategies() {
        for &temps in DAILY_EXAMPLES {
            let result = daily::answers(temps, strategy);
            println!(
                "  {strategy}: {} -> {}",
                SequenceDisplay(temps),
                AnswersDisplay::new(&result, &0)
            );
        }
    }

    println!();

    let circular = Problem::CircularNextGreater;
    println!("{}:", capitalized(circular));
    for &strategy in circular.strategies() {
        for &values in CIRCULAR_EXAMPLES {
            let result = circular::answers(values, strategy)?;
            println!(
                "  {strategy}: {} -> {}",
                SequenceDisplay(values),
                AnswersDisplay::new(&result, &-1)
            );
        }
    }
    Ok(())
}

fn capitalized(problem: Problem) -> String {
    let name = problem.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
