use {
    colored::*,
    itertools::Itertools,
    std::fmt::{self, Display},
};

/// Displays a sequence like `[1, 2, 3]`.
pub struct SequenceDisplay<'a, T>(pub &'a [T]);

impl<T: Display> fmt::Display for SequenceDisplay<'_, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "[{}]", self.0.iter().format(", "))
    }
}

/// Displays a sequence of answers like `[1, 2, 0]`, where the positions without an answer are
/// shown as a dimmed `sentinel`.
pub struct AnswersDisplay<'a, T> {
    answers: &'a [Option<T>],
    sentinel: &'a T,
}

impl<'a, T: Display> AnswersDisplay<'a, T> {
    pub fn new(answers: &'a [Option<T>], sentinel: &'a T) -> AnswersDisplay<'a, T> {
        AnswersDisplay { answers, sentinel }
    }
}

impl<T: Display> fmt::Display for AnswersDisplay<'_, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.answers.iter().map(|answer| match answer {
            Some(v) => v.to_string(),
            None => self.sentinel.to_string().dimmed().to_string(),
        });
        write!(fmt, "[{}]", entries.format(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sequence() {
        assert_eq!(SequenceDisplay(&[73, -4, 75]).to_string(), "[73, -4, 75]");
        assert_eq!(SequenceDisplay::<i32>(&[]).to_string(), "[]");
    }

    #[test]
    fn only_missing_answers_are_dimmed() {
        colored::control::set_override(true);
        let answers = [Some(-1), None];
        assert_eq!(
            AnswersDisplay::new(&answers, &-1).to_string(),
            "[-1, \u{1b}[2m-1\u{1b}[0m]"
        );
        colored::control::unset_override();
    }
}
