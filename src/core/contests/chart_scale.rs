use std::collections::HashMap;

use super::contest_models::Problem;

/// Vertical axis of a per-problem bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartScale {
    /// Highest count among the charted problems.
    pub max: u32,
    /// One tick per integer from 0 through `max`.
    pub ticks: Vec<u32>,
}

impl ChartScale {
    pub fn from_counts(problems: &[Problem], counts: &HashMap<String, u32>) -> Self {
        let max = problems
            .iter()
            .map(|p| counts.get(&p.id).copied().unwrap_or(0))
            .max()
            .unwrap_or(0);

        Self {
            max,
            ticks: (0..=max).collect(),
        }
    }

    /// Exclusive upper bound for the axis range, leaving room above the
    /// tallest bar.
    pub fn axis_end(&self) -> u32 {
        self.max + 1
    }
}
