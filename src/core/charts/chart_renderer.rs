use thiserror::Error;

use crate::core::contests::{ChartScale, ContestStats, Verdict};

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("There is nothing to chart")]
    Empty,
    #[error("Failed to draw chart: {0}")]
    Render(String),
    #[error("Failed to encode chart image: {0}")]
    Encode(String),
}

/// Bar fill, independent of any drawing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColor(pub u8, pub u8, pub u8);

impl BarColor {
    pub const ACCEPTED: BarColor = BarColor(46, 204, 113);
    pub const WRONG_ANSWER: BarColor = BarColor(231, 76, 60);

    pub fn for_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accepted => Self::ACCEPTED,
            Verdict::WrongAnswer => Self::WRONG_ANSWER,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
}

/// Description of a per-problem bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
    pub scale: ChartScale,
    pub color: BarColor,
}

impl BarChart {
    pub fn from_stats(stats: &ContestStats, verdict: Verdict) -> Self {
        Self {
            title: stats.contest.display_name().to_string(),
            bars: stats
                .bars(verdict)
                .into_iter()
                .map(|(label, value)| Bar { label, value })
                .collect(),
            scale: stats.scale(verdict),
            color: BarColor::for_verdict(verdict),
        }
    }
}

/// Turns a chart description into PNG bytes.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, chart: &BarChart) -> Result<Vec<u8>, ChartError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contests::tally::Tally;
    use crate::core::contests::{Contest, Problem};
    use std::collections::HashMap;

    fn stats() -> ContestStats {
        let problem = |id: &str, label: &str| Problem {
            id: id.to_string(),
            label: label.to_string(),
            ordinal: 0,
            time_limit: 1.0,
            name: String::new(),
            short_name: None,
        };
        ContestStats {
            contest: Contest {
                id: "1".to_string(),
                shortname: "demo".to_string(),
                formal_name: "Demo Finals".to_string(),
                name: "demo".to_string(),
                external_id: None,
                start_time: None,
                end_time: None,
                duration: None,
                scoreboard_freeze_duration: None,
                penalty_time: None,
            },
            problems: vec![problem("A", "Alpha"), problem("B", "Beta")],
            tally: Tally {
                accepted: HashMap::from([("A".to_string(), 3)]),
                wrong: HashMap::from([("B".to_string(), 1)]),
            },
        }
    }

    #[test]
    fn test_accepted_chart_from_stats() {
        let chart = BarChart::from_stats(&stats(), Verdict::Accepted);
        assert_eq!(chart.title, "Demo Finals");
        assert_eq!(
            chart.bars,
            vec![
                Bar { label: "Alpha".to_string(), value: 3 },
                Bar { label: "Beta".to_string(), value: 0 },
            ]
        );
        assert_eq!(chart.scale.ticks, vec![0, 1, 2, 3]);
        assert_eq!(chart.color, BarColor::ACCEPTED);
    }

    #[test]
    fn test_wrong_answer_chart_uses_its_own_scale() {
        let chart = BarChart::from_stats(&stats(), Verdict::WrongAnswer);
        assert_eq!(chart.bars[1].value, 1);
        assert_eq!(chart.scale.max, 1);
        assert_eq!(chart.color, BarColor::WRONG_ANSWER);
    }
}
