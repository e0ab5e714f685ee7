pub mod chart_scale;
pub mod contest_models;
pub mod contest_service;
pub mod tally;

pub use chart_scale::ChartScale;
pub use contest_models::{Contest, Judgement, Problem, Submission, Verdict};
pub use contest_service::{ContestError, ContestService, ContestStats, JudgeClient, JudgeError};
