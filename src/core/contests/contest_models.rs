use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contest as listed by the judging server. Loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contest {
    pub id: String,
    pub shortname: String,
    #[serde(default)]
    pub formal_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub scoreboard_freeze_duration: Option<String>,
    #[serde(default)]
    pub penalty_time: Option<i64>,
}

impl Contest {
    /// Human readable title, falling back to the plain name when the server
    /// has no formal name configured.
    pub fn display_name(&self) -> &str {
        if self.formal_name.is_empty() {
            &self.name
        } else {
            &self.formal_name
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub ordinal: i64,
    #[serde(default)]
    pub time_limit: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub problem_id: String,
    #[serde(default)]
    pub team_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Judgement {
    pub id: String,
    /// `None` while the submission is still being judged.
    #[serde(default)]
    pub judgement_type_id: Option<String>,
    pub submission_id: String,
}

/// The two verdicts the bot tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
}

impl Verdict {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AC" => Some(Verdict::Accepted),
            "WA" => Some(Verdict::WrongAnswer),
            _ => None,
        }
    }
}
