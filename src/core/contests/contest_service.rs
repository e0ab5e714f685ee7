use async_trait::async_trait;
use thiserror::Error;

use super::chart_scale::ChartScale;
use super::contest_models::{Contest, Judgement, Problem, Submission, Verdict};
use super::tally::{tally, Tally};

/// Errors raised while talking to the judging server.
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("Could not reach the judging server: {0}")]
    Fetch(String),
    #[error("Unexpected response from the judging server: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ContestError {
    #[error(transparent)]
    Judge(#[from] JudgeError),
    #[error("No contest with short name `{0}`")]
    UnknownContest(String),
}

/// Read operations the bot needs from the judging server.
#[async_trait]
pub trait JudgeClient: Send + Sync {
    async fn list_contests(&self) -> Result<Vec<Contest>, JudgeError>;
    async fn list_problems(&self, contest_id: &str) -> Result<Vec<Problem>, JudgeError>;
    async fn list_submissions(&self, contest_id: &str) -> Result<Vec<Submission>, JudgeError>;
    /// Requires judging server credentials.
    async fn list_judgements(&self, contest_id: &str) -> Result<Vec<Judgement>, JudgeError>;
}

/// Everything needed to chart one contest, fetched fresh per request.
#[derive(Debug, Clone)]
pub struct ContestStats {
    pub contest: Contest,
    pub problems: Vec<Problem>,
    pub tally: Tally,
}

impl ContestStats {
    pub fn scale(&self, verdict: Verdict) -> ChartScale {
        ChartScale::from_counts(&self.problems, self.tally.counts(verdict))
    }

    /// `(label, count)` per problem, in the order the server lists problems.
    pub fn bars(&self, verdict: Verdict) -> Vec<(String, u32)> {
        self.problems
            .iter()
            .map(|p| (p.label.clone(), self.tally.count(verdict, &p.id)))
            .collect()
    }
}

/// Resolves contests by short name and runs the statistics pipeline.
///
/// The contest list is fetched once when the service is built and never
/// refreshed; everything else is fetched on every call.
pub struct ContestService<C: JudgeClient> {
    client: C,
    contests: Vec<Contest>,
}

impl<C: JudgeClient> ContestService<C> {
    /// Create the service and eagerly load the contest list.
    pub async fn new(client: C) -> Result<Self, JudgeError> {
        let contests = client.list_contests().await?;
        tracing::info!(count = contests.len(), "Loaded contests from judging server");
        Ok(Self { client, contests })
    }

    pub fn contests(&self) -> &[Contest] {
        &self.contests
    }

    pub fn find_contest(&self, short_name: &str) -> Option<&Contest> {
        self.contests.iter().find(|c| c.shortname == short_name)
    }

    /// Contests whose short or formal name contains `partial`, ignoring case.
    pub fn search(&self, partial: &str) -> Vec<&Contest> {
        let needle = partial.to_lowercase();
        self.contests
            .iter()
            .filter(|c| {
                c.shortname.to_lowercase().contains(&needle)
                    || c.display_name().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Fetch problems, submissions and judgements for a contest and tally them.
    pub async fn contest_stats(&self, short_name: &str) -> Result<ContestStats, ContestError> {
        let contest = self
            .find_contest(short_name)
            .cloned()
            .ok_or_else(|| ContestError::UnknownContest(short_name.to_string()))?;

        let (problems, submissions, judgements) = tokio::try_join!(
            self.client.list_problems(&contest.id),
            self.client.list_submissions(&contest.id),
            self.client.list_judgements(&contest.id),
        )?;

        tracing::debug!(
            contest_id = %contest.id,
            problems = problems.len(),
            submissions = submissions.len(),
            judgements = judgements.len(),
            "Fetched contest data"
        );

        let tally = tally(&submissions, &judgements);

        Ok(ContestStats {
            contest,
            problems,
            tally,
        })
    }
}
