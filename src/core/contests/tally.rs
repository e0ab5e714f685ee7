use std::collections::HashMap;

use super::contest_models::{Judgement, Submission, Verdict};

/// Per-problem counts of accepted and wrong-answer judgements for one contest.
///
/// Problems without a single matching judgement are absent from the maps;
/// use [`Tally::count`] for lookups that default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub accepted: HashMap<String, u32>,
    pub wrong: HashMap<String, u32>,
}

impl Tally {
    pub fn counts(&self, verdict: Verdict) -> &HashMap<String, u32> {
        match verdict {
            Verdict::Accepted => &self.accepted,
            Verdict::WrongAnswer => &self.wrong,
        }
    }

    pub fn count(&self, verdict: Verdict, problem_id: &str) -> u32 {
        self.counts(verdict).get(problem_id).copied().unwrap_or(0)
    }
}

/// Count accepted and wrong-answer judgements per problem.
///
/// Every judgement counts, so a submission re-judged as accepted twice adds
/// two to its problem. Judgements pointing at submissions that are not in
/// `submissions` are dropped.
pub fn tally(submissions: &[Submission], judgements: &[Judgement]) -> Tally {
    let problem_of: HashMap<&str, &str> = submissions
        .iter()
        .map(|s| (s.id.as_str(), s.problem_id.as_str()))
        .collect();

    let mut result = Tally::default();
    for judgement in judgements {
        let Some(verdict) = judgement
            .judgement_type_id
            .as_deref()
            .and_then(Verdict::from_code)
        else {
            continue;
        };
        let Some(problem_id) = problem_of.get(judgement.submission_id.as_str()) else {
            continue;
        };

        let counts = match verdict {
            Verdict::Accepted => &mut result.accepted,
            Verdict::WrongAnswer => &mut result.wrong,
        };
        *counts.entry((*problem_id).to_string()).or_insert(0) += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(id: &str, problem: &str) -> Submission {
        Submission {
            id: id.to_string(),
            problem_id: problem.to_string(),
            team_id: "team".to_string(),
        }
    }

    fn judgement(id: &str, kind: &str, sub: &str) -> Judgement {
        Judgement {
            id: id.to_string(),
            judgement_type_id: Some(kind.to_string()),
            submission_id: sub.to_string(),
        }
    }

    #[test]
    fn test_counts_per_problem() {
        let submissions = vec![
            submission("s1", "A"),
            submission("s2", "B"),
            submission("s3", "A"),
        ];
        let judgements = vec![
            judgement("j1", "AC", "s1"),
            judgement("j2", "WA", "s2"),
            judgement("j3", "AC", "s3"),
        ];

        let result = tally(&submissions, &judgements);

        assert_eq!(result.count(Verdict::Accepted, "A"), 2);
        assert_eq!(result.count(Verdict::Accepted, "B"), 0);
        assert_eq!(result.count(Verdict::WrongAnswer, "A"), 0);
        assert_eq!(result.count(Verdict::WrongAnswer, "B"), 1);
        // Zero counts are lookups, not entries
        assert!(!result.accepted.contains_key("B"));
        assert!(!result.wrong.contains_key("A"));
    }

    #[test]
    fn test_empty_judgements_give_empty_tally() {
        let submissions = vec![submission("s1", "A")];
        let result = tally(&submissions, &[]);
        assert!(result.accepted.is_empty());
        assert!(result.wrong.is_empty());
    }

    #[test]
    fn test_rejudged_submission_counts_twice() {
        let submissions = vec![submission("s1", "A")];
        let judgements = vec![judgement("j1", "AC", "s1"), judgement("j2", "AC", "s1")];
        let result = tally(&submissions, &judgements);
        assert_eq!(result.count(Verdict::Accepted, "A"), 2);
    }

    #[test]
    fn test_unknown_submission_is_dropped() {
        let submissions = vec![submission("s1", "A")];
        let judgements = vec![judgement("j1", "AC", "s1"), judgement("j2", "AC", "ghost")];
        let result = tally(&submissions, &judgements);
        assert_eq!(result.accepted.len(), 1);
        assert_eq!(result.count(Verdict::Accepted, "A"), 1);
    }

    #[test]
    fn test_other_verdicts_and_pending_are_ignored() {
        let submissions = vec![submission("s1", "A"), submission("s2", "A")];
        let mut pending = judgement("j3", "AC", "s2");
        pending.judgement_type_id = None;
        let judgements = vec![
            judgement("j1", "TLE", "s1"),
            judgement("j2", "RTE", "s2"),
            pending,
        ];
        let result = tally(&submissions, &judgements);
        assert_eq!(result, Tally::default());
    }

    #[test]
    fn test_every_tallied_problem_has_a_matching_submission() {
        let submissions = vec![
            submission("s1", "A"),
            submission("s2", "B"),
            submission("s3", "C"),
        ];
        let judgements = vec![
            judgement("j1", "AC", "s1"),
            judgement("j2", "AC", "s2"),
            judgement("j3", "WA", "s3"),
            judgement("j4", "AC", "s9"),
        ];
        let result = tally(&submissions, &judgements);

        for problem_id in result.accepted.keys() {
            let matched = submissions.iter().any(|s| {
                &s.problem_id == problem_id
                    && judgements.iter().any(|j| {
                        j.submission_id == s.id && j.judgement_type_id.as_deref() == Some("AC")
                    })
            });
            assert!(matched, "problem {problem_id} has no accepted submission");
        }
        assert!(!result.accepted.contains_key("C"));
    }
}
