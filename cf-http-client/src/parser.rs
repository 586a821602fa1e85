//! API response decoding and reduction to solved problems

use crate::error::CfError;
use serde::Deserialize;
use std::collections::HashSet;

/// Site used for problem links, independent of the API base URL
const PROBLEMSET_URL: &str = "https://codeforces.com/problemset/problem";

/// Envelope status of a successful API call
const OK_STATUS: &str = "OK";

/// Verdict string the API uses for an accepted submission
const ACCEPTED_VERDICT: &str = "OK";

/// Sort key given to problems without a rating
const UNRATED_SORT_KEY: u32 = u32::MAX;

/// A problem the user has an accepted submission for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProblem {
    pub name: String,
    pub contest_id: u64,
    pub index: String,
    /// `None` for problems the judge has not rated yet
    pub rating: Option<u32>,
    pub tags: Vec<String>,
    pub url: String,
}

impl RemoteProblem {
    /// Rating for display, `Unrated` when absent
    pub fn rating_label(&self) -> String {
        self.rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "Unrated".to_string())
    }

    fn sort_key(&self) -> u32 {
        self.rating.unwrap_or(UNRATED_SORT_KEY)
    }
}

/// Problemset link for a contest problem
pub fn problem_url(contest_id: impl std::fmt::Display, index: &str) -> String {
    format!("{}/{}/{}", PROBLEMSET_URL, contest_id, index)
}

/// Top-level API envelope
#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    result: Vec<Submission>,
}

#[derive(Debug, Deserialize)]
struct Submission {
    /// Absent while the submission is still being judged
    #[serde(default)]
    verdict: Option<String>,
    problem: Problem,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Problem {
    #[serde(default)]
    contest_id: Option<u64>,
    index: String,
    name: String,
    #[serde(default)]
    rating: Option<u32>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Decode a `user.status` response body into the solved problem list
pub(crate) fn parse_user_status(body: &str) -> Result<Vec<RemoteProblem>, CfError> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if envelope.status != OK_STATUS {
        return Err(CfError::Api {
            comment: envelope
                .comment
                .unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    Ok(accepted_problems(envelope.result))
}

/// Keep accepted submissions, dedup by problem identity, sort by rating
fn accepted_problems(submissions: Vec<Submission>) -> Vec<RemoteProblem> {
    let mut seen = HashSet::new();
    let mut problems: Vec<RemoteProblem> = submissions
        .into_iter()
        .filter(|s| s.verdict.as_deref() == Some(ACCEPTED_VERDICT))
        .filter_map(|s| {
            let p = s.problem;
            // Problems outside any contest cannot be linked or matched locally
            let contest_id = p.contest_id?;
            if !seen.insert((contest_id, p.index.clone())) {
                return None;
            }
            Some(RemoteProblem {
                url: problem_url(contest_id, &p.index),
                name: p.name,
                contest_id,
                index: p.index,
                rating: p.rating,
                tags: p.tags,
            })
        })
        .collect();

    // Stable: equal ratings keep response order
    problems.sort_by_key(RemoteProblem::sort_key);
    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn submission(verdict: &str, contest_id: u64, index: &str, rating: Option<u32>) -> String {
        let rating = rating
            .map(|r| format!(r#","rating":{}"#, r))
            .unwrap_or_default();
        format!(
            r#"{{"verdict":"{}","problem":{{"contestId":{},"index":"{}","name":"P{}{}","tags":["math"]{}}}}}"#,
            verdict, contest_id, index, contest_id, index, rating
        )
    }

    fn envelope(submissions: &[String]) -> String {
        format!(r#"{{"status":"OK","result":[{}]}}"#, submissions.join(","))
    }

    #[test]
    fn test_failed_status_carries_comment() {
        let body = r#"{"status":"FAILED","comment":"handle: User with handle nobody not found"}"#;
        match parse_user_status(body).unwrap_err() {
            CfError::Api { comment } => assert!(comment.contains("not found")),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_status_without_comment() {
        let body = r#"{"status":"FAILED"}"#;
        match parse_user_status(body).unwrap_err() {
            CfError::Api { comment } => assert_eq!(comment, "Unknown error"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_status_is_checked_separately_from_verdict() {
        // An accepted verdict string in the status field is not a success marker
        let body = r#"{"status":"ACCEPTED","result":[]}"#;
        assert!(matches!(parse_user_status(body), Err(CfError::Api { .. })));

        let body = r#"{"status":"OK","result":[{"verdict":"ACCEPTED","problem":{"contestId":4,"index":"A","name":"Watermelon"}}]}"#;
        assert!(parse_user_status(body).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body() {
        let result = parse_user_status("<html>Codeforces is temporarily unavailable</html>");
        assert!(matches!(result, Err(CfError::Decode(_))));
    }

    #[test]
    fn test_only_accepted_verdicts_kept() {
        let body = envelope(&[
            submission("WRONG_ANSWER", 1, "A", Some(800)),
            submission("OK", 4, "A", Some(800)),
            submission("TIME_LIMIT_EXCEEDED", 71, "A", Some(800)),
        ]);
        let problems = parse_user_status(&body).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].contest_id, 4);
        assert_eq!(
            problems[0].url,
            "https://codeforces.com/problemset/problem/4/A"
        );
    }

    #[test]
    fn test_missing_verdict_and_contest_skipped() {
        let body = r#"{"status":"OK","result":[
            {"problem":{"contestId":4,"index":"A","name":"Watermelon"}},
            {"verdict":"OK","problem":{"index":"A","name":"Gym only"}},
            {"verdict":"OK","problem":{"contestId":59,"index":"A","name":"Word"}}
        ]}"#;
        let problems = parse_user_status(body).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].name, "Word");
        assert!(problems[0].tags.is_empty());
        assert_eq!(problems[0].rating_label(), "Unrated");
    }

    #[test]
    fn test_duplicate_keeps_first_occurrence() {
        let body = r#"{"status":"OK","result":[
            {"verdict":"OK","problem":{"contestId":4,"index":"A","name":"Newest","rating":800,"tags":["math"]}},
            {"verdict":"OK","problem":{"contestId":4,"index":"A","name":"Oldest","rating":800,"tags":["brute force"]}}
        ]}"#;
        let problems = parse_user_status(body).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].name, "Newest");
        assert_eq!(problems[0].tags, vec!["math".to_string()]);
    }

    #[test]
    fn test_same_contest_different_index_not_merged() {
        let body = envelope(&[
            submission("OK", 1520, "A", Some(800)),
            submission("OK", 1520, "B", Some(800)),
        ]);
        assert_eq!(parse_user_status(&body).unwrap().len(), 2);
    }

    #[test]
    fn test_unrated_sorted_last() {
        let body = envelope(&[
            submission("OK", 1, "A", None),
            submission("OK", 2, "A", Some(1200)),
            submission("OK", 3, "A", Some(800)),
        ]);
        let ids: Vec<u64> = parse_user_status(&body)
            .unwrap()
            .iter()
            .map(|p| p.contest_id)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_output_sorted_and_unique(
            entries in prop::collection::vec(
                (1u64..20u64, prop::sample::select(vec!["A", "B", "C1"]), prop::option::of(8u32..30u32), prop::bool::ANY),
                0..40,
            ),
        ) {
            let subs: Vec<String> = entries
                .iter()
                .map(|(cid, idx, rating, ok)| {
                    let verdict = if *ok { "OK" } else { "WRONG_ANSWER" };
                    submission(verdict, *cid, idx, rating.map(|r| r * 100))
                })
                .collect();
            let problems = parse_user_status(&envelope(&subs)).unwrap();

            // Non-decreasing by rating, unrated after every rated entry
            for pair in problems.windows(2) {
                prop_assert!(pair[0].sort_key() <= pair[1].sort_key());
            }

            // One entry per identity key
            let mut keys = HashSet::new();
            for p in &problems {
                prop_assert!(keys.insert((p.contest_id, p.index.clone())));
            }

            // Every accepted key appears exactly once
            let accepted: HashSet<(u64, String)> = entries
                .iter()
                .filter(|(_, _, _, ok)| *ok)
                .map(|(cid, idx, _, _)| (*cid, idx.to_string()))
                .collect();
            prop_assert_eq!(keys, accepted);
        }
    }
}
