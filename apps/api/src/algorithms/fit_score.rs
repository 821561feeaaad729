//! Skill fit scoring via longest common subsequence.
//!
//! score = LCS(required, candidate) / |required| × 100, compared
//! case-insensitively. Only initialization, matching cells and the final
//! result are traced; mismatching cells are silent.

use serde::Serialize;
use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};
use crate::models::{Candidate, Job};

pub const ALGORITHM_NAME: &str = "DP Fit Score (LCS)";

/// Scores `candidate_skills` against `required_skills`, in `[0, 100]`.
///
/// An empty requirement list scores 0.
pub fn score(required_skills: &[String], candidate_skills: &[String]) -> (f64, ExecutionTrace) {
    let mut trace = TraceBuilder::new(ALGORITHM_NAME);
    let m = required_skills.len();
    let n = candidate_skills.len();

    let mut dp = vec![vec![0u32; n + 1]; m + 1];
    trace.push(
        ExecutionStep::new("Initialized DP Table")
            .var("rows", m)
            .var("cols", n),
    );

    let candidate_lower: Vec<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();

    for i in 1..=m {
        let required = required_skills[i - 1].to_lowercase();
        for j in 1..=n {
            if required == candidate_lower[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
                trace.push(
                    ExecutionStep::new(format!("Match found: {}", required_skills[i - 1]))
                        .var("skill", &required_skills[i - 1])
                        .var("i", i)
                        .var("j", j)
                        .var("dp[i][j]", dp[i][j]),
                );
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    let lcs = dp[m][n];
    let fit = if m > 0 {
        f64::from(lcs) / m as f64 * 100.0
    } else {
        0.0
    };

    trace.push(
        ExecutionStep::new("Validation Complete")
            .var("lcs_length", lcs)
            .var("max_possible", m)
            .var("fit_score", format!("{fit:.2}")),
    );

    debug!(lcs, required = m, score = fit, "LCS fit scoring finished");
    (fit, trace.finish())
}

/// One candidate's fit against a job.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateMatch {
    pub candidate_id: i64,
    pub candidate: String,
    pub score: f64,
    pub trace: ExecutionTrace,
}

/// Scores every candidate against `job`, best fit first (ties keep input order).
pub fn match_candidates(job: &Job, candidates: &[Candidate]) -> Vec<CandidateMatch> {
    let mut results: Vec<CandidateMatch> = candidates
        .iter()
        .map(|c| {
            let (score, trace) = score(&job.required_skills, &c.skills);
            CandidateMatch {
                candidate_id: c.id,
                candidate: c.full_name.clone(),
                score,
                trace,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_subsequence_scores_100() {
        let (fit, trace) = score(
            &skills(&["C#", "SQL", "Data Structures"]),
            &skills(&["c#", "React", "sql", "data structures"]),
        );
        assert!((fit - 100.0).abs() < f64::EPSILON);
        assert_eq!(trace.steps_with("Match found").count(), 3);
        let last = trace.steps.last().unwrap();
        assert_eq!(last.description, "Validation Complete");
        assert_eq!(last.variables["lcs_length"], "3");
        assert_eq!(last.variables["max_possible"], "3");
        assert_eq!(last.variables["fit_score"], "100.00");
    }

    #[test]
    fn test_partial_order_counts_subsequence_only() {
        // Required order A, B, C; candidate has C before A, B → LCS = 2.
        let (fit, trace) = score(&skills(&["A", "B", "C"]), &skills(&["C", "A", "B"]));
        assert!((fit - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(trace.steps.last().unwrap().variables["fit_score"], "66.67");
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let (fit, trace) = score(&skills(&["Rust"]), &skills(&["Java", "Go"]));
        assert_eq!(fit, 0.0);
        // Init + final only.
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let (fit, trace) = score(&[], &skills(&["Rust"]));
        assert_eq!(fit, 0.0);
        assert_eq!(trace.steps[0].variables["rows"], "0");
        assert_eq!(trace.steps.last().unwrap().variables["fit_score"], "0.00");
    }

    #[test]
    fn test_match_candidates_orders_by_score() {
        let job = Job {
            id: 1,
            job_title: "Data Analyst".to_string(),
            required_skills: skills(&["Python", "SQL"]),
            min_experience: 2,
            max_salary: 85000.0,
        };
        let candidates = vec![
            Candidate::new(1, "Alice", 5, 1.0).with_skills(&["Java"]),
            Candidate::new(2, "Bob", 2, 1.0).with_skills(&["Python"]),
            Candidate::new(3, "Diana", 4, 1.0).with_skills(&["Python", "React", "SQL"]),
            Candidate::new(4, "Evan", 4, 1.0).with_skills(&["Go"]),
        ];
        let results = match_candidates(&job, &candidates);
        let order: Vec<i64> = results.iter().map(|r| r.candidate_id).collect();
        assert_eq!(order, vec![3, 2, 1, 4]);
        assert_eq!(results[0].candidate, "Diana");
    }

    proptest! {
        #[test]
        fn prop_score_bounded(
            required in prop::collection::vec("[a-d]", 0..8),
            have in prop::collection::vec("[a-dA-D]", 0..8),
        ) {
            let (fit, trace) = score(&required, &have);
            prop_assert!((0.0..=100.0).contains(&fit));
            prop_assert_eq!(
                trace.steps.first().map(|s| s.description.as_str()),
                Some("Initialized DP Table")
            );
        }

        #[test]
        fn prop_subsequence_scores_100(
            required in prop::collection::vec("[a-z]{1,5}", 1..6),
            noise in prop::collection::vec("[0-9]{1,3}", 0..6),
        ) {
            let mut have: Vec<String> = Vec::new();
            for (i, r) in required.iter().enumerate() {
                if let Some(n) = noise.get(i) {
                    have.push(n.clone());
                }
                have.push(r.to_uppercase());
            }
            let (fit, _) = score(&required, &have);
            prop_assert!((fit - 100.0).abs() < 1e-9);
        }
    }
}
