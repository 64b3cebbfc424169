//! Commit-to-issue correlation
//!
//! Scans commit records for issue keys in the subject and pull request
//! references in the body, and maps each found key to its commit. Both
//! patterns are project conventions and are built from configuration
//! rather than hardcoded.

use std::collections::HashMap;

use regex::Regex;

use crate::error::{Error, Result};
use crate::git::CommitRecord;

/// Placeholder used when a commit carries no pull request reference
pub const NO_PR: &str = "#na";

/// A commit that references a tracked issue
#[derive(Debug, Clone)]
pub struct MergeRecord {
    pub commit: CommitRecord,
    /// The pull request reference (`#<digits>`), or [`NO_PR`]
    pub pr: String,
}

/// Extracts issue keys and pull request references from commit messages
#[derive(Debug)]
pub struct Correlator {
    issue_pattern: Regex,
    pr_pattern: Regex,
}

impl Correlator {
    /// Build a correlator for a project key (e.g. `AIRFLOW`) and a pull
    /// request marker (e.g. `Closes `).
    ///
    /// The issue key must open the commit subject, optionally wrapped in a
    /// bracket, and be terminated by `]`, whitespace, or `:`. The pull
    /// request reference may appear anywhere in the body. Issue numbers are
    /// capped at six digits so that unrelated longer numbers never match.
    pub fn new(project: &str, closes_marker: &str) -> Result<Self> {
        let issue_pattern = Regex::new(&format!(
            r"^\[?({}-[0-9]{{1,6}})[\]\s:]",
            regex::escape(project)
        ))
        .map_err(|e| Error::Config(format!("invalid project key {:?}: {}", project, e)))?;

        let pr_pattern = Regex::new(&format!(
            r"(?s){}(#[0-9]{{1,6}})(?:[^0-9]|$)",
            regex::escape(closes_marker)
        ))
        .map_err(|e| Error::Config(format!("invalid closes marker {:?}: {}", closes_marker, e)))?;

        Ok(Self {
            issue_pattern,
            pr_pattern,
        })
    }

    /// Map issue keys to the commits that reference them.
    ///
    /// Commits whose subject carries no issue key are skipped. When several
    /// commits reference the same key, the last one scanned wins.
    pub fn correlate(&self, commits: &[CommitRecord]) -> HashMap<String, MergeRecord> {
        let mut merges = HashMap::new();

        for commit in commits {
            let Some(key) = self.issue_key(&commit.subject) else {
                continue;
            };
            let pr = self.pr_ref(&commit.body);

            merges.insert(
                key,
                MergeRecord {
                    commit: commit.clone(),
                    pr,
                },
            );
        }

        merges
    }

    fn issue_key(&self, subject: &str) -> Option<String> {
        self.issue_pattern
            .captures(subject)
            .map(|caps| caps[1].to_string())
    }

    fn pr_ref(&self, body: &str) -> String {
        self.pr_pattern
            .captures(body)
            .map_or_else(|| NO_PR.to_string(), |caps| caps[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correlator() -> Correlator {
        Correlator::new("AIRFLOW", "Closes ").unwrap()
    }

    fn record(subject: &str, body: &str) -> CommitRecord {
        CommitRecord {
            hash: "abc123".to_string(),
            author_name: "Author".to_string(),
            author_email: "author@example.com".to_string(),
            date: "2019-04-01 12:00:00 +0000".to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_bracketed_key_with_closes() {
        let merges = correlator().correlate(&[record(
            "[AIRFLOW-1234] Fix foo",
            "Some text.\nCloses #42",
        )]);

        let merge = &merges["AIRFLOW-1234"];
        assert_eq!(merge.pr, "#42");
        assert_eq!(merge.commit.subject, "[AIRFLOW-1234] Fix foo");
    }

    #[test]
    fn test_key_terminated_by_colon_or_whitespace() {
        let correlator = correlator();

        let merges = correlator.correlate(&[record("AIRFLOW-55: fix", "")]);
        assert!(merges.contains_key("AIRFLOW-55"));

        let merges = correlator.correlate(&[record("AIRFLOW-55 fix", "")]);
        assert!(merges.contains_key("AIRFLOW-55"));
    }

    #[test]
    fn test_key_must_open_the_subject() {
        let merges = correlator().correlate(&[record("Revert [AIRFLOW-1234] Fix foo", "")]);
        assert!(merges.is_empty());
    }

    #[test]
    fn test_no_key_is_skipped() {
        let merges = correlator().correlate(&[record("Update README", "Closes #42")]);
        assert!(merges.is_empty());
    }

    #[test]
    fn test_seven_digit_issue_number_does_not_match() {
        let merges = correlator().correlate(&[record("[AIRFLOW-1234567] Fix foo", "")]);
        assert!(merges.is_empty());
    }

    #[test]
    fn test_missing_body_uses_sentinel() {
        let merges = correlator().correlate(&[record("[AIRFLOW-1] Fix foo", "")]);
        assert_eq!(merges["AIRFLOW-1"].pr, NO_PR);
    }

    #[test]
    fn test_body_without_closes_uses_sentinel() {
        let merges = correlator().correlate(&[record(
            "[AIRFLOW-1] Fix foo",
            "Refs #42 but does not close it",
        )]);
        assert_eq!(merges["AIRFLOW-1"].pr, NO_PR);
    }

    #[test]
    fn test_closes_found_after_arbitrary_text() {
        let body = format!("{}\n\nCloses #1234", "long preamble ".repeat(100));
        let merges = correlator().correlate(&[record("[AIRFLOW-9] Fix foo", &body)]);
        assert_eq!(merges["AIRFLOW-9"].pr, "#1234");
    }

    #[test]
    fn test_seven_digit_pr_number_does_not_match() {
        let merges = correlator().correlate(&[record("[AIRFLOW-9] Fix foo", "Closes #1234567")]);
        assert_eq!(merges["AIRFLOW-9"].pr, NO_PR);
    }

    #[test]
    fn test_last_write_wins_on_duplicate_keys() {
        let merges = correlator().correlate(&[
            record("[AIRFLOW-7] First attempt", "Closes #1"),
            record("[AIRFLOW-7] Second attempt", "Closes #2"),
        ]);

        assert_eq!(merges.len(), 1);
        assert_eq!(merges["AIRFLOW-7"].pr, "#2");
        assert_eq!(merges["AIRFLOW-7"].commit.subject, "[AIRFLOW-7] Second attempt");
    }

    #[test]
    fn test_other_project_prefix() {
        let correlator = Correlator::new("FLINK", "Closes ").unwrap();
        let merges = correlator.correlate(&[
            record("[FLINK-321] Fix bar", "Closes #7"),
            record("[AIRFLOW-321] Fix bar", "Closes #8"),
        ]);

        assert_eq!(merges.len(), 1);
        assert_eq!(merges["FLINK-321"].pr, "#7");
    }

    #[test]
    fn test_custom_closes_marker() {
        let correlator = Correlator::new("AIRFLOW", "Merges ").unwrap();
        let merges = correlator.correlate(&[record("[AIRFLOW-3] Fix baz", "Merges #15")]);
        assert_eq!(merges["AIRFLOW-3"].pr, "#15");
    }
}
