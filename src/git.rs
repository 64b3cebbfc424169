//! Repository log reading
//!
//! Walks the full commit history of a local repository and produces one
//! structured record per commit, most recent first.

use chrono::{FixedOffset, LocalResult, TimeZone};
use git2::{Repository, Sort, Time};

use crate::error::Result;

/// A single commit from the repository log
#[derive(Debug, Clone)]
pub struct CommitRecord {
    /// The full commit hash
    pub hash: String,
    /// The author's name
    pub author_name: String,
    /// The author's email
    pub author_email: String,
    /// The author date, formatted as `YYYY-MM-DD HH:MM:SS +ZZZZ`
    pub date: String,
    /// The first line of the commit message
    pub subject: String,
    /// The rest of the commit message (empty when the commit has none)
    pub body: String,
}

/// Read the full commit history of the repository at `path`, newest first
pub fn read_log(path: &str) -> Result<Vec<CommitRecord>> {
    let repo = Repository::open(path)?;

    let mut revwalk = repo.revwalk()?;
    revwalk.set_sorting(Sort::TOPOLOGICAL)?;
    revwalk.push_head()?;

    let mut records = Vec::new();
    for oid in revwalk {
        let oid = oid?;
        let commit = repo.find_commit(oid)?;
        let author = commit.author();

        records.push(CommitRecord {
            hash: oid.to_string(),
            author_name: author.name().unwrap_or("").to_string(),
            author_email: author.email().unwrap_or("").to_string(),
            date: format_time(&author.when()),
            subject: commit.summary().unwrap_or("").to_string(),
            body: commit.body().unwrap_or("").to_string(),
        });
    }

    Ok(records)
}

fn format_time(time: &Time) -> String {
    let Some(offset) = FixedOffset::east_opt(time.offset_minutes() * 60) else {
        return time.seconds().to_string();
    };

    match offset.timestamp_opt(time.seconds(), 0) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S %z").to_string(),
        _ => time.seconds().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn commit(repo: &Repository, message: &str) {
        let sig = Signature::now("Test Author", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let parent = repo
            .head()
            .ok()
            .and_then(|head| head.target())
            .map(|oid| repo.find_commit(oid).unwrap());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    #[test]
    fn test_read_log_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        commit(&repo, "[TEST-1] First change\n\nSome text.\nCloses #10");
        commit(&repo, "Update README");

        let log = read_log(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(log.len(), 2);

        // Newest first
        assert_eq!(log[0].subject, "Update README");
        assert_eq!(log[1].subject, "[TEST-1] First change");

        assert_eq!(log[1].body, "Some text.\nCloses #10");
        assert!(log[0].body.is_empty());

        assert_eq!(log[0].author_name, "Test Author");
        assert_eq!(log[0].author_email, "test@example.com");
        assert_eq!(log[0].hash.len(), 40);
        assert!(!log[0].date.is_empty());
    }

    #[test]
    fn test_read_log_rejects_non_repo() {
        let dir = TempDir::new().unwrap();
        assert!(read_log(dir.path().to_str().unwrap()).is_err());
    }
}
