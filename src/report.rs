//! Report rendering
//!
//! Joins the tracker's issue list with the correlator's mapping and writes a
//! pipe-delimited fixed-width table, one row per issue in tracker order.

use std::collections::HashMap;
use std::io::Write;

use crate::correlate::MergeRecord;
use crate::error::Result;
use crate::jira::Issue;

const KEY_WIDTH: usize = 18;
const TYPE_WIDTH: usize = 12;
const PRIORITY_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 12;
const SUMMARY_WIDTH: usize = 40;
const MERGED_WIDTH: usize = 6;
const PR_WIDTH: usize = 8;

/// Write the comparison table to `out`
pub fn render<W: Write>(
    out: &mut W,
    issues: &[Issue],
    merges: &HashMap<String, MergeRecord>,
) -> Result<()> {
    write_row(
        out,
        "ISSUE ID",
        "TYPE",
        "PRIORITY",
        "STATUS",
        "DESCRIPTION",
        "MERGED",
        "PR",
        "COMMIT",
    )?;

    for issue in issues {
        let summary = truncate(&issue.summary, SUMMARY_WIDTH);

        match merges.get(&issue.key) {
            Some(merge) => write_row(
                out,
                &issue.key,
                &issue.issue_type,
                &issue.priority,
                &issue.status,
                &summary,
                "true",
                &merge.pr,
                &merge.commit.hash,
            )?,
            None => write_row(
                out,
                &issue.key,
                &issue.issue_type,
                &issue.priority,
                &issue.status,
                &summary,
                "false",
                "-",
                "-",
            )?,
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_row<W: Write>(
    out: &mut W,
    key: &str,
    issue_type: &str,
    priority: &str,
    status: &str,
    summary: &str,
    merged: &str,
    pr: &str,
    commit: &str,
) -> Result<()> {
    writeln!(
        out,
        "{:<kw$}|{:<tw$}|{:<pw$}|{:<sw$}|{:<dw$}|{:<mw$}|{:<rw$}|{}",
        key,
        issue_type,
        priority,
        status,
        summary,
        merged,
        pr,
        commit,
        kw = KEY_WIDTH,
        tw = TYPE_WIDTH,
        pw = PRIORITY_WIDTH,
        sw = STATUS_WIDTH,
        dw = SUMMARY_WIDTH,
        mw = MERGED_WIDTH,
        rw = PR_WIDTH,
    )?;
    Ok(())
}

/// Truncate to at most `max` characters, discarding any excess
fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
