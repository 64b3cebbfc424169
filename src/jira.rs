//! Jira integration for relcheck
//!
//! Queries the Jira REST search endpoint for the issues whose fix version
//! matches a release label. The server paginates results, so pages are
//! fetched until the reported total is exhausted.
//!
//! Only the fields the report consumes are requested and parsed; everything
//! else in the payload is ignored.

use serde::Deserialize;

use crate::error::Result;

/// Page size requested from the search endpoint
const PAGE_SIZE: u32 = 50;

/// A tracked issue, reduced to the fields the report consumes
#[derive(Debug, Clone)]
pub struct Issue {
    /// The issue key (e.g. "AIRFLOW-1234")
    pub key: String,
    /// The issue type name (e.g. "Bug")
    pub issue_type: String,
    /// The priority name, or "-" when the tracker has none set
    pub priority: String,
    /// The workflow status name (e.g. "Resolved")
    pub status: String,
    /// The one-line issue summary
    pub summary: String,
}

// Wire shapes for the /rest/api/2/search response

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "startAt")]
    start_at: u32,
    total: u32,
    issues: Vec<RawIssue>,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    key: String,
    fields: RawFields,
}

#[derive(Debug, Deserialize)]
struct RawFields {
    #[serde(rename = "issuetype")]
    issue_type: Named,
    priority: Option<Named>,
    status: Named,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        Self {
            key: raw.key,
            issue_type: raw.fields.issue_type.name,
            priority: raw
                .fields
                .priority
                .map_or_else(|| "-".to_string(), |p| p.name),
            status: raw.fields.status.name,
            summary: raw.fields.summary,
        }
    }
}

/// A client for one Jira instance and project
pub struct JiraClient {
    base_url: String,
    project: String,
}

impl JiraClient {
    pub fn new(base_url: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project: project.into(),
        }
    }

    /// Fetch every issue in the project whose fix version matches `version`,
    /// in the order the tracker returns them.
    pub fn issues_for_version(&self, version: &str) -> Result<Vec<Issue>> {
        let jql = format!(
            "project = {} AND fixVersion = \"{}\"",
            self.project, version
        );
        let url = format!("{}/rest/api/2/search", self.base_url);

        collect_pages(|start_at| {
            let page = ureq::get(&url)
                .query("jql", &jql)
                .query("startAt", &start_at.to_string())
                .query("maxResults", &PAGE_SIZE.to_string())
                .query("fields", "issuetype,priority,status,summary")
                .call()?
                .into_json()?;
            Ok(page)
        })
    }
}

/// Accumulate paginated search results until the reported total is exhausted.
///
/// `fetch` is called with the next `startAt` offset and returns one page.
/// An empty page also ends the loop, whatever total the tracker claims.
fn collect_pages<F>(mut fetch: F) -> Result<Vec<Issue>>
where
    F: FnMut(u32) -> Result<SearchResponse>,
{
    let mut issues: Vec<Issue> = Vec::new();
    let mut start_at = 0u32;

    loop {
        let page = fetch(start_at)?;

        let fetched = page.issues.len() as u32;
        issues.extend(page.issues.into_iter().map(Issue::from));

        start_at = page.start_at + fetched;
        if fetched == 0 || start_at >= page.total {
            break;
        }
    }

    Ok(issues)
}
