//! # relcheck
//!
//! Cross-references issue tracker tickets slated for a release against the
//! commit history of a git repository, and reports which tracked issues have
//! a corresponding merged commit.

pub mod app;
pub mod cli;
pub mod config;
pub mod correlate;
pub mod error;
pub mod git;
pub mod jira;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use correlate::{Correlator, MergeRecord};
pub use error::{Error, Result};
pub use git::CommitRecord;
pub use jira::Issue;
