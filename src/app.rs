use std::io;

use colored::Colorize;

use crate::cli::{Args, Command};
use crate::config::Config;
use crate::correlate::Correlator;
use crate::error::Result;
use crate::git;
use crate::jira::JiraClient;
use crate::report;

/// Main application entry point
pub fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Compare { version } => compare(&config, &args.repo, version),
    }
}

/// Load configuration and apply command-line overrides
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load(Config::default_path()?)?,
    };

    if let Some(url) = &args.jira_url {
        config.jira.url = url.clone();
    }
    if let Some(project) = &args.project {
        config.jira.project = project.clone();
    }

    Ok(config)
}

/// Report which issues slated for `version` have a merged commit
fn compare(config: &Config, repo: &str, version: &str) -> Result<()> {
    println!(
        "{} Fetching {} issues with fix version {}",
        ">".bright_green(),
        config.jira.project.bright_cyan(),
        version.bright_cyan()
    );
    let client = JiraClient::new(&config.jira.url, &config.jira.project);
    let issues = client.issues_for_version(version)?;

    println!(
        "{} Scanning commit history in {}",
        ">".bright_green(),
        repo.bright_cyan()
    );
    let commits = git::read_log(repo)?;

    let correlator = Correlator::new(&config.jira.project, &config.patterns.closes_marker)?;
    let merges = correlator.correlate(&commits);

    report::render(&mut io::stdout().lock(), &issues, &merges)?;

    Ok(())
}
