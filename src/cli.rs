use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file (defaults to ~/.config/relcheck/config.yaml)
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// Path to the git repository to scan
    #[clap(short, long, value_parser, default_value = ".")]
    pub repo: String,

    /// Jira base URL, overriding the configuration file
    #[clap(long, value_parser, env = "JIRA_URL")]
    pub jira_url: Option<String>,

    /// Jira project key, overriding the configuration file
    #[clap(long, value_parser, env = "JIRA_PROJECT")]
    pub project: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare issues slated for a fix version against merged commits
    Compare {
        /// The release/fix version to report on (e.g. 1.10.3)
        version: String,
    },
}
