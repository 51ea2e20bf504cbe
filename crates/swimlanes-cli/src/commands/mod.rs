//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swimlanes_core::config::{SwimlanesConfig, CONFIG_FILE};

pub mod advance;
pub mod projects;
pub mod report;
pub mod serve;

/// Swimlanes - per-developer story boards for tracker projects
#[derive(Parser)]
#[command(name = "swimlanes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Tracker API base URL (overrides the configuration)
    #[arg(long, global = true)]
    pub tracker_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the swimlanes of a project as a tab-delimited table
    ///
    /// The table goes to stdout. A count of stories owned by non-members, if
    /// any, goes to stderr so the table format stays unchanged.
    Report(report::ReportArgs),

    /// List the projects visible to a token
    Projects(projects::ProjectsArgs),

    /// Move a story to its next workflow state
    Advance(advance::AdvanceArgs),

    /// Start the web dashboard
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let mut config = SwimlanesConfig::load(&self.config)?;
        config.apply_overrides(None, self.tracker_url);
        config.validate()?;

        match self.command {
            Commands::Report(args) => report::execute(args, &config).await,
            Commands::Projects(args) => projects::execute(args, &config).await,
            Commands::Advance(args) => advance::execute(args, &config).await,
            Commands::Serve(args) => serve::execute(args, config).await,
        }
    }
}
