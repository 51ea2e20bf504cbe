//! Project listing command.

use anyhow::Result;
use clap::Args;
use swimlanes_core::config::SwimlanesConfig;
use swimlanes_core::project;
use swimlanes_tracker::TrackerClient;

use crate::output;

#[derive(Args)]
pub struct ProjectsArgs {
    /// Tracker API token
    pub token: String,
}

pub async fn execute(args: ProjectsArgs, config: &SwimlanesConfig) -> Result<()> {
    let client = TrackerClient::new(&config.tracker_url, &args.token)?;
    let projects = project::list_projects(&client).await?;

    output::print_projects(&projects);
    Ok(())
}
