//! Swimlane report command.

use anyhow::Result;
use clap::Args;
use swimlanes_core::config::SwimlanesConfig;
use swimlanes_core::swimlane;
use swimlanes_tracker::TrackerClient;

use crate::output;

#[derive(Args)]
pub struct ReportArgs {
    /// Tracker API token
    pub token: String,

    /// Tracker project ID
    pub project_id: u64,
}

pub async fn execute(args: ReportArgs, config: &SwimlanesConfig) -> Result<()> {
    let client = TrackerClient::new(&config.tracker_url, &args.token)?;
    let board = swimlane::load_swimlanes(&client, args.project_id, &config.display()).await?;

    print!("{}", output::render_report(&board.swimlanes));
    if let Some(note) = output::unassigned_note(&board.swimlanes) {
        eprintln!("{}", note);
    }
    Ok(())
}
