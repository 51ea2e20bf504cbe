//! Story transition command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use swimlanes_core::config::SwimlanesConfig;
use swimlanes_core::story;
use swimlanes_tracker::TrackerClient;

#[derive(Args)]
pub struct AdvanceArgs {
    /// Tracker API token
    pub token: String,

    /// Tracker project ID
    pub project_id: u64,

    /// Story ID
    pub story_id: u64,
}

pub async fn execute(args: AdvanceArgs, config: &SwimlanesConfig) -> Result<()> {
    let client = TrackerClient::new(&config.tracker_url, &args.token)?;
    let transition = story::advance_story(&client, args.project_id, args.story_id).await?;

    println!(
        "{} Story {}: {} → {}",
        "✓".green().bold(),
        transition.story_id.to_string().dimmed(),
        transition.from.as_str().yellow(),
        transition.to.as_str().cyan()
    );
    Ok(())
}
