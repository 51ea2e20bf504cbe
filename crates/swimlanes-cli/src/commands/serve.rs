//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use swimlanes_core::config::SwimlanesConfig;
use swimlanes_tracker::HttpConnector;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on (defaults to the configured port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to (defaults to the configured host)
    #[arg(long)]
    pub host: Option<String>,

    /// Also write logs to this file
    #[arg(long)]
    pub log: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, mut config: SwimlanesConfig) -> Result<()> {
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    println!();
    println!("  {} {}", "Swimlanes".cyan().bold(), "Dashboard".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Dashboard".green(),
        config.host,
        config.port
    );
    println!("  {}    {}", "Tracker".green(), config.tracker_url);
    if config.token.is_none() {
        println!(
            "  {}",
            "No default token configured; open the dashboard with ?token=<token>".yellow()
        );
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let connector = Arc::new(HttpConnector::new(&config.tracker_url));
    swimlanes_web::run_server(config, connector).await?;

    Ok(())
}
