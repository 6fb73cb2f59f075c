use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use proxlock_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "proxlock-landing")]
#[command(author, version, about = "ProxLock landing page for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Page to open on startup
        #[arg(long, value_enum, default_value_t = StartPage::Home)]
        page: StartPage,
    },
    /// Fetch and print the current plan catalog
    Plans,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StartPage {
    Home,
    Pricing,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = Arc::new(AppConfig::load()?);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { page }) => commands::run::run(config, page).await,
        None => commands::run::run(config, StartPage::Home).await,
        Some(Commands::Plans) => commands::plans::run(&config).await,
    }
}
