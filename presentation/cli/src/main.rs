use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod commands;
mod config;
mod error_mapper;
mod render;
mod setup;
mod terminal;

use cli::Cli;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Foodee CLI entry point
///
/// - config/: backend and session file settings from the environment
/// - setup/: dependency injection
/// - terminal/: dialogs and notifications on stdin/stdout
/// - commands/: one handler per subcommand
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, quiet by default
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run the command
    if !commands::run(cli.command, cli.yes, &container).await? {
        std::process::exit(1);
    }

    Ok(())
}
