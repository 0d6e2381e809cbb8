use anyhow::{Context, Result};
use clap::Parser;

use bookgraph::cli::handlers::{self, CommandContext};
use bookgraph::cli::{Cli, Commands};
use bookgraph::config::AppConfig;
use bookgraph::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose, cli.global.log_file.clone());

    let config = AppConfig::load(cli.global.config.as_deref())
        .context("Failed to load bookgraph configuration")?
        .with_overrides(cli.overrides());

    tokio::runtime::Runtime::new()?.block_on(run(cli.command, config))
}

async fn run(command: Commands, config: AppConfig) -> Result<()> {
    let ctx = CommandContext::new(config).await?;

    match command {
        Commands::Serve { .. } => handlers::handle_serve(ctx).await,
        Commands::Query { query, variables } => {
            handlers::handle_query(ctx, query, variables).await
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(ctx, mutation, variables).await,
    }
}
