#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use mcpcast::catalog::AgentCatalog;
use mcpcast::cli::{Cli, Commands};
use mcpcast::commands;
use mcpcast::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Version needs neither config nor catalog
    if matches!(cli.command, Commands::Version) {
        commands::version::execute()?;
        return Ok(());
    }

    let mut config = Config::load(Path::new("."))?;
    config.verbose = cli.verbose;

    if matches!(cli.command, Commands::Config { .. }) {
        if let Commands::Config { command } = &cli.command {
            commands::config::execute(command)?;
        }
        return Ok(());
    }

    let catalog = AgentCatalog::load_with_dirs(&config.catalog_dirs())?;

    match &cli.command {
        Commands::List { mcp } => {
            commands::list::execute(&catalog, *mcp)?;
        }
        Commands::Info { agent } => {
            commands::info::execute(&catalog, agent)?;
        }
        Commands::Render(cmd) => {
            commands::render::execute(&catalog, &config, cmd)?;
        }
        Commands::Paths { agent, config_type } => {
            commands::paths::execute(&catalog, agent, *config_type)?;
        }
        Commands::InstallInfo { agent, config_type } => {
            commands::install_info::execute(&catalog, agent, *config_type)?;
        }
        Commands::Add(cmd) => {
            commands::add::execute(&catalog, &config, cmd)?;
        }
        Commands::Config { .. } | Commands::Version => unreachable!(),
    }

    Ok(())
}
