use crate::catalog::AgentCatalog;
use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub fn execute(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Validate => validate(),
        ConfigCommands::Show => show(),
    }
}

fn validate() -> Result<()> {
    let project_config = Path::new(".mcpcast.toml");
    let global_config = std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".mcpcast.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.mcpcast.toml"));

    println!("Validating configuration files...\n");

    if global_config.exists() {
        println!("  Global config: {}", global_config.display());
    } else {
        println!(
            "  Global config: {} - not found (optional)",
            global_config.display()
        );
    }

    if project_config.exists() {
        println!("  Project config: {}", project_config.display());
    } else {
        println!(
            "  Project config: {} - not found (optional)",
            project_config.display()
        );
    }

    println!("\nLoading and validating configuration...");
    let config = match Config::load(Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            return Err(e);
        }
    };

    // Custom agent definitions are validated the same way embedded ones are
    match AgentCatalog::load_with_dirs(&config.catalog_dirs()) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Agent catalog is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load(Path::new("."))?;

    println!("Effective Configuration:");
    println!("(CLI > Project config > Global config > Defaults)\n");

    println!("Defaults:");
    println!(
        "  agent: {}",
        config.defaults.agent.as_deref().unwrap_or("(none)")
    );
    match config.defaults.format {
        Some(format) => println!("  format: {}", format),
        None => println!("  format: (agent's native format)"),
    }

    if !config.catalog.dirs.is_empty() {
        println!("\nCatalog directories:");
        for dir in &config.catalog.dirs {
            println!("  - {}", dir);
        }
    }

    Ok(())
}
