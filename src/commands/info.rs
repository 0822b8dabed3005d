use crate::catalog::{AgentCatalog, ConfigType};
use crate::error::Result;
use crate::install::{self, InstallDescriptor};

pub fn execute(catalog: &AgentCatalog, slug: &str) -> Result<()> {
    let agent = catalog.require(slug)?;

    println!("{} ({})", agent.agent.name, agent.agent.slug);
    if !agent.agent.description.is_empty() {
        println!("  {}", agent.agent.description);
    }

    match &agent.mcp {
        Some(mcp) => {
            println!("\nMCP:");
            let transports: Vec<_> = mcp.transports.iter().map(|t| t.as_str()).collect();
            println!("  Transports: {}", transports.join(", "));
            println!("  Wrapper key: {}", mcp.wrapper_key);
            println!("  Format: {}", mcp.format);
            if let Some(wrapper) = &mcp.settings_wrapper {
                println!("  Settings wrapper: {}", wrapper);
            }
            if let Some(path) = &mcp.paths.global {
                println!("  Global config: {}", path);
            }
            if let Some(path) = &mcp.paths.project {
                println!("  Project config: {}", path);
            }
            if let Some(template) = &mcp.cli_add_command {
                println!("  CLI add: {}", template);
            }
        }
        None => println!("\nMCP: not supported"),
    }

    println!("\nConfig types:");
    for config_type in ConfigType::ALL {
        let Ok(descriptor) = install::describe(catalog, slug, *config_type) else {
            continue;
        };
        match descriptor {
            InstallDescriptor::FilePath {
                global_path,
                project_path,
            } => {
                let path = project_path
                    .or(global_path)
                    .unwrap_or_else(|| "-".to_string());
                println!("  {:<16} {}", config_type.to_string(), path);
            }
            InstallDescriptor::CliCommand { command } => {
                println!("  {:<16} (cli) {}", config_type.to_string(), command);
            }
            InstallDescriptor::Custom { .. } => {
                println!("  {:<16} (manual install)", config_type.to_string());
            }
        }
    }

    Ok(())
}
