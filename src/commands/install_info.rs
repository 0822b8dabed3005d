use crate::catalog::{AgentCatalog, ConfigType};
use crate::error::Result;
use crate::install::{self, InstallDescriptor};

pub fn execute(catalog: &AgentCatalog, agent: &str, config_type: ConfigType) -> Result<()> {
    let descriptor = install::describe(catalog, agent, config_type)?;

    println!("{} / {}:", agent, config_type);
    match descriptor {
        InstallDescriptor::FilePath {
            global_path,
            project_path,
        } => {
            println!("  Mode: file drop");
            if let Some(path) = global_path {
                println!("  Global path:  {}", path);
            }
            if let Some(path) = project_path {
                println!("  Project path: {}", path);
            }
        }
        InstallDescriptor::CliCommand { command } => {
            println!("  Mode: CLI command");
            println!("  Command: {}", command);
        }
        InstallDescriptor::Custom { instructions } => {
            println!("  Mode: manual");
            println!("  {}", instructions);
        }
    }

    Ok(())
}
