use crate::catalog::{AgentCatalog, ConfigType};
use crate::error::Result;
use crate::resolve;

pub fn execute(catalog: &AgentCatalog, agent: &str, config_type: ConfigType) -> Result<()> {
    let resolved = resolve::resolve(catalog, agent, config_type)?;

    println!("{} / {}:", agent, config_type);
    println!(
        "  Global path:  {}",
        resolved.global_path.as_deref().unwrap_or("(none)")
    );
    println!(
        "  Project path: {}",
        resolved.project_path.as_deref().unwrap_or("(none)")
    );
    if let Some(format) = resolved.format {
        println!("  Format:       {}", format);
    }
    if let Some(ext) = &resolved.file_extension {
        println!("  Extension:    {}", ext);
    }
    if resolved.supports_subdirectories {
        println!("  Subdirectories supported");
    }

    Ok(())
}
