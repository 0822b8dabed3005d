use crate::catalog::AgentCatalog;
use crate::cli::RenderCmd;
use crate::commands::helpers;
use crate::config::Config;
use crate::error::{McpcastError, Result};
use crate::render;

pub fn execute(catalog: &AgentCatalog, config: &Config, cmd: &RenderCmd) -> Result<()> {
    let slug =
        helpers::resolve_agent_slug(cmd.agent.as_deref(), config.defaults.agent.as_deref())?;
    let agent = catalog.require(&slug)?;

    let server = helpers::server_from_flags(&cmd.server)?;
    let transport = cmd
        .server
        .transport
        .unwrap_or_else(|| server.default_transport());

    let rendered = render::render_server(agent, transport, &cmd.server.name, &server)?;

    if cmd.cli {
        return match rendered.cli_command {
            Some(command) => {
                println!("{}", command);
                Ok(())
            }
            None => Err(McpcastError::InvalidConfig(format!(
                "Agent '{}' defines no CLI install command",
                slug
            ))),
        };
    }

    let format = cmd
        .format
        .or(config.defaults.format)
        .unwrap_or(rendered.format);
    println!("{}", render::to_text(&rendered.config, format)?);

    if config.verbose {
        if let Some(command) = &rendered.cli_command {
            println!("\n# or via the agent's CLI:\n# {}", command);
        }
    }

    Ok(())
}
