//! Install descriptors: how an artifact gets onto disk for an agent.

use crate::catalog::{AgentCatalog, ConfigType, InstallSpec};
use crate::error::{McpcastError, Result};

/// How one (agent, config type) pair is installed.
///
/// Exactly one mode applies; the enum makes "more than one" and "the
/// consumer guesses" unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum InstallDescriptor {
    /// Drop files at the agent's global and/or project path
    FilePath {
        global_path: Option<String>,
        project_path: Option<String>,
    },

    /// Run a templated shell command
    CliCommand { command: String },

    /// Follow free-text instructions
    Custom { instructions: String },
}

/// Describe how `config_type` is installed for `agent_slug`.
pub fn describe(
    catalog: &AgentCatalog,
    agent_slug: &str,
    config_type: ConfigType,
) -> Result<InstallDescriptor> {
    let agent = catalog.require(agent_slug)?;

    if let Some(template) = agent.configs.get(config_type) {
        let descriptor = match &template.install {
            None | Some(InstallSpec::FilePath) => InstallDescriptor::FilePath {
                global_path: template.global_path.clone(),
                project_path: template.project_path.clone(),
            },
            Some(InstallSpec::CliCommand { command }) => InstallDescriptor::CliCommand {
                command: command.clone(),
            },
            Some(InstallSpec::Custom { instructions }) => InstallDescriptor::Custom {
                instructions: instructions.clone(),
            },
        };
        return Ok(descriptor);
    }

    if config_type == ConfigType::McpServers {
        if let Some(mcp) = &agent.mcp {
            return Ok(InstallDescriptor::FilePath {
                global_path: mcp.paths.global.clone(),
                project_path: mcp.paths.project.clone(),
            });
        }
    }

    Err(McpcastError::UnsupportedConfigType {
        agent: agent_slug.to_string(),
        config_type,
    })
}
