//! Config-type template resolver: where does an agent keep a given kind
//! of artifact, and in what format.

use crate::catalog::{AgentCatalog, ConfigFormat, ConfigType};
use crate::error::{McpcastError, Result};

/// Filesystem locations and format an agent expects for one config type.
///
/// Any field may be absent; absence means the agent has no convention for
/// it, which is valid. An agent that does not support the config type at
/// all yields `UnsupportedConfigType` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub global_path: Option<String>,
    pub project_path: Option<String>,
    pub format: Option<ConfigFormat>,
    pub file_extension: Option<String>,
    pub supports_subdirectories: bool,
}

/// Look up the path/format template for `(agent_slug, config_type)`.
///
/// Pure lookup against the loaded catalog; no side effects.
pub fn resolve(
    catalog: &AgentCatalog,
    agent_slug: &str,
    config_type: ConfigType,
) -> Result<ResolvedConfig> {
    let agent = catalog.require(agent_slug)?;

    if let Some(template) = agent.configs.get(config_type) {
        return Ok(ResolvedConfig {
            global_path: template.global_path.clone(),
            project_path: template.project_path.clone(),
            format: template.format,
            file_extension: template.file_extension.clone(),
            supports_subdirectories: template.supports_subdirectories,
        });
    }

    // MCP server locations live in the [mcp] section rather than [configs]
    if config_type == ConfigType::McpServers {
        if let Some(mcp) = &agent.mcp {
            return Ok(ResolvedConfig {
                global_path: mcp.paths.global.clone(),
                project_path: mcp.paths.project.clone(),
                format: Some(mcp.format),
                file_extension: None,
                supports_subdirectories: false,
            });
        }
    }

    Err(McpcastError::UnsupportedConfigType {
        agent: agent_slug.to_string(),
        config_type,
    })
}
