//! Agent catalog: loading and validating agent definitions.
//!
//! The built-in catalog is embedded at compile time, one TOML file per
//! agent. Extra definitions can be layered from user-supplied directories;
//! a definition with an existing slug replaces the built-in one.

use super::definition::{AgentDef, InstallSpec, TransportKind, ABSTRACT_FIELDS};
use crate::error::{McpcastError, Result};
use std::collections::HashMap;
use std::path::Path;

/// Built-in agent definitions, embedded at compile time.
const EMBEDDED_AGENTS: &[(&str, &str)] = &[
    ("aider", include_str!("../../agents/aider.toml")),
    ("claude-code", include_str!("../../agents/claude-code.toml")),
    ("cline", include_str!("../../agents/cline.toml")),
    ("codex", include_str!("../../agents/codex.toml")),
    ("cursor", include_str!("../../agents/cursor.toml")),
    ("gemini-cli", include_str!("../../agents/gemini-cli.toml")),
    ("opencode", include_str!("../../agents/opencode.toml")),
    ("roo-code", include_str!("../../agents/roo-code.toml")),
    ("windsurf", include_str!("../../agents/windsurf.toml")),
    ("zed", include_str!("../../agents/zed.toml")),
];

/// Immutable catalog of agent definitions.
pub struct AgentCatalog {
    agents: HashMap<String, AgentDef>,
}

impl AgentCatalog {
    /// Load the embedded catalog.
    pub fn load() -> Result<Self> {
        let mut agents = HashMap::new();

        for (file_slug, content) in EMBEDDED_AGENTS {
            let agent = parse_agent(file_slug, content)?;
            agents.insert(agent.agent.slug.clone(), agent);
        }

        Ok(Self { agents })
    }

    /// Load the embedded catalog, then layer agent TOML files from extra
    /// directories on top. A file defining an already-known slug replaces
    /// the earlier definition.
    pub fn load_with_dirs<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        let mut catalog = Self::load()?;

        for dir in dirs {
            let dir = dir.as_ref();
            if !dir.is_dir() {
                continue;
            }

            let mut paths: Vec<_> = std::fs::read_dir(dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "toml"))
                .collect();
            paths.sort();

            for path in paths {
                let content = std::fs::read_to_string(&path)?;
                let agent = parse_agent(&path.display().to_string(), &content)?;
                catalog.agents.insert(agent.agent.slug.clone(), agent);
            }
        }

        Ok(catalog)
    }

    /// Get an agent by slug.
    pub fn get(&self, slug: &str) -> Option<&AgentDef> {
        self.agents.get(slug)
    }

    /// Get an agent by slug, failing with `UnknownAgent` when absent.
    pub fn require(&self, slug: &str) -> Result<&AgentDef> {
        self.get(slug)
            .ok_or_else(|| McpcastError::UnknownAgent(slug.to_string()))
    }

    /// All agents, sorted by slug.
    pub fn list(&self) -> Vec<&AgentDef> {
        let mut agents: Vec<_> = self.agents.values().collect();
        agents.sort_by(|a, b| a.agent.slug.cmp(&b.agent.slug));
        agents
    }
}

fn parse_agent(source: &str, content: &str) -> Result<AgentDef> {
    let agent: AgentDef = toml::from_str(content).map_err(|e| {
        McpcastError::InvalidCatalog(format!("Failed to parse agent '{}': {}", source, e))
    })?;
    validate_agent(&agent)?;
    Ok(agent)
}

/// Validate that an agent definition is complete and internally consistent.
///
/// Malformed templates are rejected here, at load time, so the transformer
/// can assume every template it sees is well-formed.
fn validate_agent(agent: &AgentDef) -> Result<()> {
    let slug = &agent.agent.slug;

    if slug.is_empty() {
        return Err(McpcastError::InvalidCatalog(
            "Agent slug cannot be empty".to_string(),
        ));
    }
    if agent.agent.name.is_empty() {
        return Err(McpcastError::InvalidCatalog(format!(
            "Agent '{}' name cannot be empty",
            slug
        )));
    }

    if agent.agent.supports_mcp != agent.mcp.is_some() {
        return Err(McpcastError::InvalidCatalog(format!(
            "Agent '{}': supports_mcp flag disagrees with the [mcp] section",
            slug
        )));
    }

    let Some(mcp) = &agent.mcp else {
        return validate_configs(agent);
    };

    if mcp.transports.is_empty() {
        return Err(McpcastError::InvalidCatalog(format!(
            "Agent '{}' supports MCP but lists no transports",
            slug
        )));
    }
    if mcp.wrapper_key.is_empty() {
        return Err(McpcastError::InvalidCatalog(format!(
            "Agent '{}' has an empty wrapper_key",
            slug
        )));
    }

    // Every listed transport needs a template, and no template may exist
    // for an unlisted transport.
    for transport in &mcp.transports {
        if mcp.transport.get(*transport).is_none() {
            return Err(McpcastError::InvalidCatalog(format!(
                "Agent '{}' lists transport '{}' but has no template for it",
                slug, transport
            )));
        }
    }
    for (transport, _) in mcp.transport.iter() {
        if !mcp.transports.contains(&transport) {
            return Err(McpcastError::InvalidCatalog(format!(
                "Agent '{}' has a template for unlisted transport '{}'",
                slug, transport
            )));
        }
    }

    for (transport, template) in mcp.transport.iter() {
        for abstract_name in template.fields.keys() {
            if !ABSTRACT_FIELDS.contains(&abstract_name.as_str()) {
                return Err(McpcastError::InvalidCatalog(format!(
                    "Agent '{}' transport '{}' maps unknown field '{}'",
                    slug, transport, abstract_name
                )));
            }
        }

        let required = match transport {
            TransportKind::Stdio => "command",
            TransportKind::Http | TransportKind::Sse => "url",
        };
        if !template.fields.contains_key(required) {
            return Err(McpcastError::InvalidCatalog(format!(
                "Agent '{}' transport '{}' template must map '{}'",
                slug, transport, required
            )));
        }
    }

    if let Some(cli_template) = &mcp.cli_add_command {
        if cli_template.contains("{env_flags}") && mcp.env_flag.is_none() {
            return Err(McpcastError::InvalidCatalog(format!(
                "Agent '{}' uses {{env_flags}} but defines no env_flag template",
                slug
            )));
        }
    }
    if let Some(env_flag) = &mcp.env_flag {
        if !env_flag.contains("{key}") {
            return Err(McpcastError::InvalidCatalog(format!(
                "Agent '{}' env_flag template must contain {{key}}",
                slug
            )));
        }
    }

    validate_configs(agent)
}

fn validate_configs(agent: &AgentDef) -> Result<()> {
    let slug = &agent.agent.slug;

    for (config_type, template) in agent.configs.iter() {
        match &template.install {
            Some(InstallSpec::FilePath) | None => {
                if template.global_path.is_none() && template.project_path.is_none() {
                    return Err(McpcastError::InvalidCatalog(format!(
                        "Agent '{}' config '{}' is file-based but has no path",
                        slug, config_type
                    )));
                }
            }
            Some(InstallSpec::CliCommand { command }) => {
                if command.is_empty() {
                    return Err(McpcastError::InvalidCatalog(format!(
                        "Agent '{}' config '{}' has an empty install command",
                        slug, config_type
                    )));
                }
            }
            Some(InstallSpec::Custom { instructions }) => {
                if instructions.is_empty() {
                    return Err(McpcastError::InvalidCatalog(format!(
                        "Agent '{}' config '{}' has empty install instructions",
                        slug, config_type
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog() {
        let catalog = AgentCatalog::load().unwrap();
        assert!(catalog.get("claude-code").is_some());
        assert!(catalog.get("opencode").is_some());
        assert!(catalog.get("nonexistent").is_none());
    }

    #[test]
    fn test_require_unknown_agent() {
        let catalog = AgentCatalog::load().unwrap();
        let err = catalog.require("nonexistent").unwrap_err();
        assert!(matches!(err, McpcastError::UnknownAgent(_)));
    }

    #[test]
    fn test_list_sorted() {
        let catalog = AgentCatalog::load().unwrap();
        let slugs: Vec<_> = catalog.list().iter().map(|a| a.agent.slug.clone()).collect();
        let mut sorted = slugs.clone();
        sorted.sort();
        assert_eq!(slugs, sorted);
        assert!(slugs.len() >= 10);
    }

    #[test]
    fn test_reject_missing_transport_template() {
        let content = r#"
            [agent]
            slug = "broken"
            name = "Broken"
            supports_mcp = true

            [mcp]
            transports = ["stdio", "sse"]
            wrapper_key = "mcpServers"
            format = "json"

            [mcp.transport.stdio.fields]
            command = "command"
        "#;
        let err = parse_agent("broken", content).unwrap_err();
        assert!(matches!(err, McpcastError::InvalidCatalog(_)));
    }

    #[test]
    fn test_reject_unknown_abstract_field() {
        let content = r#"
            [agent]
            slug = "broken"
            name = "Broken"
            supports_mcp = true

            [mcp]
            transports = ["stdio"]
            wrapper_key = "mcpServers"
            format = "json"

            [mcp.transport.stdio.fields]
            command = "command"
            banana = "banana"
        "#;
        let err = parse_agent("broken", content).unwrap_err();
        assert!(matches!(err, McpcastError::InvalidCatalog(_)));
    }

    #[test]
    fn test_reject_supports_mcp_mismatch() {
        let content = r#"
            [agent]
            slug = "broken"
            name = "Broken"
            supports_mcp = true
        "#;
        let err = parse_agent("broken", content).unwrap_err();
        assert!(matches!(err, McpcastError::InvalidCatalog(_)));
    }

    #[test]
    fn test_reject_env_flags_without_template() {
        let content = r#"
            [agent]
            slug = "broken"
            name = "Broken"
            supports_mcp = true

            [mcp]
            transports = ["stdio"]
            wrapper_key = "mcpServers"
            format = "json"
            cli_add_command = "broken mcp add {name} {env_flags} -- {command}"

            [mcp.transport.stdio.fields]
            command = "command"
        "#;
        let err = parse_agent("broken", content).unwrap_err();
        assert!(matches!(err, McpcastError::InvalidCatalog(_)));
    }

    #[test]
    fn test_load_with_dirs_overrides_by_slug() {
        let dir = tempfile::tempdir().unwrap();
        let custom = r#"
            [agent]
            slug = "zed"
            name = "Zed (custom)"

            [configs.rules]
            project_path = ".rules"
            format = "markdown"
        "#;
        std::fs::write(dir.path().join("zed.toml"), custom).unwrap();

        let catalog = AgentCatalog::load_with_dirs(&[dir.path()]).unwrap();
        let zed = catalog.get("zed").unwrap();
        assert_eq!(zed.agent.name, "Zed (custom)");
        assert!(!zed.agent.supports_mcp);
    }
}
