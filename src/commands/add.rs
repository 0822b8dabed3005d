use crate::catalog::{AgentCatalog, ConfigFormat, ConfigType};
use crate::cli::{AddCmd, Scope};
use crate::commands::helpers;
use crate::config::Config;
use crate::error::{McpcastError, Result};
use crate::render;
use crate::resolve;
use crate::utils::path::expand_tilde;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Merge one rendered server entry into an agent's MCP config file,
/// preserving every other entry and any unrelated settings in the file.
pub fn execute(catalog: &AgentCatalog, config: &Config, cmd: &AddCmd) -> Result<()> {
    let slug =
        helpers::resolve_agent_slug(cmd.agent.as_deref(), config.defaults.agent.as_deref())?;
    let agent = catalog.require(&slug)?;

    let server = helpers::server_from_flags(&cmd.server)?;
    let transport = cmd
        .server
        .transport
        .unwrap_or_else(|| server.default_transport());

    let name = cmd.server.name.clone();
    let rendered = render::render_server(agent, transport, &name, &server)?;

    if !matches!(rendered.format, ConfigFormat::Json | ConfigFormat::Jsonc) {
        return Err(McpcastError::InvalidConfig(format!(
            "'add' only supports JSON config files; {} uses {}",
            slug, rendered.format
        )));
    }

    // The transformer succeeded, so the agent has an [mcp] section.
    let wrapper_key = agent
        .mcp
        .as_ref()
        .map(|m| m.wrapper_key.clone())
        .unwrap_or_default();

    let path = target_path(catalog, &slug, cmd)?;

    let mut root: Value = if path.exists() {
        serde_json::from_str(&std::fs::read_to_string(&path)?)?
    } else {
        json!({})
    };
    let Some(root_map) = root.as_object_mut() else {
        return Err(McpcastError::InvalidConfig(format!(
            "{} is not a JSON object",
            path.display()
        )));
    };

    let entry = rendered.config[wrapper_key.as_str()][name.as_str()].clone();

    let servers = root_map
        .entry(wrapper_key.clone())
        .or_insert_with(|| json!({}));
    let Some(servers_map) = servers.as_object_mut() else {
        return Err(McpcastError::InvalidConfig(format!(
            "'{}' in {} is not a JSON object",
            wrapper_key,
            path.display()
        )));
    };

    let existed = servers_map.insert(name.clone(), entry).is_some();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut text = serde_json::to_string_pretty(&root)?;
    text.push('\n');
    std::fs::write(&path, text)?;

    let verb = if existed { "Updated" } else { "Added" };
    println!("{} '{}' in {}", verb, name, path.display());

    Ok(())
}

fn target_path(catalog: &AgentCatalog, slug: &str, cmd: &AddCmd) -> Result<PathBuf> {
    if let Some(file) = &cmd.file {
        return Ok(file.clone());
    }

    let resolved = resolve::resolve(catalog, slug, ConfigType::McpServers)?;
    let (scope_name, raw) = match cmd.scope {
        Scope::Project => ("project", resolved.project_path),
        Scope::Global => ("global", resolved.global_path),
    };
    let raw = raw.ok_or_else(|| {
        McpcastError::InvalidConfig(format!(
            "Agent '{}' has no {} MCP config path; use --file",
            slug, scope_name
        ))
    })?;

    expand_tilde(&raw).ok_or_else(|| {
        McpcastError::InvalidConfig(format!("Cannot expand path '{}' (HOME not set?)", raw))
    })
}
