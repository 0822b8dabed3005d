//! The MCP transport transformer: abstract server description in,
//! agent-shaped config entry out.

use crate::catalog::{AgentDef, CommandShape, ConfigFormat, TransportKind, TransportTemplate};
use crate::error::{McpcastError, Result};
use crate::render::cli_command;
use crate::server::{McpServer, ServerKind};
use serde_json::{json, Map, Value};

/// The result of rendering one server for one agent and transport.
#[derive(Debug, Clone)]
pub struct RenderedServer {
    /// Nested map ready for JSON/TOML serialization, wrapper key included
    pub config: Value,

    /// CLI install command, when the agent defines one that applies
    pub cli_command: Option<String>,

    /// Format of the agent's MCP config file
    pub format: ConfigFormat,
}

/// Render `server` the way `agent` expects it for `transport`.
///
/// Pure and deterministic: the same inputs always produce the same output.
/// Fields the agent's template does not map are dropped, not invented.
pub fn render_server(
    agent: &AgentDef,
    transport: TransportKind,
    name: &str,
    server: &McpServer,
) -> Result<RenderedServer> {
    let slug = &agent.agent.slug;

    let mcp = agent.mcp.as_ref().ok_or_else(|| McpcastError::UnsupportedTransport {
        agent: slug.clone(),
        transport,
    })?;

    if !mcp.transports.contains(&transport) {
        return Err(McpcastError::UnsupportedTransport {
            agent: slug.clone(),
            transport,
        });
    }
    // Catalog validation guarantees a template for every listed transport.
    let template = mcp
        .transport
        .get(transport)
        .ok_or_else(|| McpcastError::UnsupportedTransport {
            agent: slug.clone(),
            transport,
        })?;

    server.validate()?;
    check_transport_agreement(transport, server)?;

    let mut entry = Map::new();

    if let Some(type_value) = &template.type_value {
        entry.insert("type".to_string(), json!(type_value));
    }

    for (abstract_name, agent_key) in &template.fields {
        match abstract_name.as_str() {
            "command" => {
                if let Some(command) = &server.command {
                    let value = match template.command_shape {
                        CommandShape::String => json!(command),
                        CommandShape::Array => {
                            let mut parts = vec![command.clone()];
                            parts.extend(server.args.iter().cloned());
                            json!(parts)
                        }
                    };
                    entry.insert(agent_key.clone(), value);
                }
            }
            "args" => {
                if !server.args.is_empty() {
                    entry.insert(agent_key.clone(), json!(server.args));
                }
            }
            "env" => {
                if !server.env.is_empty() {
                    entry.insert(agent_key.clone(), json!(server.env));
                }
            }
            "url" => {
                if let Some(url) = &server.url {
                    entry.insert(agent_key.clone(), json!(url));
                }
            }
            "headers" => {
                if !server.headers.is_empty() {
                    entry.insert(agent_key.clone(), json!(server.headers));
                }
            }
            "timeout" => {
                if let Some(timeout) = server.timeout {
                    entry.insert(agent_key.clone(), json!(timeout));
                }
            }
            // Unknown abstract names are rejected at catalog load time.
            _ => {}
        }
    }

    let mut per_server = Value::Object(entry);
    if let Some(settings_wrapper) = &mcp.settings_wrapper {
        let mut wrapped = Map::new();
        wrapped.insert(settings_wrapper.clone(), per_server);
        per_server = Value::Object(wrapped);
    }

    let mut servers = Map::new();
    servers.insert(name.to_string(), per_server);

    let mut config = Map::new();
    config.insert(mcp.wrapper_key.clone(), Value::Object(servers));

    Ok(RenderedServer {
        config: Value::Object(config),
        cli_command: cli_command::render(mcp, name, server),
        format: mcp.format,
    })
}

/// A local server can only be rendered for stdio, a remote one only for
/// http/sse. The missing field names the mismatch.
fn check_transport_agreement(transport: TransportKind, server: &McpServer) -> Result<()> {
    match (transport, server.kind) {
        (TransportKind::Stdio, ServerKind::Local) => Ok(()),
        (TransportKind::Http | TransportKind::Sse, ServerKind::Remote) => Ok(()),
        (TransportKind::Stdio, ServerKind::Remote) => Err(McpcastError::MissingRequiredField {
            field: "command",
            kind: "stdio",
        }),
        (_, ServerKind::Local) => Err(McpcastError::MissingRequiredField {
            field: "url",
            kind: transport.as_str(),
        }),
    }
}

/// Map an agent-shaped entry back to an abstract server using the same
/// field table. Inverse of the field mapping for templates that fully
/// cover the abstract fields.
pub fn recover_server(template: &TransportTemplate, entry: &Map<String, Value>) -> McpServer {
    let reverse = template.reverse_fields();
    let mut server = McpServer {
        kind: ServerKind::Remote,
        command: None,
        args: Vec::new(),
        env: Default::default(),
        url: None,
        headers: Default::default(),
        timeout: None,
    };

    for (agent_key, value) in entry {
        let Some(abstract_name) = reverse.get(agent_key) else {
            continue;
        };
        match abstract_name.as_str() {
            "command" => match (template.command_shape, value) {
                (CommandShape::String, Value::String(s)) => {
                    server.command = Some(s.clone());
                }
                (CommandShape::Array, Value::Array(parts)) => {
                    let mut parts = parts
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string));
                    server.command = parts.next();
                    server.args = parts.collect();
                }
                _ => {}
            },
            "args" => {
                if let Value::Array(args) = value {
                    server.args = args
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect();
                }
            }
            "env" | "headers" => {
                if let Value::Object(map) = value {
                    let target = if abstract_name == "env" {
                        &mut server.env
                    } else {
                        &mut server.headers
                    };
                    for (k, v) in map {
                        if let Some(s) = v.as_str() {
                            target.insert(k.clone(), s.to_string());
                        }
                    }
                }
            }
            "url" => {
                server.url = value.as_str().map(str::to_string);
            }
            "timeout" => {
                server.timeout = value.as_u64();
            }
            _ => {}
        }
    }

    server.kind = if server.command.is_some() {
        ServerKind::Local
    } else {
        ServerKind::Remote
    };
    server
}
