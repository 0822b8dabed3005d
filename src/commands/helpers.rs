//! Shared helpers for command implementations.

use crate::cli::ServerFlags;
use crate::error::{McpcastError, Result};
use crate::server::{McpServer, ServerKind};
use std::collections::BTreeMap;

/// Parse a `KEY=VALUE` flag value.
pub fn parse_key_value(spec: &str) -> Result<(String, String)> {
    match spec.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(McpcastError::InvalidConfig(format!(
            "Expected KEY=VALUE, got '{}'",
            spec
        ))),
    }
}

/// Build an abstract server description from CLI flags.
///
/// The server kind is inferred: `--url` means remote, `--command` means
/// local. Structural invariants are checked by the transformer.
pub fn server_from_flags(flags: &ServerFlags) -> Result<McpServer> {
    let kind = match (&flags.command, &flags.url) {
        (_, Some(_)) => ServerKind::Remote,
        (Some(_), None) => ServerKind::Local,
        (None, None) => {
            return Err(McpcastError::InvalidConfig(
                "Either --command or --url is required".to_string(),
            ))
        }
    };

    let mut env = BTreeMap::new();
    for spec in &flags.env {
        let (key, value) = parse_key_value(spec)?;
        env.insert(key, value);
    }

    let mut headers = BTreeMap::new();
    for spec in &flags.headers {
        let (key, value) = parse_key_value(spec)?;
        headers.insert(key, value);
    }

    Ok(McpServer {
        kind,
        command: flags.command.clone(),
        args: flags.args.clone(),
        env,
        url: flags.url.clone(),
        headers,
        timeout: flags.timeout,
    })
}

/// Resolve the agent slug from the CLI argument or configured default.
pub fn resolve_agent_slug(arg: Option<&str>, default: Option<&str>) -> Result<String> {
    arg.or(default)
        .map(str::to_string)
        .ok_or_else(|| {
            McpcastError::InvalidConfig(
                "No agent given and no defaults.agent configured".to_string(),
            )
        })
}
