//! CLI install command templating.
//!
//! Agents that ship a `mcp add`-style subcommand declare a template like
//! `claude mcp add {name} {env_flags} -- {command}`. Tokens with no value
//! for the given server make the template inapplicable, which renders as
//! `None` rather than a broken command line.

use crate::catalog::McpSection;
use crate::server::McpServer;

/// Render the agent's CLI install command for `server`, if one applies.
///
/// The template is substituted token by token: a token that expands to
/// nothing (empty env, no `env_flag`) is dropped rather than leaving a
/// double space, and substituted values are never re-split, so quoted
/// values keep their inner whitespace.
pub fn render(mcp: &McpSection, name: &str, server: &McpServer) -> Option<String> {
    let template = mcp.cli_add_command.as_deref()?;

    if template.contains("{command}") && server.command.is_none() {
        return None;
    }
    if template.contains("{url}") && server.url.is_none() {
        return None;
    }

    let mut parts: Vec<String> = Vec::new();
    for token in template.split_whitespace() {
        match token {
            "{name}" => parts.push(name.to_string()),
            "{url}" => {
                if let Some(url) = &server.url {
                    parts.push(url.clone());
                }
            }
            "{command}" => {
                if let Some(command) = &server.command {
                    parts.push(shell_quote(command));
                    parts.extend(server.args.iter().map(|arg| shell_quote(arg)));
                }
            }
            "{env_flags}" => {
                // One flag per env entry, in key order
                if let Some(flag) = mcp.env_flag.as_deref() {
                    for (key, value) in &server.env {
                        parts.push(
                            flag.replace("{key}", key)
                                .replace("{value}", &shell_quote(value)),
                        );
                    }
                }
            }
            literal => parts.push(literal.to_string()),
        }
    }

    Some(parts.join(" "))
}

/// Single-quote a value when the shell would otherwise split or expand it.
fn shell_quote(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\' | '$' | '`'));

    if needs_quoting {
        format!("'{}'", value.replace('\'', r"'\''"))
    } else {
        value.to_string()
    }
}
