//! Rendering MCP server descriptions into agent-specific text.

pub mod cli_command;
pub mod transform;

pub use transform::{recover_server, render_server, RenderedServer};

use crate::catalog::ConfigFormat;
use crate::error::{McpcastError, Result};
use serde_json::Value;

/// Serialize a rendered config map as copyable text in the given format.
pub fn to_text(value: &Value, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Json | ConfigFormat::Jsonc => Ok(serde_json::to_string_pretty(value)?),
        ConfigFormat::Toml => Ok(toml::to_string_pretty(value)?),
        ConfigFormat::Yaml | ConfigFormat::Markdown => Err(McpcastError::InvalidConfig(format!(
            "Cannot serialize a server entry as {}",
            format
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_text_json() {
        let value = json!({ "mcpServers": { "test": { "command": "npx" } } });
        let text = to_text(&value, ConfigFormat::Json).unwrap();
        assert!(text.contains("\"mcpServers\""));
    }

    #[test]
    fn test_to_text_toml() {
        let value = json!({ "mcp_servers": { "test": { "command": "npx" } } });
        let text = to_text(&value, ConfigFormat::Toml).unwrap();
        assert!(text.contains("[mcp_servers.test]"));
        assert!(text.contains("command = \"npx\""));
    }

    #[test]
    fn test_to_text_rejects_markdown() {
        let value = json!({});
        assert!(to_text(&value, ConfigFormat::Markdown).is_err());
    }
}
