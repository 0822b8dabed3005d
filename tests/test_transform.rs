//! End-to-end transform scenarios across the built-in catalog.

use mcpcast::catalog::{AgentCatalog, TransportKind};
use mcpcast::error::McpcastError;
use mcpcast::render::{render_server, to_text};
use mcpcast::server::McpServer;
use serde_json::json;

fn sample_local() -> McpServer {
    let mut server = McpServer::local("npx");
    server.args = vec!["-y".to_string(), "mcp-server".to_string()];
    server.env.insert("API_KEY".to_string(), "value".to_string());
    server
}

#[test]
fn test_scenario_opencode_local() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("opencode").unwrap();

    let rendered = render_server(agent, TransportKind::Stdio, "docs", &sample_local()).unwrap();

    assert_eq!(
        rendered.config,
        json!({
            "mcp": {
                "docs": {
                    "type": "local",
                    "command": ["npx", "-y", "mcp-server"],
                    "environment": { "API_KEY": "value" }
                }
            }
        })
    );
}

#[test]
fn test_scenario_claude_code_stdio_with_cli() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("claude-code").unwrap();

    let rendered = render_server(agent, TransportKind::Stdio, "docs", &sample_local()).unwrap();

    assert_eq!(
        rendered.config,
        json!({
            "mcpServers": {
                "docs": {
                    "type": "stdio",
                    "command": "npx",
                    "args": ["-y", "mcp-server"],
                    "env": { "API_KEY": "value" }
                }
            }
        })
    );
    assert_eq!(
        rendered.cli_command.as_deref(),
        Some("claude mcp add docs -e API_KEY=value -- npx -y mcp-server")
    );
}

#[test]
fn test_scenario_zed_settings_wrapper() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("zed").unwrap();

    let mut server = McpServer::local("npx");
    server.args = vec!["-y".to_string(), "mcp-server".to_string()];

    let rendered = render_server(agent, TransportKind::Stdio, "docs", &server).unwrap();

    assert_eq!(
        rendered.config,
        json!({
            "context_servers": {
                "docs": {
                    "settings": {
                        "command": "npx",
                        "args": ["-y", "mcp-server"]
                    }
                }
            }
        })
    );
}

#[test]
fn test_scenario_codex_renders_as_toml() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("codex").unwrap();

    let mut server = McpServer::local("npx");
    server.args = vec!["-y".to_string(), "mcp-server".to_string()];

    let rendered = render_server(agent, TransportKind::Stdio, "docs", &server).unwrap();
    let text = to_text(&rendered.config, rendered.format).unwrap();

    assert!(text.contains("[mcp_servers.docs]"));
    assert!(text.contains("command = \"npx\""));
}

#[test]
fn test_scenario_windsurf_sse_renames_url() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("windsurf").unwrap();

    let server = McpServer::remote("https://example.com/sse");
    let rendered = render_server(agent, TransportKind::Sse, "docs", &server).unwrap();

    assert_eq!(
        rendered.config,
        json!({
            "mcpServers": {
                "docs": { "serverUrl": "https://example.com/sse" }
            }
        })
    );
}

#[test]
fn test_scenario_gemini_http_vs_sse_keys() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("gemini-cli").unwrap();
    let server = McpServer::remote("https://example.com/mcp");

    let http = render_server(agent, TransportKind::Http, "docs", &server).unwrap();
    assert_eq!(
        http.config["mcpServers"]["docs"]["httpUrl"],
        json!("https://example.com/mcp")
    );

    let sse = render_server(agent, TransportKind::Sse, "docs", &server).unwrap();
    assert_eq!(
        sse.config["mcpServers"]["docs"]["url"],
        json!("https://example.com/mcp")
    );
}

#[test]
fn test_headers_survive_where_mapped() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("claude-code").unwrap();

    let mut server = McpServer::remote("https://example.com/mcp");
    server
        .headers
        .insert("Authorization".to_string(), "Bearer abc".to_string());

    let rendered = render_server(agent, TransportKind::Http, "docs", &server).unwrap();
    assert_eq!(
        rendered.config["mcpServers"]["docs"]["headers"]["Authorization"],
        json!("Bearer abc")
    );
}

#[test]
fn test_boundary_missing_command() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("claude-code").unwrap();

    let mut server = sample_local();
    server.command = None;

    let err = render_server(agent, TransportKind::Stdio, "docs", &server).unwrap_err();
    assert!(matches!(
        err,
        McpcastError::MissingRequiredField {
            field: "command",
            ..
        }
    ));
}

#[test]
fn test_boundary_sse_for_stdio_only_agent() {
    let catalog = AgentCatalog::load().unwrap();
    let zed = catalog.get("zed").unwrap();

    let err = render_server(
        zed,
        TransportKind::Sse,
        "docs",
        &McpServer::remote("https://example.com/sse"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        McpcastError::UnsupportedTransport {
            transport: TransportKind::Sse,
            ..
        }
    ));
}

#[test]
fn test_boundary_ambiguous_server() {
    let catalog = AgentCatalog::load().unwrap();
    let agent = catalog.get("cursor").unwrap();

    let mut server = McpServer::local("npx");
    server.url = Some("https://example.com/mcp".to_string());

    let err = render_server(agent, TransportKind::Stdio, "docs", &server).unwrap_err();
    assert!(matches!(err, McpcastError::AmbiguousServer));
}
