use mcpcast::catalog::{
    AgentCatalog, CommandShape, ConfigFormat, ConfigType, InstallSpec, TransportKind,
};

#[test]
fn test_catalog_loads() {
    let _catalog = AgentCatalog::load().expect("Failed to load agent catalog");
    // If we got here, all agent TOML files parsed and validated
}

#[test]
fn test_expected_agents_present() {
    let catalog = AgentCatalog::load().expect("Failed to load catalog");
    for slug in [
        "aider",
        "claude-code",
        "cline",
        "codex",
        "cursor",
        "gemini-cli",
        "opencode",
        "roo-code",
        "windsurf",
        "zed",
    ] {
        assert!(catalog.get(slug).is_some(), "missing agent: {}", slug);
    }
}

#[test]
fn test_claude_code_structure() {
    let catalog = AgentCatalog::load().expect("Failed to load catalog");
    let claude = catalog.get("claude-code").unwrap();

    assert_eq!(claude.agent.name, "Claude Code");
    assert!(claude.agent.supports_mcp);

    let mcp = claude.mcp.as_ref().unwrap();
    assert_eq!(mcp.wrapper_key, "mcpServers");
    assert_eq!(mcp.format, ConfigFormat::Json);
    assert_eq!(
        mcp.transports,
        vec![TransportKind::Stdio, TransportKind::Http, TransportKind::Sse]
    );
    assert_eq!(mcp.paths.project.as_deref(), Some(".mcp.json"));

    let stdio = mcp.transport.get(TransportKind::Stdio).unwrap();
    assert_eq!(stdio.type_value.as_deref(), Some("stdio"));
    assert_eq!(stdio.command_shape, CommandShape::String);
    assert_eq!(stdio.fields.get("env").unwrap(), "env");

    // Rules live in CLAUDE.md
    let rules = claude.configs.get(ConfigType::Rules).unwrap();
    assert_eq!(rules.project_path.as_deref(), Some("CLAUDE.md"));

    // Plugins install through the CLI
    let plugins = claude.configs.get(ConfigType::Plugins).unwrap();
    assert!(matches!(
        plugins.install,
        Some(InstallSpec::CliCommand { .. })
    ));
}

#[test]
fn test_opencode_structure() {
    let catalog = AgentCatalog::load().expect("Failed to load catalog");
    let opencode = catalog.get("opencode").unwrap();

    let mcp = opencode.mcp.as_ref().unwrap();
    assert_eq!(mcp.wrapper_key, "mcp");

    let stdio = mcp.transport.get(TransportKind::Stdio).unwrap();
    assert_eq!(stdio.type_value.as_deref(), Some("local"));
    assert_eq!(stdio.command_shape, CommandShape::Array);
    assert_eq!(stdio.fields.get("env").unwrap(), "environment");
    // args merge into the command array, so no separate mapping
    assert!(stdio.fields.get("args").is_none());
}

#[test]
fn test_zed_structure() {
    let catalog = AgentCatalog::load().expect("Failed to load catalog");
    let zed = catalog.get("zed").unwrap();

    let mcp = zed.mcp.as_ref().unwrap();
    assert_eq!(mcp.wrapper_key, "context_servers");
    assert_eq!(mcp.settings_wrapper.as_deref(), Some("settings"));
    assert_eq!(mcp.transports, vec![TransportKind::Stdio]);
}

#[test]
fn test_codex_uses_toml() {
    let catalog = AgentCatalog::load().expect("Failed to load catalog");
    let codex = catalog.get("codex").unwrap();

    let mcp = codex.mcp.as_ref().unwrap();
    assert_eq!(mcp.format, ConfigFormat::Toml);
    assert_eq!(mcp.wrapper_key, "mcp_servers");
}

#[test]
fn test_aider_has_no_mcp() {
    let catalog = AgentCatalog::load().expect("Failed to load catalog");
    let aider = catalog.get("aider").unwrap();

    assert!(!aider.agent.supports_mcp);
    assert!(aider.mcp.is_none());
    assert!(aider.transports().is_empty());
    assert!(aider.configs.get(ConfigType::Rules).is_some());
}

#[test]
fn test_every_mcp_agent_has_a_config_path() {
    let catalog = AgentCatalog::load().expect("Failed to load catalog");

    for agent in catalog.list() {
        if let Some(mcp) = &agent.mcp {
            assert!(
                mcp.paths.global.is_some() || mcp.paths.project.is_some(),
                "agent {} has no MCP config path",
                agent.agent.slug
            );
        }
    }
}
