//! Data structures for parsing agent TOML files.
//!
//! These types define the schema for agent catalog entries: metadata,
//! MCP transport templates, and per-config-type path templates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Abstract server fields a transport template is allowed to remap.
pub const ABSTRACT_FIELDS: &[&str] = &["command", "args", "env", "url", "headers", "timeout"];

/// An agent definition loaded from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentDef {
    /// Agent metadata (slug, name, description)
    pub agent: AgentMeta,

    /// MCP configuration templates (absent when the agent has no MCP support)
    #[serde(default)]
    pub mcp: Option<McpSection>,

    /// Per-config-type path/format templates
    #[serde(default)]
    pub configs: ConfigTemplates,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentMeta {
    pub slug: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub supports_mcp: bool,
}

impl AgentDef {
    /// Transport kinds the agent accepts, empty when MCP is unsupported.
    pub fn transports(&self) -> &[TransportKind] {
        self.mcp
            .as_ref()
            .map(|m| m.transports.as_slice())
            .unwrap_or(&[])
    }
}

/// MCP configuration conventions for one agent.
#[derive(Debug, Clone, Deserialize)]
pub struct McpSection {
    /// Transport kinds the agent accepts
    pub transports: Vec<TransportKind>,

    /// Top-level key under which server entries are nested
    pub wrapper_key: String,

    /// On-disk format of the agent's MCP config file
    pub format: ConfigFormat,

    /// Extra nesting level for each server entry (Zed's "settings")
    #[serde(default)]
    pub settings_wrapper: Option<String>,

    /// CLI command template with {name}, {command}, {url}, {env_flags} tokens
    #[serde(default)]
    pub cli_add_command: Option<String>,

    /// Per-entry env flag template with {key} and {value} tokens
    #[serde(default)]
    pub env_flag: Option<String>,

    /// Config file locations by scope
    #[serde(default)]
    pub paths: McpPaths,

    /// Per-transport field templates
    #[serde(default)]
    pub transport: TransportTable,
}

/// Transport templates by kind.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TransportTable {
    #[serde(default)]
    pub stdio: Option<TransportTemplate>,

    #[serde(default)]
    pub http: Option<TransportTemplate>,

    #[serde(default)]
    pub sse: Option<TransportTemplate>,
}

impl TransportTable {
    /// Get the template for a transport kind
    pub fn get(&self, kind: TransportKind) -> Option<&TransportTemplate> {
        match kind {
            TransportKind::Stdio => self.stdio.as_ref(),
            TransportKind::Http => self.http.as_ref(),
            TransportKind::Sse => self.sse.as_ref(),
        }
    }

    /// Iterate over the templates that are present
    pub fn iter(&self) -> impl Iterator<Item = (TransportKind, &TransportTemplate)> {
        [
            (TransportKind::Stdio, self.stdio.as_ref()),
            (TransportKind::Http, self.http.as_ref()),
            (TransportKind::Sse, self.sse.as_ref()),
        ]
        .into_iter()
        .filter_map(|(kind, template)| template.map(|t| (kind, t)))
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct McpPaths {
    #[serde(default)]
    pub global: Option<String>,

    #[serde(default)]
    pub project: Option<String>,
}

/// Field template for one (agent, transport) pair.
///
/// `fields` maps abstract server fields to the agent's key names, in the
/// order they should appear in rendered output. A field without a mapping
/// is deliberately dropped from output, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportTemplate {
    /// Literal value for the entry's "type" key, when the agent expects one
    #[serde(default)]
    pub type_value: Option<String>,

    /// Shape of the command value: plain string or combined [cmd, args...] array
    #[serde(default)]
    pub command_shape: CommandShape,

    /// Abstract field -> agent-specific key name
    pub fields: IndexMap<String, String>,
}

impl TransportTemplate {
    /// Inverse of `fields`: agent-specific key name -> abstract field.
    pub fn reverse_fields(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|(abstract_name, agent_key)| (agent_key.clone(), abstract_name.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandShape {
    /// `command` is a string, `args` a separate array (Claude Code, Cursor)
    #[default]
    String,
    /// `command` is a combined `[cmd, args...]` array (OpenCode)
    Array,
}

/// Config-type templates by slug.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigTemplates {
    #[serde(default)]
    pub mcp_servers: Option<ConfigTypeTemplate>,

    #[serde(default)]
    pub rules: Option<ConfigTypeTemplate>,

    #[serde(default)]
    pub agents: Option<ConfigTypeTemplate>,

    #[serde(default)]
    pub plugins: Option<ConfigTypeTemplate>,

    #[serde(default)]
    pub custom_tools: Option<ConfigTypeTemplate>,

    #[serde(default)]
    pub hooks: Option<ConfigTypeTemplate>,

    #[serde(default)]
    pub slash_commands: Option<ConfigTypeTemplate>,

    #[serde(default)]
    pub skills: Option<ConfigTypeTemplate>,

    #[serde(default)]
    pub prompts: Option<ConfigTypeTemplate>,
}

impl ConfigTemplates {
    /// Get the template for a config type
    pub fn get(&self, config_type: ConfigType) -> Option<&ConfigTypeTemplate> {
        match config_type {
            ConfigType::McpServers => self.mcp_servers.as_ref(),
            ConfigType::Rules => self.rules.as_ref(),
            ConfigType::Agents => self.agents.as_ref(),
            ConfigType::Plugins => self.plugins.as_ref(),
            ConfigType::CustomTools => self.custom_tools.as_ref(),
            ConfigType::Hooks => self.hooks.as_ref(),
            ConfigType::SlashCommands => self.slash_commands.as_ref(),
            ConfigType::Skills => self.skills.as_ref(),
            ConfigType::Prompts => self.prompts.as_ref(),
        }
    }

    /// Iterate over the templates that are present
    pub fn iter(&self) -> impl Iterator<Item = (ConfigType, &ConfigTypeTemplate)> {
        ConfigType::ALL
            .iter()
            .filter_map(|config_type| self.get(*config_type).map(|t| (*config_type, t)))
    }
}

/// Path/format template for one (agent, config type) pair.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigTypeTemplate {
    #[serde(default)]
    pub global_path: Option<String>,

    #[serde(default)]
    pub project_path: Option<String>,

    #[serde(default)]
    pub format: Option<ConfigFormat>,

    #[serde(default)]
    pub file_extension: Option<String>,

    #[serde(default)]
    pub supports_subdirectories: bool,

    /// How the artifact is installed; file drop at the paths above when absent
    #[serde(default)]
    pub install: Option<InstallSpec>,
}

/// Installation procedure for a config type.
///
/// Exactly one mode applies per (agent, config type); the tagged
/// representation makes more-than-one unrepresentable.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum InstallSpec {
    /// Drop files at the template's global/project path
    FilePath,

    /// Run a templated shell command
    CliCommand { command: String },

    /// Free-text instructions
    Custom { instructions: String },
}

/// Connection mechanism of an MCP server.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Local process over stdin/stdout (alias: "local")
    Stdio,
    /// Streamable HTTP (alias: "remote")
    Http,
    /// Server-sent events
    Sse,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Stdio => "stdio",
            TransportKind::Http => "http",
            TransportKind::Sse => "sse",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = crate::error::McpcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" | "local" => Ok(TransportKind::Stdio),
            "http" | "remote" | "streamable-http" => Ok(TransportKind::Http),
            "sse" => Ok(TransportKind::Sse),
            other => Err(crate::error::McpcastError::InvalidConfig(format!(
                "Unknown transport kind: {}",
                other
            ))),
        }
    }
}

/// On-disk format of a config artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    Jsonc,
    Toml,
    Yaml,
    Markdown,
}

impl ConfigFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Jsonc => "jsonc",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = crate::error::McpcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ConfigFormat::Json),
            "jsonc" => Ok(ConfigFormat::Jsonc),
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" => Ok(ConfigFormat::Yaml),
            "markdown" => Ok(ConfigFormat::Markdown),
            other => Err(crate::error::McpcastError::InvalidConfig(format!(
                "Unknown config format: {}",
                other
            ))),
        }
    }
}

/// Category of shareable config artifact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigType {
    McpServers,
    Rules,
    Agents,
    Plugins,
    CustomTools,
    Hooks,
    SlashCommands,
    Skills,
    Prompts,
}

impl ConfigType {
    pub const ALL: &'static [ConfigType] = &[
        ConfigType::McpServers,
        ConfigType::Rules,
        ConfigType::Agents,
        ConfigType::Plugins,
        ConfigType::CustomTools,
        ConfigType::Hooks,
        ConfigType::SlashCommands,
        ConfigType::Skills,
        ConfigType::Prompts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigType::McpServers => "mcp-servers",
            ConfigType::Rules => "rules",
            ConfigType::Agents => "agents",
            ConfigType::Plugins => "plugins",
            ConfigType::CustomTools => "custom-tools",
            ConfigType::Hooks => "hooks",
            ConfigType::SlashCommands => "slash-commands",
            ConfigType::Skills => "skills",
            ConfigType::Prompts => "prompts",
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigType {
    type Err = crate::error::McpcastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| crate::error::McpcastError::UnknownConfigType(s.to_string()))
    }
}
