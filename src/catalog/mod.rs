//! Agent catalog: which agents exist and how each one shapes its
//! configuration artifacts on disk.
//!
//! Each agent is described by a TOML file under `agents/`:
//!
//! ```toml
//! [agent]
//! slug = "claude-code"
//! name = "Claude Code"
//! supports_mcp = true
//!
//! [mcp]
//! transports = ["stdio", "http", "sse"]
//! wrapper_key = "mcpServers"
//! format = "json"
//!
//! [mcp.transport.stdio]
//! type_value = "stdio"
//! [mcp.transport.stdio.fields]
//! command = "command"
//! args = "args"
//! env = "env"
//!
//! [configs.rules]
//! project_path = "CLAUDE.md"
//! format = "markdown"
//! ```
//!
//! Definitions are validated when the catalog loads; the transformer and
//! resolver treat the loaded catalog as immutable reference data.

pub mod definition;
pub mod registry;

pub use definition::{
    AgentDef, AgentMeta, CommandShape, ConfigFormat, ConfigTemplates, ConfigType,
    ConfigTypeTemplate, InstallSpec, McpPaths, McpSection, TransportKind, TransportTable,
    TransportTemplate,
};
pub use registry::AgentCatalog;
