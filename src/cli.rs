use crate::catalog::{ConfigFormat, ConfigType, TransportKind};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mcpcast")]
#[command(
    about = "Render MCP server definitions and config artifacts for AI coding agents",
    long_about = None
)]
#[command(version = env!("MCPCAST_VERSION"))]
#[command(after_help = "\
EXAMPLES:
  mcpcast list                                  List supported agents
  mcpcast info claude-code                      Show an agent's conventions
  mcpcast render claude-code --name github \\
      --command npx --arg -y --arg mcp-github   Render a config snippet
  mcpcast render zed --name docs --url https://example.com/mcp
  mcpcast paths cursor rules                    Where Cursor keeps rule files
  mcpcast add claude-code --name github --command npx --scope project

For details about a specific command, use:
  mcpcast <command> --help")]
pub struct Cli {
    /// Show verbose output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List agents in the catalog
    List {
        /// Show only agents with MCP support
        #[arg(long)]
        mcp: bool,
    },

    /// Show an agent's config conventions
    Info {
        /// Agent slug (see 'mcpcast list')
        agent: String,
    },

    /// Render an MCP server entry the way an agent expects it
    Render(RenderCmd),

    /// Show where an agent keeps a given config type
    Paths {
        /// Agent slug
        agent: String,

        /// Config type (rules, plugins, skills, ...)
        config_type: ConfigType,
    },

    /// Show how a config type is installed for an agent
    InstallInfo {
        /// Agent slug
        agent: String,

        /// Config type (rules, plugins, skills, ...)
        config_type: ConfigType,
    },

    /// Merge a rendered server entry into an agent's config file
    Add(AddCmd),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show mcpcast version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate,

    /// Show effective configuration after merging all sources
    Show,
}

/// Flags describing an abstract MCP server.
#[derive(Parser, Debug, Clone, Default)]
pub struct ServerFlags {
    /// Display name for the server entry
    #[arg(long)]
    pub name: String,

    /// Command to launch a local server
    #[arg(long)]
    pub command: Option<String>,

    /// Command argument (repeatable; values may start with '-')
    #[arg(long = "arg", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Environment variable as KEY=VALUE (repeatable)
    #[arg(long = "env")]
    pub env: Vec<String>,

    /// URL of a remote server
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP header as KEY=VALUE (repeatable)
    #[arg(long = "header")]
    pub headers: Vec<String>,

    /// Timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Transport kind (stdio/local, http/remote, sse); inferred when omitted
    #[arg(long)]
    pub transport: Option<TransportKind>,
}

#[derive(Parser, Debug)]
pub struct RenderCmd {
    /// Agent slug; falls back to defaults.agent from config
    pub agent: Option<String>,

    #[command(flatten)]
    pub server: ServerFlags,

    /// Output format override (json or toml)
    #[arg(long)]
    pub format: Option<ConfigFormat>,

    /// Print only the agent's CLI install command
    #[arg(long)]
    pub cli: bool,
}

#[derive(Parser, Debug)]
pub struct AddCmd {
    /// Agent slug; falls back to defaults.agent from config
    pub agent: Option<String>,

    #[command(flatten)]
    pub server: ServerFlags,

    /// Which config file scope to write to
    #[arg(long, value_enum, default_value_t = Scope::Project)]
    pub scope: Scope,

    /// Write to an explicit file instead of the agent's configured path
    #[arg(long, conflicts_with = "scope")]
    pub file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Project,
}
