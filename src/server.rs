//! Abstract, transport-independent MCP server description.

use crate::catalog::TransportKind;
use crate::error::{McpcastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a server runs as a local process or is reached over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerKind {
    Local,
    Remote,
}

impl ServerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerKind::Local => "local",
            ServerKind::Remote => "remote",
        }
    }
}

/// An MCP server described independently of any agent's config format.
///
/// Invariants, enforced by [`McpServer::validate`]:
/// - a `local` server must have a `command` and no `url`
/// - a `remote` server must have a `url` and no `command`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServer {
    #[serde(rename = "type")]
    pub kind: ServerKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl McpServer {
    /// A local server running `command`.
    pub fn local(command: impl Into<String>) -> Self {
        Self {
            kind: ServerKind::Local,
            command: Some(command.into()),
            args: Vec::new(),
            env: BTreeMap::new(),
            url: None,
            headers: BTreeMap::new(),
            timeout: None,
        }
    }

    /// A remote server reached at `url`.
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            kind: ServerKind::Remote,
            command: None,
            args: Vec::new(),
            env: BTreeMap::new(),
            url: Some(url.into()),
            headers: BTreeMap::new(),
            timeout: None,
        }
    }

    /// Check the structural invariants of the description.
    pub fn validate(&self) -> Result<()> {
        if self.command.is_some() && self.url.is_some() {
            return Err(McpcastError::AmbiguousServer);
        }

        match self.kind {
            ServerKind::Local => {
                if self.command.is_none() {
                    return Err(McpcastError::MissingRequiredField {
                        field: "command",
                        kind: "local",
                    });
                }
                if self.url.is_some() {
                    return Err(McpcastError::AmbiguousServer);
                }
            }
            ServerKind::Remote => {
                if self.url.is_none() {
                    return Err(McpcastError::MissingRequiredField {
                        field: "url",
                        kind: "remote",
                    });
                }
                if self.command.is_some() {
                    return Err(McpcastError::AmbiguousServer);
                }
            }
        }

        Ok(())
    }

    /// The transport a server of this kind naturally uses, when the caller
    /// did not request one explicitly. Remote servers default to HTTP; an
    /// agent that only speaks SSE still needs an explicit request.
    pub fn default_transport(&self) -> TransportKind {
        match self.kind {
            ServerKind::Local => TransportKind::Stdio,
            ServerKind::Remote => TransportKind::Http,
        }
    }
}
