//! Layered user configuration.
//!
//! Precedence, lowest to highest: built-in defaults, global
//! `~/.mcpcast.toml`, project `.mcpcast.toml`, then CLI flags.

use crate::catalog::ConfigFormat;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Verbose mode (not stored in config file)
    #[serde(skip)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Agent slug used when a command omits the agent argument
    #[serde(default)]
    pub agent: Option<String>,

    /// Output format override for rendered snippets
    #[serde(default)]
    pub format: Option<ConfigFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Extra directories to load agent TOML files from
    #[serde(default)]
    pub dirs: Vec<String>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later by the caller)
    /// 2. Environment variables
    /// 3. Project config (.mcpcast.toml in the working directory)
    /// 4. Global config (~/.mcpcast.toml)
    /// 5. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = home_dir() {
            let global_config = home.join(".mcpcast.toml");
            if global_config.exists() {
                config = config.merge(Self::from_file(&global_config)?);
            }
        }

        let project_config = project_root.join(".mcpcast.toml");
        if project_config.exists() {
            config = config.merge(Self::from_file(&project_config)?);
        }

        config = config.merge_env();

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(mut self, other: Self) -> Self {
        if other.defaults.agent.is_some() {
            self.defaults.agent = other.defaults.agent;
        }
        if other.defaults.format.is_some() {
            self.defaults.format = other.defaults.format;
        }

        // Catalog directories accumulate across layers
        self.catalog.dirs.extend(other.catalog.dirs);

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Ok(agent) = std::env::var("MCPCAST_AGENT") {
            if !agent.is_empty() {
                self.defaults.agent = Some(agent);
            }
        }

        self
    }

    /// Catalog directories with `~` expanded.
    pub fn catalog_dirs(&self) -> Vec<PathBuf> {
        self.catalog
            .dirs
            .iter()
            .filter_map(|dir| crate::utils::path::expand_tilde(dir))
            .collect()
    }
}

/// Get the home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.defaults.agent.is_none());
        assert!(config.defaults.format.is_none());
        assert!(config.catalog.dirs.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [defaults]
            agent = "claude-code"
            format = "toml"

            [catalog]
            dirs = ["~/.config/mcpcast/agents"]
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.agent.as_deref(), Some("claude-code"));
        assert_eq!(config.defaults.format, Some(ConfigFormat::Toml));
        assert_eq!(config.catalog.dirs.len(), 1);
    }

    #[test]
    fn test_merge_precedence() {
        let global: Config = toml::from_str(
            r#"
            [defaults]
            agent = "zed"

            [catalog]
            dirs = ["/etc/mcpcast/agents"]
            "#,
        )
        .unwrap();
        let project: Config = toml::from_str(
            r#"
            [defaults]
            agent = "cursor"

            [catalog]
            dirs = ["./agents"]
            "#,
        )
        .unwrap();

        let merged = global.merge(project);
        assert_eq!(merged.defaults.agent.as_deref(), Some("cursor"));
        assert_eq!(
            merged.catalog.dirs,
            vec!["/etc/mcpcast/agents".to_string(), "./agents".to_string()]
        );
    }

    #[test]
    #[serial_test::serial]
    fn test_env_override() {
        std::env::set_var("MCPCAST_AGENT", "opencode");
        let config = Config::default().merge_env();
        std::env::remove_var("MCPCAST_AGENT");

        assert_eq!(config.defaults.agent.as_deref(), Some("opencode"));
    }
}
