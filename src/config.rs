//! Application configuration.
//!
//! The configuration is loaded from a JSON file, either the one passed with
//! `--config <path>` or `$XDG_CONFIG_HOME/swaypanel/config.json`.
//!
//! # Example
//!
//! ```json
//! {
//!   "listen": "127.0.0.1:8080",
//!   "state": { "source": "file", "path": "/run/user/1000/workspaces.json" },
//!   "switch_tool": "swaymsg",
//!   "switch_timeout_ms": 5000,
//!   "labels": { "primary": "Plex", "secondary": "Steam" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration.
///
/// Every field is optional: a minimal `{}` file is valid and all fields
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub listen: SocketAddr,
    /// Where the workspace state comes from.
    pub state: StateConfig,
    /// Window-manager control utility used for switching (and for
    /// [`StateConfig::Query`]).
    pub switch_tool: String,
    /// Upper bound on a single switch, in milliseconds.  `0` waits forever.
    pub switch_timeout_ms: u64,
    /// Button captions shown on the page.
    pub labels: Labels,
    /// Replace the built-in page with this template file.
    pub template: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            state: StateConfig::default(),
            switch_tool: "swaymsg".into(),
            switch_timeout_ms: 5000,
            labels: Labels::default(),
            template: None,
        }
    }
}

/// Where the workspace-state document is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum StateConfig {
    /// A JSON dump written by something else.
    File {
        #[serde(default = "default_state_path")]
        path: PathBuf,
    },
    /// Run `<switch_tool> -t get_workspaces` on every page load.
    Query,
}

fn default_state_path() -> PathBuf {
    PathBuf::from("out.json")
}

impl Default for StateConfig {
    fn default() -> Self {
        StateConfig::File {
            path: default_state_path(),
        }
    }
}

/// Display names of the two applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub primary: String,
    pub secondary: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            primary: "Plex".into(),
            secondary: "Steam".into(),
        }
    }
}

impl Config {
    /// Parse the JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `$XDG_CONFIG_HOME/swaypanel/config.json`, falling back to
    /// `$HOME/.config` when the XDG variable is unset or empty.  `None` if
    /// neither variable is usable.
    pub fn default_path() -> Option<PathBuf> {
        let xdg = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty());
        let home = std::env::var_os("HOME").filter(|v| !v.is_empty());
        config_path_from(xdg.map(PathBuf::from), home.map(PathBuf::from))
    }

    /// The switch timeout, or `None` if disabled.
    pub fn switch_timeout(&self) -> Option<Duration> {
        (self.switch_timeout_ms > 0).then(|| Duration::from_millis(self.switch_timeout_ms))
    }
}

fn config_path_from(xdg: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = xdg.or_else(|| home.map(|h| h.join(".config")))?;
    Some(base.join("swaypanel").join("config.json"))
}

/// Error from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
