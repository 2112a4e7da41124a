//! The two applications the panel toggles between, and the wire format of
//! a switch request.
//!
//! Each application owns one sway workspace.  The workspace number doubles
//! as the selector sent over HTTP:
//!
//! ```json
//! {"Application": 0}
//! {"Application": 1}
//! ```

use crate::wire;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// One of the two known applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Application {
    /// Lives on workspace `0`.
    Primary,
    /// Lives on workspace `1`.
    Secondary,
}

impl Application {
    const ALL: [Application; 2] = [Application::Primary, Application::Secondary];

    /// Workspace number handed to the switch tool.
    pub fn workspace(self) -> i64 {
        match self {
            Application::Primary => 0,
            Application::Secondary => 1,
        }
    }

    /// Map a workspace number back to a known application.
    pub fn from_workspace(number: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.workspace() == number)
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Application::Primary => write!(f, "primary"),
            Application::Secondary => write!(f, "secondary"),
        }
    }
}

/// Body of `POST /switch`.
///
/// The selector is kept as a raw integer: values outside the two known
/// workspaces are forwarded to the switch tool untouched and it is up to the
/// window manager to accept or reject them.
///
/// Decoding is as forgiving as the panel's clients expect: the key matches
/// in any case, a missing key or a `null` body selects workspace `0`, and
/// bytes after the first JSON value are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct SwitchRequest {
    #[serde(default)]
    pub application: i64,
}

impl SwitchRequest {
    /// Decode a request body.  The content type is not checked.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        match wire::first_value(body)? {
            Value::Null => Ok(Self::default()),
            value => serde_json::from_value(wire::fold_key_case(value)),
        }
    }

    /// The application this request targets, if the selector is a known one.
    pub fn known_application(&self) -> Option<Application> {
        Application::from_workspace(self.application)
    }
}
