//! Reading the workspace-state document.
//!
//! Sway reports workspaces as a JSON array.  Only the first entry matters
//! here: the two applications sit on workspaces `0` and `1`, and whether the
//! first listed workspace has focus tells us which of them is on screen.

use crate::application::Application;
use crate::traits::StateSource;
use crate::wire;
use serde::Deserialize;

/// Errors from loading or interpreting the workspace state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The document could not be read.  The message is the I/O reason.
    #[error("{0}")]
    Read(#[source] std::io::Error),
    /// The document is not a JSON array of workspaces.
    #[error("malformed workspace state: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but lists no workspaces.
    #[error("malformed workspace state: no workspaces listed")]
    Empty,
}

/// Subset of one entry of `swaymsg -t get_workspaces`.
///
/// Only [`focused`](Self::focused) drives any logic; the other fields are
/// kept so a document with the wrong shape is still rejected.  Keys match
/// in any case (`"Focused"` is `focused`), missing fields default and
/// unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkspaceState {
    pub id: i64,
    pub num: i64,
    pub name: Option<String>,
    pub output: Option<String>,
    pub focused: bool,
    pub visible: bool,
    pub urgent: bool,
    pub rect: Rect,
}

/// Workspace geometry in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Which application is currently on screen.  Exactly one flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub primary_on: bool,
    pub secondary_on: bool,
}

impl Visibility {
    /// The visibility that shows `app`.
    pub fn showing(app: Application) -> Self {
        Self {
            primary_on: app == Application::Primary,
            secondary_on: app == Application::Secondary,
        }
    }

    /// The application that is on.
    pub fn active(&self) -> Application {
        if self.secondary_on {
            Application::Secondary
        } else {
            Application::Primary
        }
    }
}

/// Parse a workspace-state document.
pub fn parse_workspaces(json: &str) -> Result<Vec<WorkspaceState>, StateError> {
    Ok(wire::from_str_folded(json)?)
}

/// Derive the visible application from a list of workspaces.
///
/// The secondary application is on exactly when the first workspace is
/// focused.
pub fn visibility(workspaces: &[WorkspaceState]) -> Result<Visibility, StateError> {
    let first = workspaces.first().ok_or(StateError::Empty)?;
    Ok(Visibility::showing(if first.focused {
        Application::Secondary
    } else {
        Application::Primary
    }))
}

/// Read the document from `source` and derive the visible application.
pub fn current_application<S: StateSource + ?Sized>(source: &S) -> Result<Visibility, StateError> {
    let json = source.read_state().map_err(StateError::Read)?;
    let workspaces = parse_workspaces(&json)?;
    visibility(&workspaces)
}
