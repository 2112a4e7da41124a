//! [`SwitchTool`] implementation backed by `swaymsg`.
//!
//! Runs `<program> workspace <N>` as a child process and captures both
//! output streams.  The program name is configurable so the panel can drive
//! `i3-msg` or a wrapper script just as well.

use crate::traits::{SwitchTool, ToolOutput};
use log::debug;
use std::io;
use std::process::Command;

/// Switches workspaces by running the window manager's control utility.
#[derive(Debug, Clone)]
pub struct SwaymsgTool {
    program: String,
}

impl Default for SwaymsgTool {
    fn default() -> Self {
        Self::new("swaymsg")
    }
}

impl SwaymsgTool {
    /// Create a tool that runs `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program that is run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed for workspace `number`.
    pub fn args(number: i64) -> [String; 2] {
        ["workspace".to_string(), number.to_string()]
    }
}

impl SwitchTool for SwaymsgTool {
    fn focus_workspace(&self, number: i64) -> io::Result<ToolOutput> {
        let args = Self::args(number);
        debug!("running {} {}", self.program, args.join(" "));

        let out = Command::new(&self.program).args(&args).output()?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        Ok(ToolOutput {
            code: out.status.code(),
            output,
        })
    }
}
