//! [`StateSource`] that asks sway directly.
//!
//! Runs `<program> -t get_workspaces` on every read instead of relying on a
//! dump file kept up to date by someone else.

use crate::traits::StateSource;
use log::debug;
use std::io;
use std::process::Command;

/// Queries the live workspace list through the control utility.
#[derive(Debug, Clone)]
pub struct SwayQuery {
    program: String,
}

impl SwayQuery {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl StateSource for SwayQuery {
    fn read_state(&self) -> io::Result<String> {
        debug!("running {} -t get_workspaces", self.program);
        let out = Command::new(&self.program)
            .args(["-t", "get_workspaces"])
            .output()
            .map_err(|e| io::Error::new(e.kind(), format!("run {}: {}", self.program, e)))?;

        if !out.status.success() {
            return Err(io::Error::other(format!(
                "{} -t get_workspaces failed ({}): {}",
                self.program,
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        String::from_utf8(out.stdout).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} output was not valid UTF-8: {}", self.program, e),
            )
        })
    }
}
