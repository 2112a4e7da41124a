//! Sway-specific implementations.
//!
//! This module provides concrete backends for the
//! [`SwitchTool`](crate::traits::SwitchTool) and
//! [`StateSource`](crate::traits::StateSource) traits, powered by the
//! `swaymsg` command-line utility and the workspace dump it writes.
//!
//! Nothing outside this module should reference sway directly.

pub mod query;
pub mod state_file;
pub mod tool;
