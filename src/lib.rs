//! **swaypanel**: a tiny local web page that flips a sway session between
//! two applications.
//!
//! Each application lives on its own workspace (`0` and `1`).  The page
//! shows which one is on screen, read from a workspace dump, and switching
//! runs `swaymsg workspace <N>`.
//!
//! # Architecture
//!
//! The crate is organised around two core traits:
//!
//! * [`traits::StateSource`]: yields the workspace-state document so the
//!   state reader is not coupled to a file on disk.
//! * [`traits::SwitchTool`]: focuses a workspace and reports what the tool
//!   printed, so the switch logic is not coupled to a child process.
//!
//! Concrete implementations live in [`sway`]; the HTTP surface lives in
//! [`server`].

pub mod application;
pub mod config;
pub mod server;
pub mod sway;
pub mod switch;
pub mod traits;
pub mod view;
pub mod wire;
pub mod workspace;
