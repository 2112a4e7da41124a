//! Entry point for the **swaypanel** server.
//!
//! Loads the configuration, then serves the panel until interrupted.

use clap::Parser;
use log::{error, info};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use swaypanel::config::Config;
use swaypanel::server;

/// Web panel that switches between two sway workspaces.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (default: $XDG_CONFIG_HOME/swaypanel/config.json).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration.
    #[arg(long)]
    listen: Option<SocketAddr>,
}

/// Load the explicitly requested config, or try the default location and
/// fall back to compiled-in defaults.
fn load_config(explicit: Option<&Path>) -> Config {
    if let Some(path) = explicit {
        return Config::load(path).unwrap_or_else(|e| {
            error!("{}", e);
            std::process::exit(1);
        });
    }

    let Some(path) = Config::default_path() else {
        info!("no config directory, using defaults");
        return Config::default();
    };
    Config::load(&path).unwrap_or_else(|e| {
        info!("{}, using defaults", e);
        Config::default()
    })
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut config = load_config(args.config.as_deref());
    if let Some(listen) = args.listen {
        config.listen = listen;
    }

    let result = match server::block_on(server::run(config), server::SHUTDOWN_GRACE) {
        Ok(result) => result,
        Err(e) => {
            error!("failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
