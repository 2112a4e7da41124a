//! The HTTP side of the panel.
//!
//! [`Panel`] bundles everything the handlers need; [`routes::router`] turns
//! it into an `axum` router and [`serve`] runs that router until the
//! process receives an interrupt.

pub mod routes;

use crate::config::{Config, StateConfig};
use crate::sway::query::SwayQuery;
use crate::sway::state_file::StateFile;
use crate::sway::tool::SwaymsgTool;
use crate::traits::{StateSource, SwitchTool};
use crate::view::{View, ViewError};
use log::{error, info};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Dependencies of the HTTP handlers.
///
/// Generic over the state source and the switch tool so tests can swap in
/// in-memory doubles for both.
pub struct Panel<S: StateSource, T: SwitchTool> {
    state: S,
    tool: T,
    view: View,
    switch_timeout: Option<Duration>,
}

impl<S: StateSource, T: SwitchTool> Panel<S, T> {
    /// Create a panel without a switch timeout.
    pub fn new(state: S, tool: T, view: View) -> Self {
        Self {
            state,
            tool,
            view,
            switch_timeout: None,
        }
    }

    /// Bound every switch by `timeout`.  `None` waits for the tool forever.
    pub fn with_switch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.switch_timeout = timeout;
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serve `panel` on `addr` until an interrupt arrives.
///
/// On interrupt the listener stops accepting; requests already in flight
/// are allowed to finish.
pub async fn serve<S: StateSource, T: SwitchTool>(
    addr: SocketAddr,
    panel: Panel<S, T>,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, routes::router(Arc::new(panel)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("interrupt received, shutting down"),
        Err(e) => {
            error!("cannot listen for interrupt: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// How long process exit waits for blocking work that outlived the server.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Drive `fut` to completion on a fresh multi-threaded runtime.
///
/// Blocking tasks still running afterwards, such as a switch tool that hung
/// past its timeout, get `grace` to finish; after that the runtime is torn
/// down without them so the process can exit.
pub fn block_on<F: Future>(fut: F, grace: Duration) -> std::io::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(fut);
    runtime.shutdown_timeout(grace);
    Ok(output)
}

/// Build the panel described by `config` and serve it.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let view = View::load(config.template.as_deref(), &config.labels)?;
    let tool = SwaymsgTool::new(config.switch_tool.clone());
    let timeout = config.switch_timeout();

    match &config.state {
        StateConfig::File { path } => {
            info!("reading workspace state from {}", path.display());
            let panel = Panel::new(StateFile::new(path), tool, view).with_switch_timeout(timeout);
            serve(config.listen, panel).await?;
        }
        StateConfig::Query => {
            info!("querying workspace state with {}", config.switch_tool);
            let source = SwayQuery::new(config.switch_tool.clone());
            let panel = Panel::new(source, tool, view).with_switch_timeout(timeout);
            serve(config.listen, panel).await?;
        }
    }

    info!("server stopped");
    Ok(())
}
