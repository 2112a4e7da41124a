//! HTTP routes.
//!
//! * `GET /` renders the page for the current workspace state.
//! * `POST /switch` with `{"Application": N}` focuses workspace `N` and
//!   answers `success`.
//!
//! Every failure becomes a `500` whose plain-text body is the error message.

use super::Panel;
use crate::application::SwitchRequest;
use crate::switch::{switch_to, SwitchError};
use crate::traits::{StateSource, SwitchTool};
use crate::view::ViewError;
use crate::workspace::{current_application, StateError};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use log::{debug, error, info};
use std::sync::Arc;

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("bad switch request: {0}")]
    Request(#[from] serde_json::Error),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Switch(#[from] SwitchError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl IntoResponse for PanelError {
    fn into_response(self) -> Response {
        error!("request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Build the router for `panel`.
pub fn router<S: StateSource, T: SwitchTool>(panel: Arc<Panel<S, T>>) -> Router {
    Router::new()
        .route("/", get(index::<S, T>))
        .route("/switch", post(switch::<S, T>))
        .with_state(panel)
}

async fn index<S: StateSource, T: SwitchTool>(
    State(panel): State<Arc<Panel<S, T>>>,
) -> Result<Html<String>, PanelError> {
    let worker = Arc::clone(&panel);
    let vis = tokio::task::spawn_blocking(move || current_application(&worker.state)).await??;
    debug!("{} is on", vis.active());
    Ok(Html(panel.view.render(vis)?))
}

async fn switch<S: StateSource, T: SwitchTool>(
    State(panel): State<Arc<Panel<S, T>>>,
    body: Bytes,
) -> Result<&'static str, PanelError> {
    let request = SwitchRequest::parse(&body)?;
    let selector = request.application;

    let worker = Arc::clone(&panel);
    let task = tokio::task::spawn_blocking(move || switch_to(&worker.tool, selector));
    let outcome = match panel.switch_timeout {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .map_err(|_| SwitchError::TimedOut(limit))??,
        None => task.await?,
    };
    outcome?;

    match request.known_application() {
        Some(app) => info!("switched to {} (workspace {})", app, selector),
        None => info!("switched to workspace {}", selector),
    }
    Ok("success")
}
