// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. Anything not matched by an
//! API route is served from the static directory.

use std::any::Any;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::handler::HandlerWithoutStateExt;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use folio_core::{ContactStore, DriveProvider, FolioError};

use crate::drive;
use crate::error::{ApiError, MSG_FILE_NOT_FOUND, MSG_SERVER_ERROR};
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
    pub drive: Arc<dyn DriveProvider>,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>, drive: Arc<dyn DriveProvider>) -> Self {
        Self {
            store,
            drive,
            start_time: Instant::now(),
        }
    }
}

/// Build the full application router.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let static_files =
        ServeDir::new(static_dir).not_found_service(file_not_found.into_service());

    Router::new()
        .route(
            "/api/contact",
            get(handlers::list_contacts).post(handlers::submit_contact),
        )
        .route("/api/contacts", get(handlers::list_contacts))
        .route(
            "/api/contacts/{id}",
            get(handlers::get_contact).delete(handlers::delete_contact),
        )
        .route("/auth/google", get(drive::start_auth))
        .route("/auth/google/callback", get(drive::auth_callback))
        .route("/api/drive/files", get(drive::list_files))
        .route("/health", get(handlers::get_health))
        .fallback_service(static_files)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind `host:port` and serve until `shutdown` is cancelled.
pub async fn start_server(
    host: &str,
    port: u16,
    app: Router,
    shutdown: CancellationToken,
) -> Result<(), FolioError> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::Internal(format!("failed to bind {addr}: {e}")))?;

    info!("Portfolio server listening on http://{addr}");
    info!("Contact API: http://{addr}/api/contact");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| FolioError::Internal(format!("server error: {e}")))?;

    info!("server stopped");
    Ok(())
}

async fn file_not_found() -> ApiError {
    ApiError::not_found(MSG_FILE_NOT_FOUND)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(panic = %detail, "request handler panicked");
    ApiError {
        status: axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        message: MSG_SERVER_ERROR.to_string(),
        error: Some(detail),
    }
    .into_response()
}
