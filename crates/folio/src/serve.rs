// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio serve` command implementation.
//!
//! Opens the contact store, reloads any stored Google credentials, builds the
//! router and serves until a shutdown signal arrives.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};

use folio_config::FolioConfig;
use folio_core::FolioError;
use folio_drive::DriveClient;
use folio_gateway::{build_router, start_server, AppState};
use folio_storage::JsonContactStore;

use crate::shutdown;

/// Runs the `folio serve` command.
pub async fn run_serve(config: FolioConfig) -> Result<(), FolioError> {
    init_tracing(&config.server.log_level);

    info!("starting folio serve");

    let app = build_app(&config).await?;
    let cancel = shutdown::install_signal_handler();
    start_server(&config.server.host, config.server.port, app, cancel).await?;

    info!("folio serve shutdown complete");
    Ok(())
}

/// Wire the configured backends into the router.
pub async fn build_app(config: &FolioConfig) -> Result<Router, FolioError> {
    let store = JsonContactStore::open(&config.storage.contacts_path).await?;

    if config.google.client_id.is_none() {
        warn!("GOOGLE_CLIENT_ID is not set; Google Drive authorization is unavailable");
    }
    let drive = DriveClient::from_config(&config.google, &config.storage.token_path).await?;
    info!(auth_state = %drive.tokens().state().await, "Google Drive provider ready");

    let state = AppState::new(Arc::new(store), Arc::new(drive));
    Ok(build_router(state, Path::new(&config.server.static_dir)))
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("folio={log_level},tower_http={log_level},warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
