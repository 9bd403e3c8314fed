// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google OAuth and Drive listing handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Redirect;
use serde::Deserialize;
use tracing::{error, info, warn};

use folio_core::DriveProvider;

use crate::envelope::FilesEnvelope;
use crate::error::ApiError;
use crate::server::AppState;

const MSG_AUTH_START_FAILED: &str = "Error starting Google Drive authorization";
const MSG_DRIVE_FAILED: &str = "Error retrieving Google Drive files";

const REDIRECT_AUTH_SUCCESS: &str = "/?auth=success";
const REDIRECT_AUTH_ERROR: &str = "/?auth=error";

/// Query parameters Google appends to the redirect URI.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,
    /// Set instead of `code` when the user denies consent.
    #[serde(default)]
    pub error: Option<String>,
}

/// GET /auth/google
pub async fn start_auth(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let url = state
        .drive
        .authorization_url()
        .map_err(|e| ApiError::from_folio(e, MSG_AUTH_START_FAILED))?;
    Ok(Redirect::to(&url))
}

/// GET /auth/google/callback
///
/// Always redirects back to the page; the outcome is carried in `?auth=`.
pub async fn auth_callback(
    State(state): State<AppState>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Redirect {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => {
            warn!(error = %rejection, "malformed authorization callback query");
            return Redirect::to(REDIRECT_AUTH_ERROR);
        }
    };
    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        warn!(error = ?params.error, "authorization callback without a code");
        return Redirect::to(REDIRECT_AUTH_ERROR);
    };

    match state.drive.complete_authorization(&code).await {
        Ok(()) => {
            info!("Google Drive authorization completed");
            Redirect::to(REDIRECT_AUTH_SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "error retrieving access token");
            Redirect::to(REDIRECT_AUTH_ERROR)
        }
    }
}

/// GET /api/drive/files
pub async fn list_files(
    State(state): State<AppState>,
) -> Result<Json<FilesEnvelope>, ApiError> {
    let files = state
        .drive
        .list_files()
        .await
        .map_err(|e| ApiError::from_folio(e, MSG_DRIVE_FAILED))?;
    Ok(Json(FilesEnvelope {
        success: true,
        files,
    }))
}
