// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact API handlers.
//!
//! Handles POST/GET /api/contact, GET /api/contacts, GET/DELETE /api/contacts/{id}
//! and the unauthenticated GET /health.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use tracing::{debug, info};

use folio_core::{ContactRecord, ContactStore, HealthStatus, PluginAdapter};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::extract::ContactBody;
use crate::server::AppState;
use crate::validation;

const MSG_SUBMITTED: &str = "Your message has been sent successfully!";
const MSG_SUBMIT_FAILED: &str = "Error sending message. Please try again later.";
const MSG_LIST_FAILED: &str = "Error retrieving contacts";
const MSG_GET_FAILED: &str = "Error retrieving contact";
const MSG_DELETED: &str = "Contact deleted successfully";
const MSG_DELETE_FAILED: &str = "Error deleting contact";

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the contact store is unreadable.
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ContactBody(form): ContactBody,
) -> Result<(StatusCode, Json<Envelope<ContactRecord>>), ApiError> {
    let contact = validation::validate(form).map_err(|e| {
        debug!(error = %e, "rejected contact submission");
        ApiError::from_folio(e, MSG_SUBMIT_FAILED)
    })?;

    let record = state
        .store
        .append(contact)
        .await
        .map_err(|e| ApiError::from_folio(e, MSG_SUBMIT_FAILED))?;

    info!(id = %record.id, "new contact submission");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(record).with_message(MSG_SUBMITTED)),
    ))
}

/// GET /api/contact, GET /api/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<ContactRecord>>>, ApiError> {
    let records = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::from_folio(e, MSG_LIST_FAILED))?;
    let count = records.len();
    Ok(Json(Envelope::ok(records).with_count(count)))
}

/// GET /api/contacts/{id}
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ContactRecord>>, ApiError> {
    let record = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::from_folio(e, MSG_GET_FAILED))?;
    Ok(Json(Envelope::ok(record)))
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ContactRecord>>, ApiError> {
    let removed = state
        .store
        .delete_by_id(&id)
        .await
        .map_err(|e| ApiError::from_folio(e, MSG_DELETE_FAILED))?;

    info!(id = %removed.id, "contact deleted");
    Ok(Json(Envelope::ok(removed).with_message(MSG_DELETED)))
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = match state.store.health_check().await {
        Ok(HealthStatus::Healthy) => "ok",
        _ => "degraded",
    };
    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
