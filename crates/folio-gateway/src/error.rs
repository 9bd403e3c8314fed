// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping of [`FolioError`] onto HTTP status codes and failure envelopes.

use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};

use folio_core::{FolioError, ValidationReason};

use crate::envelope::Envelope;

pub const MSG_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_INVALID_EMAIL: &str = "Please provide a valid email address";
pub const MSG_CONTACT_NOT_FOUND: &str = "Contact not found";
pub const MSG_INVALID_BODY: &str = "Invalid request body";
pub const MSG_FILE_NOT_FOUND: &str = "File not found";
pub const MSG_SERVER_ERROR: &str = "Server error";

/// A failed request, rendered as `{success:false, message, error?}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: Option<String>,
}

impl ApiError {
    /// Map a domain error; `fallback` is the message used for 500s.
    ///
    /// Validation and not-found errors carry their own fixed wording.
    pub fn from_folio(err: FolioError, fallback: &str) -> Self {
        match &err {
            FolioError::Validation { reason, .. } => {
                let message = match reason {
                    ValidationReason::Missing => MSG_FIELDS_REQUIRED,
                    ValidationReason::Invalid => MSG_INVALID_EMAIL,
                };
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: message.to_string(),
                    error: Some(err.to_string()),
                }
            }
            FolioError::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: MSG_CONTACT_NOT_FOUND.to_string(),
                error: None,
            },
            _ => {
                tracing::error!(error = %err, "{fallback}");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: fallback.to_string(),
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// A request body that could not be decoded.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: MSG_INVALID_BODY.to_string(),
            error: Some(detail.into()),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.to_string(),
            error: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(Envelope::failure(self.message, self.error)),
        )
            .into_response()
    }
}
