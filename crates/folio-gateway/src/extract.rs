// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request body extractor for contact submissions.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};

use crate::error::ApiError;
use crate::validation::ContactForm;

/// A contact form decoded from either a JSON or a url-encoded body.
///
/// Decoding failures become a 400 envelope instead of axum's plain-text
/// rejection.
#[derive(Debug)]
pub struct ContactBody(pub ContactForm);

impl<S> FromRequest<S> for ContactBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(form) = Form::<ContactForm>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
            Ok(Self(form))
        } else {
            let Json(form) = Json::<ContactForm>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
            Ok(Self(form))
        }
    }
}
