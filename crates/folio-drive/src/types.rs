// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Google OAuth token endpoint and the Drive v3 API.

use serde::Deserialize;

use folio_core::{Credentials, DriveFile};

/// Successful token endpoint response (authorization_code or refresh_token grant).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds from issue.
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenResponse {
    /// Build a complete credential set issued at `issued_at_ms`.
    ///
    /// `fallback` supplies the refresh token and scope when the response
    /// omits them, which Google does on refresh grants.
    pub fn into_credentials(self, issued_at_ms: i64, fallback: Option<&Credentials>) -> Credentials {
        Credentials {
            access_token: self.access_token,
            refresh_token: self
                .refresh_token
                .or_else(|| fallback.and_then(|c| c.refresh_token.clone())),
            expiry_date: self
                .expires_in
                .map(|secs| issued_at_ms.saturating_add(secs.saturating_mul(1000))),
            scope: self.scope.or_else(|| fallback.and_then(|c| c.scope.clone())),
            token_type: self.token_type,
        }
    }
}

/// Error body returned by the token endpoint (RFC 6749 section 5.2).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Body of `GET /drive/v3/files`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

/// Error envelope used by Google JSON APIs.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleApiErrorResponse {
    pub error: GoogleApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleApiErrorDetail {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
}
