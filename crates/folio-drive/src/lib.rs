// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Drive provider adapter for the Folio portfolio server.
//!
//! Implements the OAuth 2.0 authorization-code flow with refresh-on-use
//! token handling, and a read-only listing of the authorized user's files.

pub mod client;
pub mod oauth;
pub mod types;

pub use client::{build_http_client, DriveClient};
pub use oauth::TokenManager;

use folio_core::FolioError;

/// Map a transport failure into a provider error, calling out timeouts.
pub(crate) fn request_error(what: &str, e: reqwest::Error) -> FolioError {
    let message = if e.is_timeout() {
        format!("{what} timed out: {e}")
    } else {
        format!("{what} failed: {e}")
    };
    FolioError::provider(message, e)
}
