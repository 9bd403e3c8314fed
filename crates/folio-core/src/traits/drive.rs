// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delegated storage-provider trait (Google Drive).

use async_trait::async_trait;

use crate::error::FolioError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{AuthState, DriveFile};

/// A cloud-storage provider reached through an OAuth authorization-code flow.
#[async_trait]
pub trait DriveProvider: PluginAdapter {
    /// Provider consent URL the browser is redirected to.
    fn authorization_url(&self) -> Result<String, FolioError>;

    /// Exchanges a one-time authorization code for credentials and stores them.
    async fn complete_authorization(&self, code: &str) -> Result<(), FolioError>;

    /// Current OAuth state.
    async fn auth_state(&self) -> AuthState;

    /// Lists the most recent files, capped at the configured page size.
    ///
    /// Fails with [`FolioError::AuthRequired`] before authorization.
    async fn list_files(&self) -> Result<Vec<DriveFile>, FolioError>;
}
