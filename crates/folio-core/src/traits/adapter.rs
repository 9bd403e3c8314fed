// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait that every backend implements.

use async_trait::async_trait;

use crate::error::FolioError;
use crate::types::{AdapterType, HealthStatus};

/// The base trait for all Folio adapters.
///
/// Provides identity and health reporting so the gateway can expose a
/// uniform `/health` view without knowing concrete backends.
#[async_trait]
pub trait PluginAdapter: Send + Sync + 'static {
    /// Returns the human-readable name of this adapter instance.
    fn name(&self) -> &str;

    /// Returns the semantic version of this adapter.
    fn version(&self) -> semver::Version;

    /// Returns the type of adapter.
    fn adapter_type(&self) -> AdapterType;

    /// Performs a health check and returns the adapter's current status.
    async fn health_check(&self) -> Result<HealthStatus, FolioError>;
}
