// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contact store trait for record persistence backends.

use async_trait::async_trait;

use crate::error::FolioError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ContactRecord, NewContact};

/// Durable, ordered collection of contact records.
///
/// Insertion order is append order and deletion never reorders the
/// remaining records. Implementations must serialize mutations.
#[async_trait]
pub trait ContactStore: PluginAdapter {
    /// Returns every record in insertion order.
    async fn list(&self) -> Result<Vec<ContactRecord>, FolioError>;

    /// Assigns an id and creation timestamp, persists, and returns the record.
    async fn append(&self, contact: NewContact) -> Result<ContactRecord, FolioError>;

    /// Looks up one record; [`FolioError::NotFound`] if absent.
    async fn find_by_id(&self, id: &str) -> Result<ContactRecord, FolioError>;

    /// Removes one record and returns it; [`FolioError::NotFound`] if absent.
    async fn delete_by_id(&self, id: &str) -> Result<ContactRecord, FolioError>;
}
