// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-file implementation of the ContactStore trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use folio_core::{
    AdapterType, ContactRecord, ContactStore, FolioError, HealthStatus, NewContact, PluginAdapter,
};

use crate::file;
use crate::ids;

/// Contact store backed by a single JSON array on disk.
///
/// Every mutation reads the whole collection, edits it in memory, and writes
/// it back. That is fine for a portfolio inbox; it is not meant to scale past
/// a few thousand records. Mutations hold `write_lock` for the full
/// read-modify-write cycle so concurrent requests cannot lose updates.
pub struct JsonContactStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonContactStore {
    /// Open the store at `path`, creating an empty collection if the file is absent.
    ///
    /// An existing file is left untouched; it is validated lazily on first read.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, FolioError> {
        let path = path.into();
        let exists = tokio::fs::try_exists(&path).await.map_err(|e| {
            FolioError::storage(format!("failed to stat {}: {e}", path.display()), e)
        })?;

        if !exists {
            file::write_json_atomic(&path, &Vec::<ContactRecord>::new()).await?;
            info!(path = %path.display(), "contacts database initialized");
        } else {
            debug!(path = %path.display(), "contacts database found");
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<ContactRecord>, FolioError> {
        file::read_json(&self.path).await?.ok_or_else(|| FolioError::Storage {
            message: format!("contacts database {} is missing", self.path.display()),
            source: None,
        })
    }
}

#[async_trait]
impl PluginAdapter for JsonContactStore {
    fn name(&self) -> &str {
        "json-contacts"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        Ok(match file::check_readable(&self.path).await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        })
    }
}

#[async_trait]
impl ContactStore for JsonContactStore {
    async fn list(&self) -> Result<Vec<ContactRecord>, FolioError> {
        self.read_all().await
    }

    async fn append(&self, contact: NewContact) -> Result<ContactRecord, FolioError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_all().await?;
        let (id, created_at) = ids::assign(Utc::now(), &records);
        let record = ContactRecord {
            id,
            name: contact.name,
            email: contact.email,
            message: contact.message,
            created_at,
        };
        records.push(record.clone());
        file::write_json_atomic(&self.path, &records).await?;

        debug!(id = %record.id, total = records.len(), "contact appended");
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<ContactRecord, FolioError> {
        self.read_all()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| FolioError::NotFound { id: id.to_string() })
    }

    async fn delete_by_id(&self, id: &str) -> Result<ContactRecord, FolioError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_all().await?;
        let index = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| FolioError::NotFound { id: id.to_string() })?;
        let removed = records.remove(index);
        file::write_json_atomic(&self.path, &records).await?;

        debug!(id = %removed.id, remaining = records.len(), "contact deleted");
        Ok(removed)
    }
}
