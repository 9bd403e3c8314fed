// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-file JSON reads and crash-safe writes.
//!
//! Writes go to a uniquely named sibling file which is then renamed over the
//! target, so readers observe either the previous or the new document.

use std::path::{Path, PathBuf};

use folio_core::FolioError;
use serde_json::Value;
use tracing::debug;

/// Read and parse a JSON document.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_json<T>(path: &Path) -> Result<Option<T>, FolioError>
where
    T: serde::de::DeserializeOwned,
{
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(FolioError::storage(
                format!("failed to read {}: {e}", path.display()),
                e,
            ));
        }
    };

    serde_json::from_str(&raw).map(Some).map_err(|e| {
        FolioError::storage(format!("malformed JSON in {}: {e}", path.display()), e)
    })
}

/// Serialize `value` as two-space indented JSON and atomically replace `path`.
pub async fn write_json_atomic<T>(path: &Path, value: &T) -> Result<(), FolioError>
where
    T: serde::Serialize + ?Sized,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            FolioError::storage(
                format!("failed to create directory {}: {e}", parent.display()),
                e,
            )
        })?;
    }

    let mut payload = serde_json::to_vec_pretty(value)
        .map_err(|e| FolioError::storage(format!("failed to encode JSON: {e}"), e))?;
    payload.push(b'\n');

    let temp_path = temp_sibling(path);
    tokio::fs::write(&temp_path, &payload).await.map_err(|e| {
        FolioError::storage(
            format!("failed to write {}: {e}", temp_path.display()),
            e,
        )
    })?;

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(FolioError::storage(
            format!("failed to replace {}: {e}", path.display()),
            e,
        ));
    }

    debug!(path = %path.display(), bytes = payload.len(), "JSON document written");
    Ok(())
}

/// Succeeds if `path` exists and holds well-formed JSON.
pub async fn check_readable(path: &Path) -> Result<(), FolioError> {
    match read_json::<Value>(path).await? {
        Some(_) => Ok(()),
        None => Err(FolioError::Storage {
            message: format!("{} does not exist", path.display()),
            source: None,
        }),
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let suffix = format!("{}.tmp", uuid::Uuid::new_v4().simple());
    match path.extension() {
        Some(ext) => path.with_extension(format!("{}.{suffix}", ext.to_string_lossy())),
        None => path.with_extension(suffix),
    }
}
