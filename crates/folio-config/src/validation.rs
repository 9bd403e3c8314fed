// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as bindable host names, non-empty file paths, and absolute URLs.

use std::path::{Component, Path, PathBuf};

use crate::diagnostic::ConfigError;
use crate::model::FolioConfig;

/// Upper bound accepted by the Drive `files.list` endpoint.
const MAX_PAGE_SIZE: u32 = 1000;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FolioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let host = config.server.host.trim();
    if host.is_empty() {
        fail("server.host must not be empty".to_string());
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-');
        if !is_valid_ip && !is_valid_hostname {
            fail(format!(
                "server.host `{host}` is not a valid IP address or hostname"
            ));
        }
    }

    if config.server.static_dir.trim().is_empty() {
        fail("server.static_dir must not be empty".to_string());
    }
    if config.storage.contacts_path.trim().is_empty() {
        fail("storage.contacts_path must not be empty".to_string());
    }
    if config.storage.token_path.trim().is_empty() {
        fail("storage.token_path must not be empty".to_string());
    }

    if !config.server.static_dir.trim().is_empty() {
        let public_root = normalize(Path::new(&config.server.static_dir));
        for (key, value) in [
            ("storage.contacts_path", &config.storage.contacts_path),
            ("storage.token_path", &config.storage.token_path),
        ] {
            if !value.trim().is_empty() && normalize(Path::new(value)).starts_with(&public_root) {
                fail(format!(
                    "{key} `{value}` is inside server.static_dir `{}` and would be publicly downloadable",
                    config.server.static_dir
                ));
            }
        }
    }

    let google = &config.google;
    for (key, value) in [
        ("google.redirect_uri", &google.redirect_uri),
        ("google.auth_url", &google.auth_url),
        ("google.token_url", &google.token_url),
        ("google.drive_api_url", &google.drive_api_url),
    ] {
        if !is_http_url(value) {
            fail(format!("{key} must be an http(s) URL, got `{value}`"));
        }
    }

    if google.scopes.is_empty() {
        fail("google.scopes must list at least one scope".to_string());
    }
    if google.request_timeout_secs == 0 {
        fail("google.request_timeout_secs must be greater than 0".to_string());
    }
    if google.page_size == 0 || google.page_size > MAX_PAGE_SIZE {
        fail(format!(
            "google.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
            google.page_size
        ));
    }
    if google.client_id.is_some() && google.client_secret.is_none() {
        tracing::warn!("google.client_id is set without google.client_secret");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Absolute, lexically normalized form of `path` (no symlink resolution).
fn normalize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(r) if !r.is_empty() && !r.starts_with('/'))
}
