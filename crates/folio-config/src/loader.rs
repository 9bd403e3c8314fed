// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./folio.toml` > `~/.config/folio/folio.toml` > `/etc/folio/folio.toml`
//! with environment variable overrides via the `FOLIO_` prefix, and finally the
//! unprefixed `PORT` / `GOOGLE_*` variables that older deployments set.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::FolioConfig;

/// Unprefixed variables honored for compatibility with existing `.env` files.
const LEGACY_ENV_KEYS: &[&str] = &[
    "PORT",
    "GOOGLE_CLIENT_ID",
    "GOOGLE_CLIENT_SECRET",
    "GOOGLE_REDIRECT_URI",
];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/folio/folio.toml` (system-wide)
/// 3. `~/.config/folio/folio.toml` (user XDG config)
/// 4. `./folio.toml` (local directory)
/// 5. `FOLIO_*` environment variables
/// 6. `PORT`, `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `GOOGLE_REDIRECT_URI`
pub fn load_config() -> Result<FolioConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<FolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .merge(legacy_env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file("/etc/folio/folio.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("folio/folio.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("folio.toml"))
        .merge(env_provider())
        .merge(legacy_env_provider())
}

/// `FOLIO_*` provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")`: `FOLIO_GOOGLE_CLIENT_ID` must map
/// to `google.client_id`, not `google.client.id`.
fn env_provider() -> Env {
    Env::prefixed("FOLIO_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("google_", "google.", 1);
        mapped.into()
    })
}

/// Provider for the unprefixed variables in [`LEGACY_ENV_KEYS`].
fn legacy_env_provider() -> Env {
    Env::raw().only(LEGACY_ENV_KEYS).map(|key| {
        match key.as_str() {
            "port" => "server.port".to_string(),
            other => other.replacen("google_", "google.", 1),
        }
        .into()
    })
}
