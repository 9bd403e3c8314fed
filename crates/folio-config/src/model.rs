// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Folio server.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Folio configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// HTTP listener and static asset settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Contact store and token file locations.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Google OAuth and Drive API settings.
    #[serde(default)]
    pub google: GoogleConfig,
}

impl FolioConfig {
    /// Copy of this config with secrets replaced by a placeholder, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.google.client_secret.is_some() {
            config.google.client_secret = Some(REDACTED.to_string());
        }
        config
    }
}

const REDACTED: &str = "[redacted]";

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `index.html` and the page assets.
    ///
    /// Everything under it is publicly readable, so it must not contain the
    /// contact or token files.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// File locations for persisted state.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// JSON file holding the ordered contact records.
    #[serde(default = "default_contacts_path")]
    pub contacts_path: String,

    /// JSON file holding the current OAuth credential set.
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            contacts_path: default_contacts_path(),
            token_path: default_token_path(),
        }
    }
}

fn default_contacts_path() -> String {
    "contacts.json".to_string()
}

fn default_token_path() -> String {
    "token.json".to_string()
}

/// Google OAuth client and Drive API configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GoogleConfig {
    /// OAuth client id. `None` disables the authorization redirect.
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth client secret.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Callback URL registered with the OAuth client.
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,

    /// Scopes requested on authorization.
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,

    /// Consent screen endpoint.
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// Token exchange and refresh endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Drive v3 API base URL.
    #[serde(default = "default_drive_api_url")]
    pub drive_api_url: String,

    /// Timeout applied to every outbound Google request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Number of files returned by the Drive listing.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: default_redirect_uri(),
            scopes: default_scopes(),
            auth_url: default_auth_url(),
            token_url: default_token_url(),
            drive_api_url: default_drive_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| REDACTED),
            )
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("drive_api_url", &self.drive_api_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn default_redirect_uri() -> String {
    "http://localhost:3000/auth/google/callback".to_string()
}

fn default_scopes() -> Vec<String> {
    vec!["https://www.googleapis.com/auth/drive.readonly".to_string()]
}

fn default_auth_url() -> String {
    "https://accounts.google.com/o/oauth2/v2/auth".to_string()
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_drive_api_url() -> String {
    "https://www.googleapis.com/drive/v3".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_debug_redacts_secret() {
        let google = GoogleConfig {
            client_secret: Some("GOCSPX-topsecret".to_string()),
            ..GoogleConfig::default()
        };
        let debug = format!("{google:?}");
        assert!(!debug.contains("topsecret"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn redacted_copy_hides_secret_only() {
        let mut config = FolioConfig::default();
        config.google.client_id = Some("client.apps.googleusercontent.com".to_string());
        config.google.client_secret = Some("GOCSPX-topsecret".to_string());

        let shown = config.redacted();
        assert_eq!(shown.google.client_secret.as_deref(), Some("[redacted]"));
        assert_eq!(shown.google.client_id, config.google.client_id);
    }

    #[test]
    fn redacted_copy_leaves_absent_secret_absent() {
        let shown = FolioConfig::default().redacted();
        assert!(shown.google.client_secret.is_none());
    }
}
