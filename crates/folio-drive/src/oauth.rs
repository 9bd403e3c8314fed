// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OAuth 2.0 authorization-code flow and credential lifecycle.
//!
//! [`TokenManager`] owns the single credential set: it is loaded from the
//! token file at startup, replaced wholesale when the authorization callback
//! completes, and refreshed on use when the access token is about to expire.

use std::path::PathBuf;

use chrono::Utc;
use reqwest::Url;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use folio_config::model::GoogleConfig;
use folio_core::{AuthState, Credentials, FolioError};
use folio_storage::file;

use crate::types::{TokenErrorResponse, TokenResponse};

/// Refresh this long before the recorded expiry.
const EXPIRY_SKEW_MS: i64 = 60_000;

/// Holds the delegated-access credentials and talks to the token endpoint.
pub struct TokenManager {
    http: reqwest::Client,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: String,
    scopes: Vec<String>,
    auth_url: String,
    token_url: String,
    token_path: PathBuf,
    credentials: RwLock<Option<Credentials>>,
    refresh_lock: Mutex<()>,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .field("token_path", &self.token_path)
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Create a manager and reload any credential set persisted at `token_path`.
    ///
    /// A missing or unreadable token file leaves the manager unauthenticated.
    pub async fn load(
        http: reqwest::Client,
        google: &GoogleConfig,
        token_path: impl Into<PathBuf>,
    ) -> Self {
        let token_path = token_path.into();
        let credentials = match file::read_json::<Credentials>(&token_path).await {
            Ok(Some(creds)) => {
                info!(path = %token_path.display(), "loaded stored Google Drive credentials");
                Some(creds)
            }
            Ok(None) => {
                debug!(path = %token_path.display(), "no stored Google Drive credentials");
                None
            }
            Err(e) => {
                warn!(
                    path = %token_path.display(),
                    error = %e,
                    "ignoring unreadable token file; starting unauthenticated"
                );
                None
            }
        };

        Self {
            http,
            client_id: google.client_id.clone(),
            client_secret: google.client_secret.clone(),
            redirect_uri: google.redirect_uri.clone(),
            scopes: google.scopes.clone(),
            auth_url: google.auth_url.clone(),
            token_url: google.token_url.clone(),
            token_path,
            credentials: RwLock::new(credentials),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Whether a credential set is currently held.
    pub async fn state(&self) -> AuthState {
        if self.credentials.read().await.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    /// Consent-screen URL requesting offline access for the configured scopes.
    pub fn authorization_url(&self) -> Result<String, FolioError> {
        let client_id = self.require_client_id()?;
        let scope = self.scopes.join(" ");
        let url = Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", client_id),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", scope.as_str()),
                ("access_type", "offline"),
            ],
        )
        .map_err(|e| FolioError::Config(format!("invalid google.auth_url: {e}")))?;
        Ok(url.into())
    }

    /// Exchange a one-time authorization code, persist the result, and apply it.
    ///
    /// Any previously held credential set is overwritten unconditionally,
    /// including by a refresh that was already running when this was called.
    pub async fn exchange_code(&self, code: &str) -> Result<(), FolioError> {
        let client_id = self.require_client_id()?;
        let issued_at = Utc::now().timestamp_millis();

        let mut form = vec![
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", client_id),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];
        if let Some(secret) = self.client_secret.as_deref() {
            form.push(("client_secret", secret));
        }

        // Held across request and store so an in-flight refresh of the
        // previous credential set cannot land after this one.
        let _guard = self.refresh_lock.lock().await;
        let response = self.request_token(&form).await?;
        self.store(response.into_credentials(issued_at, None)).await?;
        info!("Google Drive authentication successful");
        Ok(())
    }

    /// A usable access token, refreshing first if the current one is about to expire.
    pub async fn access_token(&self) -> Result<String, FolioError> {
        if let Some(token) = self.fresh_token().await? {
            return Ok(token);
        }

        // Serialize refreshes; another request may have refreshed while we waited.
        let _guard = self.refresh_lock.lock().await;
        if let Some(token) = self.fresh_token().await? {
            return Ok(token);
        }

        let current = self
            .credentials
            .read()
            .await
            .clone()
            .ok_or(FolioError::AuthRequired)?;
        let Some(refresh_token) = current.refresh_token.as_deref() else {
            warn!("Google access token expired and no refresh token is stored");
            return Err(FolioError::AuthRequired);
        };

        let client_id = self.require_client_id()?;
        let issued_at = Utc::now().timestamp_millis();
        let mut form = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
        ];
        if let Some(secret) = self.client_secret.as_deref() {
            form.push(("client_secret", secret));
        }

        let response = self.request_token(&form).await?;
        let refreshed = response.into_credentials(issued_at, Some(&current));
        let token = refreshed.access_token.clone();
        self.store(refreshed).await?;
        debug!("Google access token refreshed");
        Ok(token)
    }

    /// Current token if present and not near expiry; `AuthRequired` if absent.
    async fn fresh_token(&self) -> Result<Option<String>, FolioError> {
        let guard = self.credentials.read().await;
        let creds = guard.as_ref().ok_or(FolioError::AuthRequired)?;
        if creds.expires_within(Utc::now().timestamp_millis(), EXPIRY_SKEW_MS) {
            Ok(None)
        } else {
            Ok(Some(creds.access_token.clone()))
        }
    }

    /// Persist then apply a complete credential set.
    async fn store(&self, credentials: Credentials) -> Result<(), FolioError> {
        file::write_json_atomic(&self.token_path, &credentials).await?;
        *self.credentials.write().await = Some(credentials);
        Ok(())
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, FolioError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(form)
            .send()
            .await
            .map_err(|e| crate::request_error("token request", e))?;

        let status = response.status();
        debug!(status = %status, "token endpoint responded");

        if status.is_success() {
            return response.json::<TokenResponse>().await.map_err(|e| {
                FolioError::provider(format!("failed to parse token response: {e}"), e)
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<TokenErrorResponse>(&body) {
            Ok(err) => match err.error_description {
                Some(description) => {
                    format!("token endpoint returned {status}: {} ({description})", err.error)
                }
                None => format!("token endpoint returned {status}: {}", err.error),
            },
            Err(_) => format!("token endpoint returned {status}: {body}"),
        };
        Err(FolioError::Provider {
            message,
            source: None,
        })
    }

    fn require_client_id(&self) -> Result<&str, FolioError> {
        self.client_id.as_deref().ok_or_else(|| {
            FolioError::Config(
                "Google Drive integration is not configured: set GOOGLE_CLIENT_ID".to_string(),
            )
        })
    }
}
