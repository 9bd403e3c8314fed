// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Google Drive v3 files API.
//!
//! Provides [`DriveClient`], which implements [`DriveProvider`] on top of a
//! [`TokenManager`]. There is no retry: a failed upstream call surfaces as a
//! provider error on the request that triggered it.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use folio_config::model::GoogleConfig;
use folio_core::{
    AdapterType, AuthState, DriveFile, DriveProvider, FolioError, HealthStatus, PluginAdapter,
};

use crate::oauth::TokenManager;
use crate::types::{FileListResponse, GoogleApiErrorResponse};

/// Fields requested for each listed file.
const FILE_FIELDS: &str = "files(id, name, webViewLink, mimeType)";

/// Build the shared HTTP client with an explicit per-request timeout.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, FolioError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FolioError::provider(format!("failed to build HTTP client: {e}"), e))
}

/// Google Drive provider adapter.
#[derive(Debug, Clone)]
pub struct DriveClient {
    http: reqwest::Client,
    api_url: String,
    page_size: u32,
    tokens: Arc<TokenManager>,
}

impl DriveClient {
    /// Build a client from the `[google]` config section, reloading any
    /// credentials stored at `token_path`.
    pub async fn from_config(
        google: &GoogleConfig,
        token_path: impl Into<PathBuf>,
    ) -> Result<Self, FolioError> {
        let http = build_http_client(Duration::from_secs(google.request_timeout_secs))?;
        let tokens = TokenManager::load(http.clone(), google, token_path).await;
        Ok(Self {
            http,
            api_url: google.drive_api_url.trim_end_matches('/').to_string(),
            page_size: google.page_size,
            tokens: Arc::new(tokens),
        })
    }

    /// The token manager backing this client.
    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }
}

#[async_trait]
impl PluginAdapter for DriveClient {
    fn name(&self) -> &str {
        "google-drive"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, FolioError> {
        Ok(match self.tokens.state().await {
            AuthState::Authenticated => HealthStatus::Healthy,
            AuthState::Unauthenticated => HealthStatus::Degraded("not authorized".to_string()),
        })
    }
}

#[async_trait]
impl DriveProvider for DriveClient {
    fn authorization_url(&self) -> Result<String, FolioError> {
        self.tokens.authorization_url()
    }

    async fn complete_authorization(&self, code: &str) -> Result<(), FolioError> {
        self.tokens.exchange_code(code).await
    }

    async fn auth_state(&self) -> AuthState {
        self.tokens.state().await
    }

    async fn list_files(&self) -> Result<Vec<DriveFile>, FolioError> {
        let token = self.tokens.access_token().await?;
        let page_size = self.page_size.to_string();

        let response = self
            .http
            .get(format!("{}/files", self.api_url))
            .bearer_auth(token)
            .query(&[("pageSize", page_size.as_str()), ("fields", FILE_FIELDS)])
            .send()
            .await
            .map_err(|e| crate::request_error("Drive files request", e))?;

        let status = response.status();
        debug!(status = %status, "Drive files response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<GoogleApiErrorResponse>(&body) {
                Ok(api_err) => format!("Drive API returned {status}: {}", api_err.error.message),
                Err(_) => format!("Drive API returned {status}: {body}"),
            };
            return Err(FolioError::Provider {
                message,
                source: None,
            });
        }

        let mut listing = response.json::<FileListResponse>().await.map_err(|e| {
            FolioError::provider(format!("failed to parse Drive files response: {e}"), e)
        })?;
        listing.files.truncate(self.page_size as usize);
        Ok(listing.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn google_config(server_uri: &str) -> GoogleConfig {
        GoogleConfig {
            client_id: Some("client-123".into()),
            client_secret: Some("secret-456".into()),
            token_url: format!("{server_uri}/token"),
            drive_api_url: format!("{server_uri}/drive/v3"),
            ..GoogleConfig::default()
        }
    }

    fn write_token(dir: &tempfile::TempDir, access_token: &str) {
        let creds = folio_core::Credentials {
            access_token: access_token.into(),
            refresh_token: Some("1//r".into()),
            expiry_date: None,
            scope: None,
            token_type: Some("Bearer".into()),
        };
        std::fs::write(
            dir.path().join("token.json"),
            serde_json::to_string(&creds).unwrap(),
        )
        .unwrap();
    }

    async fn client(google: &GoogleConfig, dir: &tempfile::TempDir) -> DriveClient {
        DriveClient::from_config(google, dir.path().join("token.json"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn list_files_before_authorization_requires_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let drive = client(&google_config(&server.uri()), &dir).await;

        assert_eq!(drive.auth_state().await, AuthState::Unauthenticated);
        assert!(matches!(
            drive.list_files().await,
            Err(FolioError::AuthRequired)
        ));
    }

    #[tokio::test]
    async fn list_files_sends_bearer_token_and_page_size() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/drive/v3/files"))
            .and(header("authorization", "Bearer ya29.live"))
            .and(query_param("pageSize", "10"))
            .and(query_param("fields", FILE_FIELDS))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "files": [
                    {
                        "id": "f1",
                        "name": "resume.pdf",
                        "webViewLink": "https://drive.google.com/file/d/f1/view",
                        "mimeType": "application/pdf"
                    },
                    { "id": "f2", "name": "notes" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        write_token(&dir, "ya29.live");
        let drive = client(&google_config(&server.uri()), &dir).await;

        let files = drive.list_files().await.unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "resume.pdf");
        assert_eq!(files[0].mime_type.as_deref(), Some("application/pdf"));
        assert!(files[1].web_view_link.is_none());
    }

    #[tokio::test]
    async fn list_files_with_no_files_field_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/drive/v3/files"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        write_token(&dir, "ya29.live");
        let drive = client(&google_config(&server.uri()), &dir).await;

        assert!(drive.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_files_caps_result_at_page_size() {
        let server = MockServer::start().await;
        let files: Vec<_> = (0..5)
            .map(|i| serde_json::json!({ "id": format!("f{i}"), "name": format!("file {i}") }))
            .collect();
        Mock::given(method("GET"))
            .and(path("/drive/v3/files"))
            .and(query_param("pageSize", "3"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "files": files })),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        write_token(&dir, "ya29.live");
        let google = GoogleConfig {
            page_size: 3,
            ..google_config(&server.uri())
        };
        let drive = client(&google, &dir).await;

        assert_eq!(drive.list_files().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn upstream_error_becomes_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/drive/v3/files"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "code": 401, "message": "Invalid Credentials" }
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        write_token(&dir, "ya29.revoked");
        let drive = client(&google_config(&server.uri()), &dir).await;

        let err = drive.list_files().await.unwrap_err();
        assert!(matches!(err, FolioError::Provider { .. }));
        assert!(err.to_string().contains("Invalid Credentials"), "got: {err}");
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/drive/v3/files"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "files": [] }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        write_token(&dir, "ya29.live");
        let google = GoogleConfig {
            request_timeout_secs: 1,
            ..google_config(&server.uri())
        };
        let drive = client(&google, &dir).await;

        let err = drive.list_files().await.unwrap_err();
        assert!(err.to_string().contains("timed out"), "got: {err}");
    }

    #[tokio::test]
    async fn complete_authorization_then_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "ya29.new",
                "refresh_token": "1//new",
                "expires_in": 3599,
                "token_type": "Bearer"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/drive/v3/files"))
            .and(header("authorization", "Bearer ya29.new"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "files": [{ "id": "f1", "name": "cv.docx" }]
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let drive = client(&google_config(&server.uri()), &dir).await;
        drive.complete_authorization("code-1").await.unwrap();

        assert_eq!(drive.auth_state().await, AuthState::Authenticated);
        assert_eq!(
            drive.health_check().await.unwrap(),
            HealthStatus::Healthy
        );
        assert_eq!(drive.list_files().await.unwrap()[0].id, "f1");
    }

    #[tokio::test]
    async fn health_is_degraded_before_authorization() {
        let dir = tempfile::tempdir().unwrap();
        let drive = client(&GoogleConfig::default(), &dir).await;
        assert!(matches!(
            drive.health_check().await.unwrap(),
            HealthStatus::Degraded(_)
        ));
    }
}
