// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Folio configuration system.

use figment::Jail;
use folio_config::diagnostic::ConfigError;
use folio_config::loader::build_figment;
use folio_config::model::FolioConfig;
use folio_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_folio_config() {
    let toml = r#"
[server]
host = "127.0.0.1"
port = 8080
static_dir = "public"
log_level = "debug"

[storage]
contacts_path = "/tmp/contacts.json"
token_path = "/tmp/token.json"

[google]
client_id = "id.apps.googleusercontent.com"
client_secret = "shh"
redirect_uri = "https://example.com/auth/google/callback"
scopes = ["https://www.googleapis.com/auth/drive.metadata.readonly"]
request_timeout_secs = 5
page_size = 25
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.static_dir, "public");
    assert_eq!(config.server.log_level, "debug");
    assert_eq!(config.storage.contacts_path, "/tmp/contacts.json");
    assert_eq!(config.storage.token_path, "/tmp/token.json");
    assert_eq!(
        config.google.client_id.as_deref(),
        Some("id.apps.googleusercontent.com")
    );
    assert_eq!(config.google.client_secret.as_deref(), Some("shh"));
    assert_eq!(config.google.scopes.len(), 1);
    assert_eq!(config.google.request_timeout_secs, 5);
    assert_eq!(config.google.page_size, 25);
    // Endpoints not mentioned keep their defaults.
    assert_eq!(config.google.token_url, "https://oauth2.googleapis.com/token");
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.static_dir, "public");
    assert_eq!(config.server.log_level, "info");
    assert_eq!(config.storage.contacts_path, "contacts.json");
    assert_eq!(config.storage.token_path, "token.json");
    assert!(config.google.client_id.is_none());
    assert!(config.google.client_secret.is_none());
    assert_eq!(
        config.google.redirect_uri,
        "http://localhost:3000/auth/google/callback"
    );
    assert_eq!(
        config.google.scopes,
        vec!["https://www.googleapis.com/auth/drive.readonly"]
    );
    assert_eq!(config.google.page_size, 10);
    assert_eq!(config.google.request_timeout_secs, 30);
}

/// Unknown field in [server] produces an error naming it.
#[test]
fn unknown_field_in_server_produces_error() {
    let toml = r#"
[server]
prot = 8080
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("prot"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[database]
url = "postgres://"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("database"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unknown key produces an UnknownKey diagnostic with a suggestion and valid keys.
#[test]
fn diagnostic_error_includes_suggestion_and_valid_keys() {
    let toml = r#"
[google]
cleint_id = "abc"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "cleint_id"
                && suggestion.as_deref() == Some("client_id")
                && valid_keys.contains("redirect_uri")
        })
    });
    assert!(found, "expected UnknownKey for cleint_id, got: {errors:?}");
}

/// A string where a port number belongs is reported as a type error.
#[test]
fn diagnostic_invalid_type_for_port() {
    let toml = r#"
[server]
port = "eighty"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject invalid type");
    assert!(
        errors.iter().any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))
            || matches!(e, ConfigError::Other(msg) if msg.contains("port"))),
        "got: {errors:?}"
    );
}

/// Validation errors surface through load_and_validate_str.
#[test]
fn validation_catches_zero_timeout() {
    let toml = r#"
[google]
request_timeout_secs = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero timeout should fail");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("request_timeout_secs"))
    }));
}

/// Serving the working directory would expose the token and contact files.
#[test]
fn static_dir_containing_token_file_is_rejected() {
    let toml = r#"
[server]
static_dir = "."
"#;

    let errors = load_and_validate_str(toml).expect_err("public state files should fail");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("storage.token_path"))
    }));
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("storage.contacts_path"))
    }));
}

/// ConfigError renders through miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "prot".to_string(),
        suggestion: Some("port".to_string()),
        valid_keys: "host, port, static_dir, log_level".to_string(),
        span: None,
        src: None,
    };
    assert!(error.code().is_some());
    let help = error.help().expect("should have help text").to_string();
    assert!(help.contains("did you mean `port`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("prot"));
}

/// FOLIO_* variables map onto sections without splitting key underscores.
#[test]
fn prefixed_env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "folio.toml",
            r#"
[server]
port = 4000

[google]
client_id = "from-file"
"#,
        )?;
        jail.set_env("FOLIO_GOOGLE_CLIENT_ID", "from-env");
        jail.set_env("FOLIO_STORAGE_CONTACTS_PATH", "data/contacts.json");

        let config: FolioConfig = build_figment().extract()?;
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.google.client_id.as_deref(), Some("from-env"));
        assert_eq!(config.storage.contacts_path, "data/contacts.json");
        Ok(())
    });
}

/// The unprefixed PORT / GOOGLE_* variables still configure the server.
#[test]
fn legacy_env_vars_are_honored() {
    Jail::expect_with(|jail| {
        jail.set_env("PORT", "8081");
        jail.set_env("GOOGLE_CLIENT_ID", "legacy-id");
        jail.set_env("GOOGLE_CLIENT_SECRET", "legacy-secret");
        jail.set_env("GOOGLE_REDIRECT_URI", "https://folio.example/auth/google/callback");

        let config: FolioConfig = build_figment().extract()?;
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.google.client_id.as_deref(), Some("legacy-id"));
        assert_eq!(config.google.client_secret.as_deref(), Some("legacy-secret"));
        assert_eq!(
            config.google.redirect_uri,
            "https://folio.example/auth/google/callback"
        );
        Ok(())
    });
}

/// Missing config files are silently skipped.
#[test]
fn missing_config_files_silently_skipped() {
    Jail::expect_with(|_jail| {
        let config: FolioConfig = build_figment().extract()?;
        assert_eq!(config.server.port, 3000);
        Ok(())
    });
}

/// An explicit config path is loaded and validated.
#[test]
fn load_and_validate_path_reads_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[server]\nport = 9000\n")?;
        let config = folio_config::load_and_validate_path(std::path::Path::new("custom.toml"))
            .expect("custom file should validate");
        assert_eq!(config.server.port, 9000);
        Ok(())
    });
}
