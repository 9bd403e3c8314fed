// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Folio portfolio server.
//!
//! This crate provides the error taxonomy, the domain types, and the adapter
//! traits that the gateway is written against. Backends (the JSON contact
//! store, the Google Drive client) implement the traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ContactField, FolioError, ValidationReason};
pub use types::{
    AdapterType, AuthState, ContactRecord, Credentials, DriveFile, HealthStatus, NewContact,
};

pub use traits::{ContactStore, DriveProvider, PluginAdapter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folio_error_has_all_variants() {
        let _validation = FolioError::Validation {
            field: ContactField::Email,
            reason: ValidationReason::Invalid,
        };
        let _not_found = FolioError::NotFound { id: "x".into() };
        let _storage = FolioError::storage("read failed", std::io::Error::other("test"));
        let _auth = FolioError::AuthRequired;
        let _provider = FolioError::Provider {
            message: "test".into(),
            source: None,
        };
        let _config = FolioError::Config("test".into());
        let _internal = FolioError::Internal("test".into());
    }

    #[test]
    fn validation_error_names_field_and_reason() {
        let err = FolioError::Validation {
            field: ContactField::Name,
            reason: ValidationReason::Missing,
        };
        assert_eq!(err.to_string(), "validation error: name is required");

        let err = FolioError::Validation {
            field: ContactField::Email,
            reason: ValidationReason::Invalid,
        };
        assert_eq!(err.to_string(), "validation error: email is invalid");
    }

    #[test]
    fn adapter_type_round_trips_through_strings() {
        use std::str::FromStr;

        for variant in [AdapterType::Storage, AdapterType::Provider] {
            let parsed = AdapterType::from_str(&variant.to_string()).expect("should parse back");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn auth_state_display() {
        assert_eq!(AuthState::Unauthenticated.to_string(), "unauthenticated");
        assert_eq!(AuthState::Authenticated.to_string(), "authenticated");
    }

    #[test]
    fn all_traits_are_exported() {
        fn _assert_plugin_adapter<T: PluginAdapter>() {}
        fn _assert_contact_store<T: ContactStore>() {}
        fn _assert_drive_provider<T: DriveProvider>() {}
    }
}
