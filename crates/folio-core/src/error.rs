// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Folio portfolio server.

use strum::{Display, EnumString};
use thiserror::Error;

/// Which contact field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Why a contact field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationReason {
    /// Absent, empty, or whitespace-only.
    #[strum(serialize = "is required")]
    Missing,
    /// Present but malformed.
    #[strum(serialize = "is invalid")]
    Invalid,
}

/// The primary error type used across all Folio adapter traits and core operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// A submitted field is missing or malformed.
    #[error("validation error: {field} {reason}")]
    Validation {
        field: ContactField,
        reason: ValidationReason,
    },

    /// No contact record exists with the given id.
    #[error("contact not found: {id}")]
    NotFound { id: String },

    /// Backing file unreadable, unwritable, or corrupt.
    #[error("storage error: {message}")]
    Storage {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A delegated call was attempted without usable credentials.
    #[error("authorization required: no Google Drive credentials, visit /auth/google")]
    AuthRequired,

    /// Upstream provider call failed (token endpoint, Drive API).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Missing or invalid configuration detected at runtime.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// Shorthand for a storage error wrapping an underlying cause.
    pub fn storage<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FolioError::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a provider error wrapping an underlying cause.
    pub fn provider<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FolioError::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
