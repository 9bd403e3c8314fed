// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON response bodies.
//!
//! Every API response is an [`Envelope`]; the Drive listing uses
//! [`FilesEnvelope`] because its payload key is `files` rather than `data`.

use serde::Serialize;

use folio_core::DriveFile;

/// Uniform response wrapper: `{success, message?, count?, data?, error?}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl Envelope<()> {
    /// Failure response with a user-facing message and optional detail.
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            error,
        }
    }
}

/// Body of `GET /api/drive/files`.
#[derive(Debug, Serialize)]
pub struct FilesEnvelope {
    pub success: bool,
    pub files: Vec<DriveFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_absent_fields() {
        let env = Envelope::ok(vec![1, 2]).with_count(2);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "count": 2, "data": [1, 2] })
        );
    }

    #[test]
    fn failure_envelope_carries_message_and_error() {
        let env = Envelope::failure("Contact not found", None);
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Contact not found" })
        );

        let env = Envelope::failure("Error retrieving contacts", Some("disk on fire".into()));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["error"], "disk on fire");
    }
}
