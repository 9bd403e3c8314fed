// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shape checks for contact submissions.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use folio_core::{ContactField, FolioError, NewContact, ValidationReason};

/// `<local>@<domain>.<tld>`, nothing stricter.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+\..+$").expect("email pattern compiles"));

/// A contact submission as decoded from the request body, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Trim every field and check presence, then the email shape.
///
/// Presence is checked for all three fields before the email pattern, so a
/// submission missing its message reports the missing field even if the
/// email is also malformed.
pub fn validate(form: ContactForm) -> Result<NewContact, FolioError> {
    let name = required(ContactField::Name, form.name)?;
    let email = required(ContactField::Email, form.email)?;
    let message = required(ContactField::Message, form.message)?;

    if !is_valid_email(&email) {
        return Err(FolioError::Validation {
            field: ContactField::Email,
            reason: ValidationReason::Invalid,
        });
    }

    Ok(NewContact {
        name,
        email,
        message,
    })
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn required(field: ContactField, value: Option<String>) -> Result<String, FolioError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(FolioError::Validation {
            field,
            reason: ValidationReason::Missing,
        }),
    }
}
