// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifier and timestamp assignment for new records.

use chrono::{DateTime, Utc};
use folio_core::ContactRecord;

/// Pick the id and creation time for a record appended after `existing`.
///
/// The id is the clock in epoch milliseconds, bumped past the largest numeric
/// id already stored so that a clock step backwards (or two appends in the
/// same millisecond) never produces a duplicate. The timestamp is truncated
/// to milliseconds and never earlier than the last record's.
pub fn assign(now: DateTime<Utc>, existing: &[ContactRecord]) -> (String, DateTime<Utc>) {
    let now_ms = now.timestamp_millis();

    let largest = existing
        .iter()
        .filter_map(|r| r.id.parse::<i64>().ok())
        .max();
    let mut candidate = match largest {
        Some(largest) if largest >= now_ms => largest + 1,
        _ => now_ms,
    };
    while existing.iter().any(|r| r.id == candidate.to_string()) {
        candidate += 1;
    }

    let truncated = DateTime::from_timestamp_millis(now_ms).unwrap_or(now);
    let created_at = match existing.last() {
        Some(last) if last.created_at > truncated => last.created_at,
        _ => truncated,
    };

    (candidate.to_string(), created_at)
}
