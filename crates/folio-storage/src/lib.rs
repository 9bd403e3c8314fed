// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed persistence for the Folio portfolio server.
//!
//! Contact records live in one pretty-printed JSON array that is rewritten
//! whole on every mutation. A single in-process writer lock serializes
//! mutations, and every write lands through a temp file plus rename.

pub mod file;
pub mod ids;
pub mod store;

pub use store::JsonContactStore;
