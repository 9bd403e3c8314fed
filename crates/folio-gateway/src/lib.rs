// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Folio portfolio server.
//!
//! Exposes the contact CRUD API, the Google OAuth entry and callback routes,
//! the Drive file listing, and the static portfolio page. Handlers are written
//! against the `ContactStore` and `DriveProvider` traits so any backend can be
//! plugged in.

pub mod drive;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod server;
pub mod validation;

pub use error::ApiError;
pub use server::{build_router, start_server, AppState};
