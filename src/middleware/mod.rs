//! Request-processing middleware.
//!
//! - [`auth`]: the `AuthUser` extractor gating all write operations behind a
//!   valid `Authorization: Bearer <token>` header.

pub mod auth;
