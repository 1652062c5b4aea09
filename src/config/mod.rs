//! Environment-driven configuration.
//!
//! Each submodule owns one concern and exposes a `from_env()` constructor:
//!
//! - [`cors`]: allowed origins for cross-origin requests
//! - [`database`]: SQLite pool initialization and migrations
//! - [`jwt`]: token signing secret and expiry

pub mod cors;
pub mod database;
pub mod jwt;
