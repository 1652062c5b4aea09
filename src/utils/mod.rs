//! Shared utilities: error types, JWT helpers, and password hashing.

pub mod errors;
pub mod jwt;
pub mod password;
