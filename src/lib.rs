//! # Gradebook API
//!
//! A REST API built with Rust, Axum, and SQLx exposing student, teacher, and
//! grade records, with username/password authentication issuing JWT bearer
//! tokens that gate all write operations. Reads are public.
//!
//! ## Architecture
//!
//! The codebase follows a modular layout:
//!
//! ```text
//! src/
//! ├── config/           # Env-driven configuration (database, JWT, CORS)
//! ├── middleware/       # AuthUser bearer-token extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration and login
//! │   ├── students/    # Student records
//! │   ├── teachers/    # Teacher records
//! │   └── grades/      # Grade records
//! ├── format.rs         # JSON/XML response formatting
//! ├── utils/            # Errors, JWT, password hashing
//! └── router.rs         # Top-level router
//! ```
//!
//! Each feature module has a `controller.rs` (HTTP handlers), `service.rs`
//! (business logic), `model.rs` (records, DTOs, filters), and `router.rs`.
//!
//! ## Request flow
//!
//! Inbound request → routing → (writes only) bearer-token check →
//! service → SQLite via the shared pool → response formatter (JSON or XML per
//! the `format` query parameter) → outbound response.
//!
//! ## Environment variables
//!
//! ```bash
//! DATABASE_URL=sqlite://gradebook.db?mode=rwc
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! CORS_ALLOWED_ORIGINS=*
//! PORT=3000
//! ```
//!
//! ## Security considerations
//!
//! - Passwords are hashed with bcrypt; plaintext is never stored
//! - Login failures do not reveal whether the username or password was wrong
//! - Store errors are the only error class whose message is passed through

pub mod config;
pub mod docs;
pub mod format;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
