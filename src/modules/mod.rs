//! Feature modules, one per resource plus authentication.
//!
//! Each module follows the same structure: `controller.rs` for HTTP handlers,
//! `service.rs` for business logic against the store, `model.rs` for records,
//! DTOs, and filters, and `router.rs` for route wiring.

pub mod auth;
pub mod grades;
pub mod students;
pub mod teachers;
