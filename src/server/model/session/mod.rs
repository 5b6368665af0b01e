//! Session data models.
//!
//! Type-safe wrappers for values kept in the tower-sessions store (Valkey-backed in
//! production, in-memory in tests).

pub mod user;
