//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model type aliases and session data
//! structures. These bridge database entities, HTTP handlers and the scheduler.

pub mod app;
pub mod db;
pub mod session;
