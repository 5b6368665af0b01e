//! Server application core modules.
//!
//! Everything behind the `server` feature: HTTP routing, session-based authentication backed by
//! Nexon Open API key checks, database access, and the scheduled character refresh.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
