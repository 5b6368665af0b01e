//! Fixtures used while a test runs.
//!
//! - `nexon` - Nexon Open API payloads and mock endpoints
//! - `user` - Characters, users and ownership records

pub mod nexon;
pub mod user;
