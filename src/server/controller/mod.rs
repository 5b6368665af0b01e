//! HTTP controller endpoints for the Meyoil web API.
//!
//! Axum handlers for authentication, the logged in user's account and roster, and the boss
//! catalog. Handlers read the user from the tower-sessions session, delegate to services and
//! map results to JSON responses documented with utoipa.

pub mod auth;
pub mod boss;
pub mod user;
pub mod util;
