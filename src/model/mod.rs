//! Types shared between the web client and the server.
//!
//! Request/response DTOs live next to the pure boss-run model so both halves of the
//! application compute payouts the same way.

pub mod api;
pub mod boss;
pub mod character;
pub mod meso;
pub mod selection;
pub mod user;
