//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over `ConnectionTrait`, so the
//! same repository works on a pooled connection or inside a transaction.

pub mod character;
pub mod user;
