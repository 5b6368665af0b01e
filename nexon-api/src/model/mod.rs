//! Response models for the Nexon Open API.

pub mod character;
pub mod error;
