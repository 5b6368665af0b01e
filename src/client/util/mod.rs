#[cfg(feature = "web")]
pub mod api;
pub mod generation;

pub use generation::{KeyedGeneration, RequestGeneration};
