#[cfg(feature = "server")]
mod controller;
