//! Client for the MapleStory character endpoints of the Nexon Open API.
//!
//! Every request is authorized with the API key of the account being queried, so the
//! [`Client`] holds no credentials of its own. Callers pass the key per request.
//!
//! ```no_run
//! # async fn example() -> Result<(), nexon_api::Error> {
//! let client = nexon_api::Client::builder()
//!     .user_agent("meyoil/0.1 (admin@example.com)")
//!     .build()?;
//!
//! let list = client.character_list("live_xxxxxxxx").await?;
//! for character in list.characters() {
//!     println!("{} Lv.{}", character.character_name, character.character_level);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod client;
mod endpoints;
pub mod error;
pub mod model;

pub use builder::ClientBuilder;
pub use client::Client;
pub use error::Error;

/// Default base URL of the Nexon Open API.
pub const DEFAULT_BASE_URL: &str = "https://open.api.nexon.com";

/// Header carrying the per-account API key.
pub const API_KEY_HEADER: &str = "x-nxopen-api-key";
