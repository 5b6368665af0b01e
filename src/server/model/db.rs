//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so signatures
//! don't need to spell out the `entity` crate paths.

/// A Meyoil account.
///
/// # Fields (from `entity::meyoil_user::Model`)
/// - `id` - Primary key
/// - `main_character_id` - Foreign key to the main character, which doubles as the login name
/// - `password_hash` - Argon2 PHC string
/// - `nexon_api_key` - Key used for all Nexon Open API calls made on the user's behalf
/// - `data_collection_agreed` - Privacy consent flag
/// - `weekly_reset_enabled` - Whether boss selections reset with the weekly boss reset
pub type UserModel = entity::meyoil_user::Model;

/// Link between an account and a character it owns; each character has at most one owner.
pub type CharacterOwnershipModel = entity::meyoil_user_character::Model;

/// Cached MapleStory character profile.
///
/// World, class, level and image may be missing until the profile has been fetched from the
/// Nexon Open API. `info_updated_at` drives the scheduled refresh.
pub type MapleCharacterModel = entity::maple_character::Model;
