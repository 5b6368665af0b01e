pub use super::maple_character::Entity as MapleCharacter;
pub use super::meyoil_user::Entity as MeyoilUser;
pub use super::meyoil_user_character::Entity as MeyoilUserCharacter;
