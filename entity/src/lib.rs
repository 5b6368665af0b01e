pub mod prelude;

pub mod maple_character;
pub mod meyoil_user;
pub mod meyoil_user_character;
