mod change_main;
mod get_user_characters;
mod refresh_character;

use super::*;

use crate::server::service::user::user_character::UserCharacterService;
