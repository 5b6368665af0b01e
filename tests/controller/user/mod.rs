//! Tests for the logged in user's account and roster endpoints.

mod change_main_character;
mod change_password;
mod get_user_characters;
mod refresh_character;
mod settings;

use super::*;
