//! Authentication service layer.
//!
//! Accounts are identified by their main character's name. Registration and password resets
//! prove account ownership with a Nexon Open API key: the key's character list must contain
//! the characters being claimed.

pub mod login;
pub mod password;
pub mod register;
pub mod reset_password;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::model::db::{MapleCharacterModel, UserModel},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    nexon_client: &'a nexon_api::Client,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, nexon_client: &'a nexon_api::Client) -> Self {
        Self { db, nexon_client }
    }
}

pub(crate) fn user_dto(user: &UserModel, main_character: MapleCharacterModel) -> UserDto {
    UserDto {
        id: user.id,
        main_character_id: main_character.id,
        main_character_name: main_character.name,
    }
}
