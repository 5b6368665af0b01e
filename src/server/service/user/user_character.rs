use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        character::CharacterDto,
        user::{ChangeMainDto, MainCharacterChangedDto},
    },
    server::{
        data::user::{user_character::UserCharacterRepository, UserRepository},
        error::{auth::AuthError, Error},
        service::{
            character::{to_character_dtos, CharacterService},
            user::UserService,
        },
    },
};

/// Roster operations on the characters a user owns.
pub struct UserCharacterService<'a> {
    db: &'a DatabaseConnection,
    nexon_client: &'a nexon_api::Client,
}

impl<'a> UserCharacterService<'a> {
    /// Creates a new instance of [`UserCharacterService`]
    pub fn new(db: &'a DatabaseConnection, nexon_client: &'a nexon_api::Client) -> Self {
        Self { db, nexon_client }
    }

    /// Lists the user's characters, highest level first, main character flagged.
    ///
    /// Records missing world, class or level are completed from the Nexon Open API with the
    /// user's stored key and persisted before being returned.
    pub async fn get_user_characters(&self, user_id: i32) -> Result<Vec<CharacterDto>, Error> {
        let (user, _) = UserService::new(self.db).load_user(user_id).await?;

        let characters = UserCharacterRepository::new(self.db)
            .get_owned_characters_by_user_id(user_id)
            .await?;

        let characters = CharacterService::new(self.db, self.nexon_client)
            .enhance_characters(&user.nexon_api_key, characters)
            .await?;

        Ok(to_character_dtos(characters, user.main_character_id))
    }

    /// Re-fetches one owned character from the Nexon Open API.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The refreshed character
    /// - `Err(Error::AuthError(CharacterNotOwned))` - The user does not own `ocid`
    /// - `Err(Error::NexonApiError)` - The profile could not be fetched after retries
    pub async fn refresh_character(&self, user_id: i32, ocid: &str) -> Result<CharacterDto, Error> {
        let (user, _) = UserService::new(self.db).load_user(user_id).await?;

        let character = UserCharacterRepository::new(self.db)
            .get_owned_character(user_id, ocid)
            .await?
            .ok_or_else(|| AuthError::CharacterNotOwned(ocid.to_string(), user_id))?;

        let refreshed = CharacterService::new(self.db, self.nexon_client)
            .refresh_character(&user.nexon_api_key, character)
            .await?;

        let mut dtos = to_character_dtos(vec![refreshed], user.main_character_id);

        dtos.pop()
            .ok_or_else(|| Error::InternalError("Refreshed character was lost".to_string()))
    }

    /// Makes another owned character the user's main character, and thus their login name.
    ///
    /// Changing to the current main character succeeds without a write.
    pub async fn change_main(
        &self,
        user_id: i32,
        dto: ChangeMainDto,
    ) -> Result<MainCharacterChangedDto, Error> {
        let (user, previous_main) = UserService::new(self.db).load_user(user_id).await?;

        let name = dto.new_main_character_name.trim();
        let new_main = UserCharacterRepository::new(self.db)
            .get_owned_character_by_name(user_id, name)
            .await?
            .ok_or_else(|| AuthError::CharacterNotOwned(name.to_string(), user_id))?;

        if new_main.id != user.main_character_id {
            UserRepository::new(self.db)
                .update_main_character(user_id, new_main.id)
                .await?;

            tracing::info!(
                user_id = %user_id,
                "Changed main character from {} to {}",
                previous_main.name,
                new_main.name
            );
        }

        Ok(MainCharacterChangedDto {
            previous_main_character_name: previous_main.name,
            new_main_character_name: new_main.name,
        })
    }
}
