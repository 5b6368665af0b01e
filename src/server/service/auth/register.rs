use dioxus_logger::tracing;
use futures::future::join_all;
use nexon_api::model::character::CharacterListEntry;
use sea_orm::TransactionTrait;

use crate::{
    model::{
        character::MIN_BOSS_LEVEL,
        user::{RegisterDto, UserDto},
    },
    server::{
        data::{
            character::{CharacterInfo, CharacterRepository},
            user::{user_character::UserCharacterRepository, UserRepository},
        },
        error::{auth::AuthError, nexon::NexonError, Error},
        service::{
            auth::{password::hash_password, user_dto, AuthService},
            character::CharacterService,
        },
    },
};

impl<'a> AuthService<'a> {
    /// Registers a new account with its main and sub characters.
    ///
    /// Every selected character must be on the account behind the provided API key, at or
    /// above [`MIN_BOSS_LEVEL`], and none may already belong to another user.
    /// The characters, the user and the ownership links are written in a single transaction:
    /// either all of them are stored or none are.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The newly created user
    /// - `Err(Error::ValidationError)` - The form was rejected before any lookup
    /// - `Err(Error::NexonApiError)` - The API key was rejected or the API is unavailable
    /// - `Err(Error::NexonError(CharacterNotOnAccount))` - A selected character isn't on the account
    /// - `Err(Error::NexonError(CharacterBelowLevelFloor))` - A selected character is too low to run bosses
    /// - `Err(Error::AuthError(CharacterAlreadyRegistered))` - A selected character is taken
    /// - `Err(Error::DbErr)` - The transaction failed and was rolled back
    pub async fn register(&self, dto: RegisterDto) -> Result<UserDto, Error> {
        dto.validate()?;

        let api_key = dto.nexon_api_key.trim();
        let list = CharacterService::new(self.db, self.nexon_client)
            .fetch_character_list(api_key)
            .await?;

        let entries = dto
            .character_names()
            .into_iter()
            .map(|name| {
                list.characters()
                    .find(|entry| entry.character_name == name)
                    .cloned()
                    .ok_or(NexonError::CharacterNotOnAccount(name))
            })
            .collect::<Result<Vec<CharacterListEntry>, _>>()?;

        if let Some(low) = entries
            .iter()
            .find(|entry| entry.character_level < MIN_BOSS_LEVEL)
        {
            return Err(NexonError::CharacterBelowLevelFloor {
                name: low.character_name.clone(),
                level: low.character_level,
                floor: MIN_BOSS_LEVEL,
            }
            .into());
        }

        self.ensure_unregistered(&entries).await?;

        let infos = join_all(entries.into_iter().map(|entry| async move {
            let info = CharacterInfo::from_list_entry(entry);
            match self.nexon_client.character_basic(api_key, &info.ocid).await {
                Ok(basic) => info.with_basic(basic),
                Err(e) => {
                    tracing::warn!(
                        ocid = %info.ocid,
                        "Failed to fetch basic profile during registration: {}",
                        e
                    );
                    info
                }
            }
        }))
        .await;

        let password_hash = hash_password(&dto.password)?;

        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        let mut characters = Vec::with_capacity(infos.len());
        for info in infos {
            characters.push(character_repo.upsert(info).await?);
        }

        // The main character is always first
        let main_character = characters
            .first()
            .cloned()
            .ok_or_else(|| Error::InternalError("Registration without a main character".into()))?;

        let user = UserRepository::new(&txn)
            .create(
                main_character.id,
                password_hash,
                api_key.to_string(),
                dto.data_collection_agreed,
            )
            .await?;

        let user_character_repo = UserCharacterRepository::new(&txn);
        for character in &characters {
            user_character_repo.create(user.id, character.id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            user_id = %user.id,
            characters = characters.len(),
            "Registered new user"
        );

        Ok(user_dto(&user, main_character))
    }

    async fn ensure_unregistered(&self, entries: &[CharacterListEntry]) -> Result<(), Error> {
        let ocids: Vec<String> = entries.iter().map(|entry| entry.ocid.clone()).collect();
        let stored = CharacterRepository::new(self.db)
            .get_many_by_ocids(&ocids)
            .await?;

        let stored_ids: Vec<i32> = stored.iter().map(|c| c.id).collect();
        let ownerships = UserCharacterRepository::new(self.db)
            .get_many_by_character_ids(&stored_ids)
            .await?;

        if let Some(taken) = ownerships
            .iter()
            .find_map(|ownership| stored.iter().find(|c| c.id == ownership.character_id))
        {
            return Err(AuthError::CharacterAlreadyRegistered(taken.name.clone()).into());
        }

        Ok(())
    }
}
