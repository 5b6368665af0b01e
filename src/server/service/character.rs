//! Character directory backed by the Nexon Open API.
//!
//! Stored characters are read from the database; anything the roster needs but the stored
//! record lacks is fetched from the Nexon Open API with the owner's API key and merged in
//! with [`merge_profile`]. Fetch failures for individual characters never fail the whole
//! listing: the stored record is returned as-is.

use dioxus_logger::tracing;
use futures::future::join_all;
use nexon_api::model::character::{CharacterBasic, CharacterList};
use sea_orm::DatabaseConnection;

use crate::{
    model::character::{
        merge_profile, sort_by_level_desc, CharacterDto, CharacterPreviewDto, CharacterProfile,
        MIN_BOSS_LEVEL,
    },
    server::{
        data::character::CharacterRepository, error::Error, model::db::MapleCharacterModel,
        service::retry::RetryContext,
    },
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    nexon_client: &'a nexon_api::Client,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection, nexon_client: &'a nexon_api::Client) -> Self {
        Self { db, nexon_client }
    }

    /// Fetches every character on the account behind `api_key`, retrying transient failures.
    pub async fn fetch_character_list(&self, api_key: &str) -> Result<CharacterList, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let nexon_client = self.nexon_client.clone();
        let api_key = api_key.to_string();

        ctx.execute_with_retry("Nexon character list fetch", |_| {
            let nexon_client = nexon_client.clone();
            let api_key = api_key.clone();

            Box::pin(async move { Ok(nexon_client.character_list(&api_key).await?) })
        })
        .await
    }

    /// Lists the account's characters that can run weekly bosses, highest level first.
    ///
    /// Characters below [`MIN_BOSS_LEVEL`] are dropped. Images come from the basic profile
    /// endpoint; a character whose profile can't be fetched is still listed without one.
    ///
    /// # Returns
    /// - `Ok(Vec<CharacterPreviewDto>)` - Eligible characters, possibly empty
    /// - `Err(Error::NexonApiError)` - The character list itself could not be fetched
    pub async fn list_boss_characters(
        &self,
        api_key: &str,
    ) -> Result<Vec<CharacterPreviewDto>, Error> {
        let list = self.fetch_character_list(api_key).await?;

        let eligible = list
            .into_characters()
            .filter(|entry| entry.character_level >= MIN_BOSS_LEVEL);

        let mut previews = join_all(eligible.map(|entry| async move {
            let image = match self
                .nexon_client
                .character_basic(api_key, &entry.ocid)
                .await
            {
                Ok(basic) => basic.character_image,
                Err(e) => {
                    tracing::warn!(
                        ocid = %entry.ocid,
                        "Failed to fetch basic profile for character preview: {}",
                        e
                    );
                    None
                }
            };

            CharacterPreviewDto {
                ocid: entry.ocid,
                name: entry.character_name,
                world: entry.world_name,
                class: entry.character_class,
                level: entry.character_level,
                image,
            }
        }))
        .await;

        previews.sort_by(|a, b| b.level.cmp(&a.level));

        Ok(previews)
    }

    /// Completes stored records that lack world, class or level and persists the result.
    ///
    /// The stored record is the primary side of the merge so nothing already known is
    /// overwritten. Complete records are returned untouched without a request.
    pub async fn enhance_characters(
        &self,
        api_key: &str,
        characters: Vec<MapleCharacterModel>,
    ) -> Result<Vec<MapleCharacterModel>, Error> {
        let enhanced = join_all(characters.into_iter().map(|character| async move {
            let stored = profile_from_model(&character);
            if !stored.is_incomplete() {
                return Ok(character);
            }

            let fetched = match self
                .nexon_client
                .character_basic(api_key, &character.ocid)
                .await
            {
                Ok(basic) => profile_from_basic(basic),
                Err(e) => {
                    tracing::warn!(
                        ocid = %character.ocid,
                        "Failed to enhance incomplete character record: {}",
                        e
                    );
                    return Ok(character);
                }
            };

            let merged = merge_profile(stored, fetched);
            let updated = CharacterRepository::new(self.db)
                .update_info(character.id, merged)
                .await?;

            Ok::<_, Error>(updated.unwrap_or(character))
        }))
        .await;

        enhanced.into_iter().collect()
    }

    /// Re-fetches a character's basic profile and persists it.
    ///
    /// Fresh upstream values win; stored values only fill fields the API left empty.
    pub async fn refresh_character(
        &self,
        api_key: &str,
        character: MapleCharacterModel,
    ) -> Result<MapleCharacterModel, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let nexon_client = self.nexon_client.clone();
        let api_key = api_key.to_string();
        let ocid = character.ocid.clone();

        let basic = ctx
            .execute_with_retry(&format!("refresh of character {}", ocid), |_| {
                let nexon_client = nexon_client.clone();
                let api_key = api_key.clone();
                let ocid = ocid.clone();

                Box::pin(async move { Ok(nexon_client.character_basic(&api_key, &ocid).await?) })
            })
            .await?;

        let merged = merge_profile(profile_from_basic(basic), profile_from_model(&character));
        let updated = CharacterRepository::new(self.db)
            .update_info(character.id, merged)
            .await?;

        updated.ok_or_else(|| {
            Error::InternalError(format!(
                "Character ID {} disappeared while being refreshed",
                character.id
            ))
        })
    }
}

pub fn profile_from_model(character: &MapleCharacterModel) -> CharacterProfile {
    CharacterProfile {
        name: Some(character.name.clone()),
        world: character.world_name.clone(),
        class: character.character_class.clone(),
        level: character.level,
        image: character.image.clone(),
    }
}

pub fn profile_from_basic(basic: CharacterBasic) -> CharacterProfile {
    CharacterProfile {
        name: Some(basic.character_name),
        world: Some(basic.world_name),
        class: Some(basic.character_class),
        level: Some(basic.character_level),
        image: basic.character_image,
    }
}

/// Converts stored characters to DTOs, flagging the main character, highest level first.
pub fn to_character_dtos(
    characters: Vec<MapleCharacterModel>,
    main_character_id: i32,
) -> Vec<CharacterDto> {
    let mut dtos: Vec<CharacterDto> = characters
        .into_iter()
        .map(|c| CharacterDto {
            is_main: c.id == main_character_id,
            id: c.id,
            ocid: c.ocid,
            name: c.name,
            world: c.world_name,
            class: c.character_class,
            level: c.level,
            image: c.image,
        })
        .collect();

    sort_by_level_desc(&mut dtos);

    dtos
}
