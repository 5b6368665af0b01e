use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::model::db::{CharacterOwnershipModel, MapleCharacterModel};

pub struct UserCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCharacterRepository<'a, C> {
    /// Creates a new instance of [`UserCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new entry for a character owned by a user
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `character_id` (`i32`): ID of the character entry in the database
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<CharacterOwnershipModel, DbErr> {
        let now = Utc::now().naive_utc();
        let user_character = entity::meyoil_user_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user_character.insert(self.db).await
    }

    /// Ownership entries for any of the provided character record IDs
    pub async fn get_many_by_character_ids(
        &self,
        character_ids: &[i32],
    ) -> Result<Vec<CharacterOwnershipModel>, DbErr> {
        entity::prelude::MeyoilUserCharacter::find()
            .filter(
                entity::meyoil_user_character::Column::CharacterId
                    .is_in(character_ids.iter().copied()),
            )
            .all(self.db)
            .await
    }

    /// Gets all characters owned by the provided user ID
    pub async fn get_owned_characters_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<MapleCharacterModel>, DbErr> {
        entity::prelude::MapleCharacter::find()
            .inner_join(entity::prelude::MeyoilUserCharacter)
            .filter(entity::meyoil_user_character::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Gets a character by ocid, only if the provided user owns it
    pub async fn get_owned_character(
        &self,
        user_id: i32,
        ocid: &str,
    ) -> Result<Option<MapleCharacterModel>, DbErr> {
        entity::prelude::MapleCharacter::find()
            .inner_join(entity::prelude::MeyoilUserCharacter)
            .filter(entity::meyoil_user_character::Column::UserId.eq(user_id))
            .filter(entity::maple_character::Column::Ocid.eq(ocid))
            .one(self.db)
            .await
    }

    /// Gets a character by name, only if the provided user owns it
    pub async fn get_owned_character_by_name(
        &self,
        user_id: i32,
        name: &str,
    ) -> Result<Option<MapleCharacterModel>, DbErr> {
        entity::prelude::MapleCharacter::find()
            .inner_join(entity::prelude::MeyoilUserCharacter)
            .filter(entity::meyoil_user_character::Column::UserId.eq(user_id))
            .filter(entity::maple_character::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Owned characters last refreshed before `cutoff`, oldest first, paired with their
    /// owner's Nexon API key
    ///
    /// # Arguments
    /// - `cutoff`: Characters refreshed at or after this time are skipped
    /// - `limit`: Maximum number of characters to return
    pub async fn get_stale_owned_characters(
        &self,
        cutoff: NaiveDateTime,
        limit: u64,
    ) -> Result<Vec<(MapleCharacterModel, String)>, DbErr> {
        let characters = entity::prelude::MapleCharacter::find()
            .inner_join(entity::prelude::MeyoilUserCharacter)
            .filter(entity::maple_character::Column::InfoUpdatedAt.lt(cutoff))
            .order_by_asc(entity::maple_character::Column::InfoUpdatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        let character_ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
        let owners = entity::prelude::MeyoilUserCharacter::find()
            .filter(entity::meyoil_user_character::Column::CharacterId.is_in(character_ids))
            .find_also_related(entity::prelude::MeyoilUser)
            .all(self.db)
            .await?;

        let api_keys: HashMap<i32, String> = owners
            .into_iter()
            .filter_map(|(ownership, user)| {
                user.map(|user| (ownership.character_id, user.nexon_api_key))
            })
            .collect();

        Ok(characters
            .into_iter()
            .filter_map(|character| {
                let api_key = api_keys.get(&character.id)?.clone();
                Some((character, api_key))
            })
            .collect())
    }
}
