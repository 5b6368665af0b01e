use chrono::Utc;
use nexon_api::model::character::{CharacterBasic, CharacterListEntry};
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter,
};

use crate::{model::character::CharacterProfile, server::model::db::MapleCharacterModel};

/// Character data as known when a character is first stored.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterInfo {
    pub ocid: String,
    pub name: String,
    pub world_name: Option<String>,
    pub character_class: Option<String>,
    pub level: Option<i32>,
    pub image: Option<String>,
}

impl CharacterInfo {
    /// Builds from a character list entry, which carries no image.
    pub fn from_list_entry(entry: CharacterListEntry) -> Self {
        Self {
            ocid: entry.ocid,
            name: entry.character_name,
            world_name: Some(entry.world_name),
            character_class: Some(entry.character_class),
            level: Some(entry.character_level),
            image: None,
        }
    }

    /// Overlays the fuller basic profile onto the list entry data.
    pub fn with_basic(self, basic: CharacterBasic) -> Self {
        Self {
            ocid: self.ocid,
            name: basic.character_name,
            world_name: Some(basic.world_name),
            character_class: Some(basic.character_class),
            level: Some(basic.character_level),
            image: basic.character_image.or(self.image),
        }
    }
}

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character or, when the ocid is already stored, overwrites its profile
    pub async fn upsert(&self, info: CharacterInfo) -> Result<MapleCharacterModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::MapleCharacter::insert(entity::maple_character::ActiveModel {
            ocid: ActiveValue::Set(info.ocid),
            name: ActiveValue::Set(info.name),
            world_name: ActiveValue::Set(info.world_name),
            character_class: ActiveValue::Set(info.character_class),
            level: ActiveValue::Set(info.level),
            image: ActiveValue::Set(info.image),
            created_at: ActiveValue::Set(now),
            info_updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::maple_character::Column::Ocid)
                .update_columns([
                    entity::maple_character::Column::Name,
                    entity::maple_character::Column::WorldName,
                    entity::maple_character::Column::CharacterClass,
                    entity::maple_character::Column::Level,
                    entity::maple_character::Column::Image,
                    entity::maple_character::Column::InfoUpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_by_ocid(&self, ocid: &str) -> Result<Option<MapleCharacterModel>, DbErr> {
        entity::prelude::MapleCharacter::find()
            .filter(entity::maple_character::Column::Ocid.eq(ocid))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ocids(
        &self,
        ocids: &[String],
    ) -> Result<Vec<MapleCharacterModel>, DbErr> {
        entity::prelude::MapleCharacter::find()
            .filter(entity::maple_character::Column::Ocid.is_in(ocids.iter().cloned()))
            .all(self.db)
            .await
    }

    /// Writes the known fields of `profile` and bumps the info timestamp.
    ///
    /// Fields missing from `profile` keep their stored value. Returns `Ok(None)` if the
    /// character does not exist.
    pub async fn update_info(
        &self,
        character_id: i32,
        profile: CharacterProfile,
    ) -> Result<Option<MapleCharacterModel>, DbErr> {
        let character = match entity::prelude::MapleCharacter::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.into_active_model();
        if let Some(name) = profile.name {
            character_am.name = ActiveValue::Set(name);
        }
        if profile.world.is_some() {
            character_am.world_name = ActiveValue::Set(profile.world);
        }
        if profile.class.is_some() {
            character_am.character_class = ActiveValue::Set(profile.class);
        }
        if profile.level.is_some() {
            character_am.level = ActiveValue::Set(profile.level);
        }
        if profile.image.is_some() {
            character_am.image = ActiveValue::Set(profile.image);
        }
        character_am.info_updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }
}
