pub mod user_character;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::db::{MapleCharacterModel, UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Weekly reset starts disabled; privacy consent is recorded as given at registration.
    pub async fn create(
        &self,
        main_character_id: i32,
        password_hash: String,
        nexon_api_key: String,
        data_collection_agreed: bool,
    ) -> Result<UserModel, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::meyoil_user::ActiveModel {
            main_character_id: ActiveValue::Set(main_character_id),
            password_hash: ActiveValue::Set(password_hash),
            nexon_api_key: ActiveValue::Set(nexon_api_key),
            data_collection_agreed: ActiveValue::Set(data_collection_agreed),
            weekly_reset_enabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user with their main character
    pub async fn get(
        &self,
        user_id: i32,
    ) -> Result<Option<(UserModel, Option<MapleCharacterModel>)>, DbErr> {
        entity::prelude::MeyoilUser::find_by_id(user_id)
            .find_also_related(entity::maple_character::Entity)
            .one(self.db)
            .await
    }

    /// Gets the user whose main character has the given name
    pub async fn get_by_main_character_name(
        &self,
        name: &str,
    ) -> Result<Option<(UserModel, Option<MapleCharacterModel>)>, DbErr> {
        entity::prelude::MeyoilUser::find()
            .find_also_related(entity::maple_character::Entity)
            .filter(entity::maple_character::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn update_main_character(
        &self,
        user_id: i32,
        new_main_character_id: i32,
    ) -> Result<Option<UserModel>, DbErr> {
        self.update_with(user_id, |user_am| {
            user_am.main_character_id = ActiveValue::Set(new_main_character_id);
        })
        .await
    }

    /// Replaces the password hash, and the stored API key when one is given
    pub async fn update_credentials(
        &self,
        user_id: i32,
        password_hash: String,
        nexon_api_key: Option<String>,
    ) -> Result<Option<UserModel>, DbErr> {
        self.update_with(user_id, |user_am| {
            user_am.password_hash = ActiveValue::Set(password_hash);
            if let Some(nexon_api_key) = nexon_api_key {
                user_am.nexon_api_key = ActiveValue::Set(nexon_api_key);
            }
        })
        .await
    }

    pub async fn update_data_collection_agreed(
        &self,
        user_id: i32,
        agreed: bool,
    ) -> Result<Option<UserModel>, DbErr> {
        self.update_with(user_id, |user_am| {
            user_am.data_collection_agreed = ActiveValue::Set(agreed);
        })
        .await
    }

    pub async fn update_weekly_reset_enabled(
        &self,
        user_id: i32,
        enabled: bool,
    ) -> Result<Option<UserModel>, DbErr> {
        self.update_with(user_id, |user_am| {
            user_am.weekly_reset_enabled = ActiveValue::Set(enabled);
        })
        .await
    }

    async fn update_with<F>(&self, user_id: i32, apply: F) -> Result<Option<UserModel>, DbErr>
    where
        F: FnOnce(&mut entity::meyoil_user::ActiveModel),
    {
        let user = match entity::prelude::MeyoilUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        apply(&mut user_am);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
