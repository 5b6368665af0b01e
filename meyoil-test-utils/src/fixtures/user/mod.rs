use std::sync::LazyLock;

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_API_KEY, TEST_CLASS, TEST_PASSWORD, TEST_WORLD},
    error::TestError,
    fixtures::nexon::factory::character_image_url,
    TestContext,
};

/// Hashing is slow in debug builds, so every fixture user shares one hash.
static TEST_PASSWORD_HASH: LazyLock<String> = LazyLock::new(|| {
    let salt = SaltString::encode_b64(b"meyoil-test-salt").unwrap();
    Argon2::default()
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .unwrap()
        .to_string()
});

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a character record.
    ///
    /// Passing `None` for `level` leaves world, class, level and image empty, as for a record
    /// whose profile was never fetched.
    pub async fn insert_mock_character(
        &self,
        ocid: &str,
        name: &str,
        level: Option<i32>,
    ) -> Result<entity::maple_character::Model, TestError> {
        let now = Utc::now().naive_utc();
        let known = level.is_some();

        Ok(
            entity::prelude::MapleCharacter::insert(entity::maple_character::ActiveModel {
                ocid: ActiveValue::Set(ocid.to_string()),
                name: ActiveValue::Set(name.to_string()),
                world_name: ActiveValue::Set(known.then(|| TEST_WORLD.to_string())),
                character_class: ActiveValue::Set(known.then(|| TEST_CLASS.to_string())),
                level: ActiveValue::Set(level),
                image: ActiveValue::Set(known.then(|| character_image_url(name))),
                created_at: ActiveValue::Set(now),
                info_updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user with [`TEST_PASSWORD`] and [`TEST_API_KEY`], consent given and weekly
    /// reset disabled.
    pub async fn insert_user(
        &self,
        main_character_id: i32,
    ) -> Result<entity::meyoil_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::MeyoilUser::insert(entity::meyoil_user::ActiveModel {
                main_character_id: ActiveValue::Set(main_character_id),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.clone()),
                nexon_api_key: ActiveValue::Set(TEST_API_KEY.to_string()),
                data_collection_agreed: ActiveValue::Set(true),
                weekly_reset_enabled: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_user_character_ownership(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::meyoil_user_character::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::MeyoilUserCharacter::insert(
            entity::meyoil_user_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a level 260 main character, its user and the ownership link.
    pub async fn insert_user_with_mock_character(
        &self,
        ocid: &str,
        name: &str,
    ) -> Result<
        (
            entity::meyoil_user::Model,
            entity::meyoil_user_character::Model,
            entity::maple_character::Model,
        ),
        TestError,
    > {
        let character_model = self.insert_mock_character(ocid, name, Some(260)).await?;
        let user_model = self.insert_user(character_model.id).await?;
        let ownership_model = self
            .insert_user_character_ownership(user_model.id, character_model.id)
            .await?;

        Ok((user_model, ownership_model, character_model))
    }

    /// Insert a sub character owned by `user_id`.
    pub async fn insert_mock_character_for_user(
        &self,
        user_id: i32,
        ocid: &str,
        name: &str,
        level: Option<i32>,
    ) -> Result<
        (
            entity::meyoil_user_character::Model,
            entity::maple_character::Model,
        ),
        TestError,
    > {
        let character_model = self.insert_mock_character(ocid, name, level).await?;
        let ownership_model = self
            .insert_user_character_ownership(user_id, character_model.id)
            .await?;

        Ok((ownership_model, character_model))
    }
}
