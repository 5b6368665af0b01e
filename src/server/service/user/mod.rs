//! User service layer.
//!
//! Account reads, settings and password changes. Character roster operations live in
//! [`user_character`].

pub mod user_character;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{
        ChangePasswordDto, PrivacySettingsDto, UserDto, UserSettingsDto, WeeklyResetSettingsDto,
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::db::{MapleCharacterModel, UserModel},
        service::{
            auth::{
                password::{hash_password, verify_password},
                user_dto,
            },
            retry::RetryContext,
        },
    },
};

/// Service for managing user account operations.
///
/// Reads use automatic retry logic for transient database failures.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves user information with their main character details.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found with main character information
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    /// - `Err(Error::InternalError)` - Main character record not found (FK constraint violation)
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get user ID {}", user_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                match UserRepository::new(&db).get(user_id).await? {
                    None => Ok(None),
                    Some((user, maybe_main_character)) => {
                        let main_character = require_main_character(&user, maybe_main_character)?;

                        Ok(Some(user_dto(&user, main_character)))
                    }
                }
            })
        })
        .await
    }

    pub async fn get_settings(&self, user_id: i32) -> Result<UserSettingsDto, Error> {
        let (user, main_character) = self.load_user(user_id).await?;

        Ok(settings_dto(&user, main_character))
    }

    pub async fn update_privacy(
        &self,
        user_id: i32,
        dto: PrivacySettingsDto,
    ) -> Result<UserSettingsDto, Error> {
        UserRepository::new(self.db)
            .update_data_collection_agreed(user_id, dto.data_collection_agreed)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        self.get_settings(user_id).await
    }

    pub async fn update_weekly_reset(
        &self,
        user_id: i32,
        dto: WeeklyResetSettingsDto,
    ) -> Result<UserSettingsDto, Error> {
        UserRepository::new(self.db)
            .update_weekly_reset_enabled(user_id, dto.weekly_reset_enabled)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        self.get_settings(user_id).await
    }

    /// Replaces the password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(Error::ValidationError)` - New password too short, mismatched or unchanged
    /// - `Err(Error::AuthError(CurrentPasswordIncorrect))` - Current password is wrong
    pub async fn change_password(&self, user_id: i32, dto: ChangePasswordDto) -> Result<(), Error> {
        dto.validate()?;

        let (user, _) = self.load_user(user_id).await?;

        if !verify_password(&dto.current_password, &user.password_hash)? {
            return Err(AuthError::CurrentPasswordIncorrect(user_id).into());
        }

        let password_hash = hash_password(&dto.new_password)?;
        UserRepository::new(self.db)
            .update_credentials(user_id, password_hash, None)
            .await?;

        tracing::info!(user_id = %user_id, "Changed password");

        Ok(())
    }

    /// Loads a user that is expected to exist, e.g. one taken from the session.
    pub(crate) async fn load_user(
        &self,
        user_id: i32,
    ) -> Result<(UserModel, MapleCharacterModel), Error> {
        let (user, maybe_main_character) = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        let main_character = require_main_character(&user, maybe_main_character)?;

        Ok((user, main_character))
    }
}

fn require_main_character(
    user: &UserModel,
    maybe_main_character: Option<MapleCharacterModel>,
) -> Result<MapleCharacterModel, Error> {
    // Would only occur if the foreign key constraint requiring the main character to exist
    // is not enforced
    maybe_main_character.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find main character information for user ID {} with main character ID {}",
            user.id, user.main_character_id
        ))
    })
}

fn settings_dto(user: &UserModel, main_character: MapleCharacterModel) -> UserSettingsDto {
    UserSettingsDto {
        main_character_name: main_character.name,
        data_collection_agreed: user.data_collection_agreed,
        weekly_reset_enabled: user.weekly_reset_enabled,
    }
}
