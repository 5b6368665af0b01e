use reqwasm::http::Method;

use crate::{
    client::util::api::{get, send},
    model::{
        api::MessageDto,
        character::CharacterDto,
        user::{
            ChangeMainDto, ChangePasswordDto, MainCharacterChangedDto, PrivacySettingsDto,
            UserSettingsDto, WeeklyResetSettingsDto,
        },
    },
};

/// Retrieve user characters from API
pub async fn get_user_characters() -> Result<Vec<CharacterDto>, String> {
    get("/api/user/characters").await
}

pub async fn refresh_character(ocid: &str) -> Result<CharacterDto, String> {
    send(
        Method::POST,
        &format!("/api/user/characters/{}/refresh", ocid),
        &(),
    )
    .await
}

pub async fn change_main_character(
    new_main_character_name: &str,
) -> Result<MainCharacterChangedDto, String> {
    send(
        Method::PUT,
        "/api/user/main-character",
        &ChangeMainDto {
            new_main_character_name: new_main_character_name.to_string(),
        },
    )
    .await
}

pub async fn change_password(dto: &ChangePasswordDto) -> Result<MessageDto, String> {
    send(Method::PUT, "/api/user/password", dto).await
}

pub async fn get_settings() -> Result<UserSettingsDto, String> {
    get("/api/user/settings").await
}

pub async fn update_privacy(data_collection_agreed: bool) -> Result<UserSettingsDto, String> {
    send(
        Method::PUT,
        "/api/user/settings/privacy",
        &PrivacySettingsDto {
            data_collection_agreed,
        },
    )
    .await
}

pub async fn update_weekly_reset(weekly_reset_enabled: bool) -> Result<UserSettingsDto, String> {
    send(
        Method::PUT,
        "/api/user/settings/weekly-reset",
        &WeeklyResetSettingsDto {
            weekly_reset_enabled,
        },
    )
    .await
}
