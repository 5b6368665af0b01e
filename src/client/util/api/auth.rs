use reqwasm::http::Method;

use crate::{
    client::util::api::{get_optional, post_empty, send},
    model::{
        character::CharacterPreviewDto,
        user::{
            LoginDto, NexonApiKeyDto, RegisterDto, ResetPasswordDto, TemporaryPasswordDto,
            UserDto,
        },
    },
};

/// Boss-eligible characters on the account behind `nexon_api_key`
pub async fn list_characters(nexon_api_key: &str) -> Result<Vec<CharacterPreviewDto>, String> {
    send(
        Method::POST,
        "/api/auth/characters",
        &NexonApiKeyDto {
            nexon_api_key: nexon_api_key.to_string(),
        },
    )
    .await
}

pub async fn register(dto: &RegisterDto) -> Result<UserDto, String> {
    send(Method::POST, "/api/auth/register", dto).await
}

pub async fn login(dto: &LoginDto) -> Result<UserDto, String> {
    send(Method::POST, "/api/auth/login", dto).await
}

/// The logged in user, or `None` when the session has no user
pub async fn get_user() -> Result<Option<UserDto>, String> {
    get_optional("/api/auth/user").await
}

/// Rotates the session ID, returning `None` when the session has no user
pub async fn refresh_session() -> Result<Option<UserDto>, String> {
    post_empty("/api/auth/refresh").await
}

pub async fn reset_password(dto: &ResetPasswordDto) -> Result<TemporaryPasswordDto, String> {
    send(Method::POST, "/api/auth/reset-password", dto).await
}
