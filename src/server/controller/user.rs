use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::CharacterDto,
        user::{
            ChangeMainDto, ChangePasswordDto, MainCharacterChangedDto, PrivacySettingsDto,
            UserSettingsDto, WeeklyResetSettingsDto,
        },
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::user::{user_character::UserCharacterService, UserService},
    },
};

pub static USER_TAG: &str = "user";

/// Get all characters owned by logged in user
///
/// Records missing world, class or level are completed from the Nexon Open API first.
#[utoipa::path(
    get,
    path = "/api/user/characters",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving user characters", body = Vec<CharacterDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_characters(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let characters = UserCharacterService::new(&state.db, &state.nexon_client)
        .get_user_characters(user.id)
        .await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Re-fetches one owned character from the Nexon Open API
#[utoipa::path(
    post,
    path = "/api/user/characters/{ocid}/refresh",
    tag = USER_TAG,
    params(("ocid" = String, Path, description = "Nexon character identifier")),
    responses(
        (status = 200, description = "Refreshed character", body = CharacterDto),
        (status = 404, description = "User not found or character not owned", body = ErrorDto),
        (status = 502, description = "Nexon API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_character(
    State(state): State<AppState>,
    session: Session,
    Path(ocid): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let character = UserCharacterService::new(&state.db, &state.nexon_client)
        .refresh_character(user.id, &ocid)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

#[utoipa::path(
    put,
    path = "/api/user/main-character",
    tag = USER_TAG,
    request_body = ChangeMainDto,
    responses(
        (status = 200, description = "Main character changed", body = MainCharacterChangedDto),
        (status = 404, description = "User not found or character not owned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_main_character(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangeMainDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let changed = UserCharacterService::new(&state.db, &state.nexon_client)
        .change_main(user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(changed)))
}

#[utoipa::path(
    put,
    path = "/api/user/password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "New password rejected", body = ErrorDto),
        (status = 401, description = "Current password is incorrect", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    UserService::new(&state.db)
        .change_password(user.id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password changed".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/user/settings",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current account settings", body = UserSettingsDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let settings = UserService::new(&state.db).get_settings(user.id).await?;

    Ok((StatusCode::OK, Json(settings)))
}

#[utoipa::path(
    put,
    path = "/api/user/settings/privacy",
    tag = USER_TAG,
    request_body = PrivacySettingsDto,
    responses(
        (status = 200, description = "Updated account settings", body = UserSettingsDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_privacy_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PrivacySettingsDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let settings = UserService::new(&state.db)
        .update_privacy(user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}

#[utoipa::path(
    put,
    path = "/api/user/settings/weekly-reset",
    tag = USER_TAG,
    request_body = WeeklyResetSettingsDto,
    responses(
        (status = 200, description = "Updated account settings", body = UserSettingsDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_weekly_reset_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<WeeklyResetSettingsDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let settings = UserService::new(&state.db)
        .update_weekly_reset(user.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}
