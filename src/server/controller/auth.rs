use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        character::CharacterPreviewDto,
        user::{
            LoginDto, NexonApiKeyDto, RegisterDto, ResetPasswordDto, TemporaryPasswordDto,
            UserDto, ValidationError,
        },
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::{auth::AuthService, character::CharacterService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Lists the boss-eligible characters on the account behind a Nexon API key
///
/// Used by the registration form to offer main and sub characters.
#[utoipa::path(
    post,
    path = "/api/auth/characters",
    tag = AUTH_TAG,
    request_body = NexonApiKeyDto,
    responses(
        (status = 200, description = "Characters at or above the boss level floor, highest level first", body = Vec<CharacterPreviewDto>),
        (status = 400, description = "Missing or invalid Nexon API key", body = ErrorDto),
        (status = 502, description = "Nexon API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_characters(
    State(state): State<AppState>,
    Json(payload): Json<NexonApiKeyDto>,
) -> Result<impl IntoResponse, Error> {
    let api_key = payload.nexon_api_key.trim();
    if api_key.is_empty() {
        return Err(ValidationError::MissingApiKey.into());
    }

    let characters = CharacterService::new(&state.db, &state.nexon_client)
        .list_boss_characters(api_key)
        .await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Registers a new account and logs it in
///
/// The user, their characters and the ownership links are stored together or not at all.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered and logged in", body = UserDto),
        (status = 400, description = "Invalid form, invalid API key or character not on the account", body = ErrorDto),
        (status = 409, description = "A selected character is already registered", body = ErrorDto),
        (status = 502, description = "Nexon API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.nexon_client)
        .register(payload)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Logs in with the main character name and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Missing main character name", body = ErrorDto),
        (status = 401, description = "Invalid main character name or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.nexon_client)
        .login(payload)
        .await?;

    SessionUserId::insert(&session, user.id).await?;

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok((StatusCode::OK, Json(user)))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing an anonymous session fails in the store, so only clear when logged in
    SessionUserId::clear(&session).await?;

    Ok(Redirect::temporary("/"))
}

/// Issues a new session ID for the logged in user
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session renewed", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    session.cycle_id().await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Returns the logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving user information", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Issues a temporary password to the owner of a main character
///
/// Ownership is proven with a Nexon API key whose account holds the main character.
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Temporary password issued", body = TemporaryPasswordDto),
        (status = 400, description = "Invalid form, invalid API key or character not on the account", body = ErrorDto),
        (status = 404, description = "Main character is not registered", body = ErrorDto),
        (status = 502, description = "Nexon API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let temporary_password = AuthService::new(&state.db, &state.nexon_client)
        .reset_password(payload)
        .await?;

    Ok((StatusCode::OK, Json(temporary_password)))
}
