use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection & Nexon API client
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found, containing user ID and main character ID & name
/// - `Err(Error::AuthError(UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use meyoil_test_utils::prelude::*;

    use crate::server::{
        controller::util::get_user::get_user_from_session,
        model::{app::AppState, session::user::SessionUserId},
    };

    #[tokio::test]
    /// Expect the user for a session holding an existing user ID
    async fn returns_user_in_session() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        let (user_model, _, _) = test
            .user()
            .insert_user_with_mock_character("ocid-1", "Alpha")
            .await?;
        SessionUserId::insert(&test.session, user_model.id)
            .await
            .unwrap();

        let state: AppState = test.to_app_state();
        let user = get_user_from_session(&state, &test.session).await.unwrap();

        assert_eq!(user.id, user_model.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for an anonymous session
    async fn fails_without_user_in_session() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;

        let state: AppState = test.to_app_state();
        let result = get_user_from_session(&state, &test.session).await;

        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 and a cleared session when the user no longer exists
    async fn clears_session_for_missing_user() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        SessionUserId::insert(&test.session, 42).await.unwrap();

        let state: AppState = test.to_app_state();
        let result = get_user_from_session(&state, &test.session).await;

        let resp = result.unwrap_err().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

        Ok(())
    }
}
