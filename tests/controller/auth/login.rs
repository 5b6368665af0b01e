use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use meyoil::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{controller::auth::login, model::session::user::SessionUserId},
};

use super::*;

fn login_dto(name: &str, password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        main_character_name: name.to_string(),
        password: password.to_string(),
    })
}

/// Expect 200 with the user stored in session for correct credentials
#[tokio::test]
async fn success_with_correct_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        login_dto("Alpha", TEST_PASSWORD),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.id, user_model.id);
    assert_eq!(
        SessionUserId::get(&test.session).await.unwrap(),
        Some(user_model.id)
    );

    Ok(())
}

/// Expect the same 401 for a wrong password and an unknown main character
#[tokio::test]
async fn unauthorized_for_bad_credentials() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    test.user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let wrong_password = login(
        State(test.to_app_state()),
        test.session.clone(),
        login_dto("Alpha", "not the password"),
    )
    .await
    .err()
    .unwrap()
    .into_response();
    let unknown_user = login(
        State(test.to_app_state()),
        test.session.clone(),
        login_dto("Nobody", TEST_PASSWORD),
    )
    .await
    .err()
    .unwrap()
    .into_response();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: ErrorDto = json_body(wrong_password).await;
    let unknown_user: ErrorDto = json_body(unknown_user).await;
    assert_eq!(wrong_password.error, unknown_user.error);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 400 for a blank main character name
#[tokio::test]
async fn bad_request_for_blank_name() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = login(
        State(test.to_app_state()),
        test.session.clone(),
        login_dto("  ", TEST_PASSWORD),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
