use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use meyoil::{
    model::user::ChangePasswordDto,
    server::{controller::user::change_password, model::session::user::SessionUserId},
};

use super::*;

fn password_dto(current: &str, new: &str) -> Json<ChangePasswordDto> {
    Json(ChangePasswordDto {
        current_password: current.to_string(),
        new_password: new.to_string(),
        new_password_confirm: new.to_string(),
    })
}

/// Expect 200 for the correct current password
#[tokio::test]
async fn changes_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = change_password(
        State(test.to_app_state()),
        test.session.clone(),
        password_dto(TEST_PASSWORD, "a brand new password"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 when the current password is wrong
#[tokio::test]
async fn unauthorized_for_wrong_current_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = change_password(
        State(test.to_app_state()),
        test.session.clone(),
        password_dto("not the password", "a brand new password"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 for a new password below the minimum length
#[tokio::test]
async fn bad_request_for_short_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = change_password(
        State(test.to_app_state()),
        test.session.clone(),
        password_dto(TEST_PASSWORD, "short"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
