use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use meyoil::{
    model::user::{LoginDto, ResetPasswordDto, TemporaryPasswordDto},
    server::controller::auth::{login, reset_password},
};

use super::*;

fn reset_dto(name: &str) -> Json<ResetPasswordDto> {
    Json(ResetPasswordDto {
        main_character_name: name.to_string(),
        nexon_api_key: TEST_API_KEY.to_string(),
    })
}

/// Expect 200 with a temporary password that works for login
#[tokio::test]
async fn issues_working_temporary_password() -> Result<(), TestError> {
    let list = factory::mock_character_list(vec![factory::mock_character_list_entry(
        "ocid-1", "Alpha", 260,
    )]);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_list_endpoint(list, 1)
        .build()
        .await?;
    test.user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let result = reset_password(State(test.to_app_state()), reset_dto("Alpha")).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let issued: TemporaryPasswordDto = json_body(resp).await;

    let login_result = login(
        State(test.to_app_state()),
        test.session.clone(),
        Json(LoginDto {
            main_character_name: "Alpha".to_string(),
            password: issued.temporary_password,
        }),
    )
    .await;
    assert!(login_result.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Expect 404 for a main character nobody registered
#[tokio::test]
async fn not_found_for_unregistered_main() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = reset_password(State(test.to_app_state()), reset_dto("Nobody")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 when the key's account doesn't hold the main character
#[tokio::test]
async fn bad_request_for_other_account() -> Result<(), TestError> {
    let list = factory::mock_character_list(vec![factory::mock_character_list_entry(
        "ocid-9", "Someone", 260,
    )]);
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_list_endpoint(list, 1)
        .build()
        .await?;
    test.user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let result = reset_password(State(test.to_app_state()), reset_dto("Alpha")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
