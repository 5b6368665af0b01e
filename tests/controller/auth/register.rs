use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use meyoil::{
    model::user::{RegisterDto, UserDto},
    server::{controller::auth::register, model::session::user::SessionUserId},
};
use sea_orm::EntityTrait;

use super::*;

fn register_dto(main: &str, subs: &[&str]) -> Json<RegisterDto> {
    Json(RegisterDto {
        nexon_api_key: TEST_API_KEY.to_string(),
        main_character_name: main.to_string(),
        sub_character_names: subs.iter().map(|s| s.to_string()).collect(),
        password: TEST_PASSWORD.to_string(),
        password_confirm: TEST_PASSWORD.to_string(),
        data_collection_agreed: true,
    })
}

fn account() -> nexon_api::model::character::CharacterList {
    factory::mock_character_list(vec![
        factory::mock_character_list_entry("ocid-1", "Alpha", 260),
        factory::mock_character_list_entry("ocid-2", "Beta", 245),
        factory::mock_character_list_entry("ocid-3", "Lowbie", 30),
    ])
}

/// Expect 201 with the new user logged in to the session
#[tokio::test]
async fn created_and_logged_in() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_list_endpoint(account(), 1)
        .with_character_basic_endpoint("ocid-1", factory::mock_character_basic("Alpha", 260), 1)
        .with_character_basic_endpoint("ocid-2", factory::mock_character_basic("Beta", 245), 1)
        .build()
        .await?;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        register_dto("Alpha", &["Beta"]),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: UserDto = json_body(resp).await;
    assert_eq!(user.main_character_name, "Alpha");

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user.id));
    test.assert_mocks();

    Ok(())
}

/// Expect 400 and nothing stored when a sub character is below the boss level floor
#[tokio::test]
async fn bad_request_for_low_level_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_list_endpoint(account(), 1)
        .build()
        .await?;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        register_dto("Alpha", &["Lowbie"]),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let users = entity::prelude::MeyoilUser::find().all(&test.db).await?;
    assert!(users.is_empty());
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 400 and nothing stored when a sub character isn't on the account
#[tokio::test]
async fn bad_request_for_foreign_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_list_endpoint(account(), 1)
        .build()
        .await?;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        register_dto("Alpha", &["Stranger"]),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let users = entity::prelude::MeyoilUser::find().all(&test.db).await?;
    assert!(users.is_empty());
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 409 when the main character already belongs to a user
#[tokio::test]
async fn conflict_for_registered_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_list_endpoint(account(), 1)
        .build()
        .await?;
    test.user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        register_dto("Alpha", &[]),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 400 without calling the Nexon API when the terms weren't accepted
#[tokio::test]
async fn bad_request_without_consent() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let Json(mut dto) = register_dto("Alpha", &[]);
    dto.data_collection_agreed = false;

    let result = register(State(test.to_app_state()), test.session.clone(), Json(dto)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
