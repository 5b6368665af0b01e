use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use meyoil::{
    model::user::{ChangeMainDto, MainCharacterChangedDto, UserDto},
    server::{
        controller::{auth::get_user, user::change_main_character},
        model::session::user::SessionUserId,
    },
};

use super::*;

fn change_dto(name: &str) -> Json<ChangeMainDto> {
    Json(ChangeMainDto {
        new_main_character_name: name.to_string(),
    })
}

/// Expect 200 and the session user to report the new main character
#[tokio::test]
async fn changes_main_to_owned_character() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    test.user()
        .insert_mock_character_for_user(user_model.id, "ocid-2", "Beta", Some(250))
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = change_main_character(
        State(test.to_app_state()),
        test.session.clone(),
        change_dto("Beta"),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let changed: MainCharacterChangedDto = json_body(resp).await;
    assert_eq!(changed.previous_main_character_name, "Alpha");
    assert_eq!(changed.new_main_character_name, "Beta");

    let user: UserDto = json_body(
        get_user(State(test.to_app_state()), test.session.clone())
            .await
            .unwrap()
            .into_response(),
    )
    .await;
    assert_eq!(user.main_character_name, "Beta");

    Ok(())
}

/// Expect 404 for a character the user doesn't own
#[tokio::test]
async fn not_found_for_unowned_character() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    test.user()
        .insert_user_with_mock_character("ocid-2", "Beta")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = change_main_character(
        State(test.to_app_state()),
        test.session.clone(),
        change_dto("Beta"),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
