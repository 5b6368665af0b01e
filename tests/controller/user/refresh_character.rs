use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use meyoil::{
    model::character::CharacterDto,
    server::{controller::user::refresh_character, model::session::user::SessionUserId},
};

use super::*;

#[tokio::test]
/// Expect 200 with the freshly fetched level
async fn returns_refreshed_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_basic_endpoint("ocid-1", factory::mock_character_basic("Alpha", 265), 1)
        .build()
        .await?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = refresh_character(
        State(test.to_app_state()),
        test.session.clone(),
        Path("ocid-1".to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let character: CharacterDto = json_body(resp).await;
    assert_eq!(character.level, Some(265));
    assert!(character.is_main);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 404 for a character owned by someone else
async fn not_found_for_foreign_character() -> Result<(), TestError> {
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

    let result = refresh_character(
        State(test.to_app_state()),
        test.session.clone(),
        Path("ocid-2".to_string()),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
