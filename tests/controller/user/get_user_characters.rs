use axum::{extract::State, http::StatusCode, response::IntoResponse};
use meyoil::{
    model::character::CharacterDto,
    server::{controller::user::get_user_characters, model::session::user::SessionUserId},
};

use super::*;

/// Expect characters highest level first with the main character flagged
#[tokio::test]
async fn success_sorted_by_level() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    test.user()
        .insert_mock_character_for_user(user_model.id, "ocid-2", "Beta", Some(275))
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = get_user_characters(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let characters: Vec<CharacterDto> = json_body(resp).await;
    let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Alpha"]);
    assert!(characters.iter().find(|c| c.name == "Alpha").unwrap().is_main);
    assert!(!characters.iter().find(|c| c.name == "Beta").unwrap().is_main);

    Ok(())
}

/// Expect a record missing its profile to be completed from the Nexon API
#[tokio::test]
async fn completes_incomplete_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_basic_endpoint("ocid-2", factory::mock_character_basic("Beta", 250), 1)
        .build()
        .await?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    test.user()
        .insert_mock_character_for_user(user_model.id, "ocid-2", "Beta", None)
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = get_user_characters(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let characters: Vec<CharacterDto> = json_body(resp).await;
    let beta = characters.iter().find(|c| c.name == "Beta").unwrap();
    assert_eq!(beta.level, Some(250));
    assert_eq!(beta.class.as_deref(), Some(TEST_CLASS));
    test.assert_mocks();

    Ok(())
}

/// Expect only the logged in user's characters
#[tokio::test]
async fn returns_only_characters_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model_1, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    let (user_model_2, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-2", "Beta")
        .await?;
    test.user()
        .insert_mock_character_for_user(user_model_2.id, "ocid-3", "Gamma", Some(240))
        .await?;
    SessionUserId::insert(&test.session, user_model_1.id)
        .await
        .unwrap();

    let result = get_user_characters(State(test.to_app_state()), test.session.clone()).await;

    let characters: Vec<CharacterDto> = json_body(result.unwrap().into_response()).await;
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Alpha");

    Ok(())
}

/// Expect 404 when no user is logged in
#[tokio::test]
async fn not_found_when_user_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = get_user_characters(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 and a cleared session when the user in session no longer exists
#[tokio::test]
async fn not_found_when_user_not_in_database() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    SessionUserId::insert(&test.session, 999).await.unwrap();

    let result = get_user_characters(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}
