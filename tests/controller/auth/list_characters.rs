use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use meyoil::{
    model::{character::CharacterPreviewDto, user::NexonApiKeyDto},
    server::controller::auth::list_characters,
};

use super::*;

fn key_dto(key: &str) -> Json<NexonApiKeyDto> {
    Json(NexonApiKeyDto {
        nexon_api_key: key.to_string(),
    })
}

/// Expect 200 with only boss-eligible characters, highest level first
#[tokio::test]
async fn lists_eligible_characters_by_level() -> Result<(), TestError> {
    let list = factory::mock_character_list(vec![
        factory::mock_character_list_entry("ocid-1", "Alpha", 250),
        factory::mock_character_list_entry("ocid-2", "Beta", 120),
        factory::mock_character_list_entry("ocid-3", "Gamma", 275),
    ]);
    let test = TestBuilder::new()
        .with_character_list_endpoint(list, 1)
        .with_character_basic_endpoint("ocid-1", factory::mock_character_basic("Alpha", 250), 1)
        .with_character_basic_endpoint("ocid-3", factory::mock_character_basic("Gamma", 275), 1)
        .build()
        .await?;

    let result = list_characters(State(test.to_app_state()), key_dto(TEST_API_KEY)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let characters: Vec<CharacterPreviewDto> = json_body(resp).await;
    let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Gamma", "Alpha"]);
    test.assert_mocks();

    Ok(())
}

/// Expect 400 without calling the Nexon API when the key is blank
#[tokio::test]
async fn bad_request_for_blank_key() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_characters(State(test.to_app_state()), key_dto("   ")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when the Nexon API rejects the key
#[tokio::test]
async fn bad_request_for_rejected_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_character_list_error_endpoint(400, nexon_api::error::INVALID_API_KEY, 1)
        .build()
        .await?;

    let result = list_characters(State(test.to_app_state()), key_dto("wrong_key")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    test.assert_mocks();

    Ok(())
}
