use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use meyoil::{
    model::user::{PrivacySettingsDto, UserSettingsDto, WeeklyResetSettingsDto},
    server::{
        controller::user::{get_settings, update_privacy_settings, update_weekly_reset_settings},
        model::session::user::SessionUserId,
    },
};

use super::*;

#[tokio::test]
/// Expect the stored preferences with the main character name
async fn returns_current_settings() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = get_settings(State(test.to_app_state()), test.session.clone()).await;

    let settings: UserSettingsDto = json_body(result.unwrap().into_response()).await;
    assert_eq!(settings.main_character_name, "Alpha");
    assert!(settings.data_collection_agreed);
    assert!(!settings.weekly_reset_enabled);

    Ok(())
}

#[tokio::test]
/// Expect each toggle to change only its own preference
async fn updates_each_preference_independently() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    SessionUserId::insert(&test.session, user_model.id)
        .await
        .unwrap();

    let result = update_weekly_reset_settings(
        State(test.to_app_state()),
        test.session.clone(),
        Json(WeeklyResetSettingsDto {
            weekly_reset_enabled: true,
        }),
    )
    .await;
    let settings: UserSettingsDto = json_body(result.unwrap().into_response()).await;
    assert!(settings.weekly_reset_enabled);
    assert!(settings.data_collection_agreed);

    let result = update_privacy_settings(
        State(test.to_app_state()),
        test.session.clone(),
        Json(PrivacySettingsDto {
            data_collection_agreed: false,
        }),
    )
    .await;
    let settings: UserSettingsDto = json_body(result.unwrap().into_response()).await;
    assert!(!settings.data_collection_agreed);
    assert!(settings.weekly_reset_enabled);

    Ok(())
}

#[tokio::test]
/// Expect 404 when no user is logged in
async fn not_found_when_not_logged_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = get_settings(State(test.to_app_state()), test.session.clone()).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
