use crate::{
    model::user::{PrivacySettingsDto, WeeklyResetSettingsDto},
    server::{
        error::{auth::AuthError, Error},
        service::user::UserService,
    },
};

use super::*;

/// Expect settings to reflect registration defaults
#[tokio::test]
async fn returns_default_settings() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let settings = UserService::new(&test.db)
        .get_settings(user_model.id)
        .await
        .unwrap();

    assert_eq!(settings.main_character_name, "Alpha");
    assert!(settings.data_collection_agreed);
    assert!(!settings.weekly_reset_enabled);

    Ok(())
}

/// Expect each toggle to change only its own setting
#[tokio::test]
async fn updates_toggles_independently() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let user_service = UserService::new(&test.db);
    let settings = user_service
        .update_weekly_reset(
            user_model.id,
            WeeklyResetSettingsDto {
                weekly_reset_enabled: true,
            },
        )
        .await
        .unwrap();
    assert!(settings.weekly_reset_enabled);
    assert!(settings.data_collection_agreed);

    let settings = user_service
        .update_privacy(
            user_model.id,
            PrivacySettingsDto {
                data_collection_agreed: false,
            },
        )
        .await
        .unwrap();
    assert!(settings.weekly_reset_enabled);
    assert!(!settings.data_collection_agreed);

    Ok(())
}

/// Expect UserNotInDatabase when the session refers to a deleted user
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let result = UserService::new(&test.db).get_settings(1).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::UserNotInDatabase(1)))
    ));

    Ok(())
}
