use crate::server::{error::Error, service::user::UserService};

use super::*;

/// Expect Ok with Some for a user with a main character
#[tokio::test]
async fn returns_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let (user_model, _, character_model) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(user_model.id).await;

    let user = result.unwrap().unwrap();
    assert_eq!(user.id, user_model.id);
    assert_eq!(user.main_character_id, character_model.id);
    assert_eq!(user.main_character_name, "Alpha");

    Ok(())
}

/// Expect Ok with None for user ID that does not exist
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let nonexistent_user_id = 1;
    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(nonexistent_user_id).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let user_service = UserService::new(&test.db);
    let result = user_service.get_user(1).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
