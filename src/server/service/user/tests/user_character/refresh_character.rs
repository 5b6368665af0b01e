use crate::server::error::{auth::AuthError, Error};

use super::*;

/// Expect the refreshed values to be returned with the main flag intact
#[tokio::test]
async fn refreshes_owned_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_basic_endpoint("ocid-1", factory::mock_character_basic("Alpha", 275), 1)
        .build()
        .await?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let service = UserCharacterService::new(&test.db, &test.nexon_client);
    let character = service
        .refresh_character(user_model.id, "ocid-1")
        .await
        .unwrap();

    assert_eq!(character.level, Some(275));
    assert!(character.is_main);
    test.assert_mocks();

    Ok(())
}

/// Expect CharacterNotOwned without contacting the API for someone else's character
#[tokio::test]
async fn fails_for_unowned_character() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    test.user()
        .insert_user_with_mock_character("ocid-2", "Beta")
        .await?;

    let service = UserCharacterService::new(&test.db, &test.nexon_client);
    let result = service.refresh_character(user_model.id, "ocid-2").await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::CharacterNotOwned(_, _)))
    ));

    Ok(())
}
