use crate::{
    model::user::ChangeMainDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
    },
};

use super::*;

fn change_main_dto(name: &str) -> ChangeMainDto {
    ChangeMainDto {
        new_main_character_name: name.to_string(),
    }
}

/// Expect Ok when changing main character to another owned character
#[tokio::test]
async fn changes_main_to_owned_character() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    let (_, second_character_model) = test
        .user()
        .insert_mock_character_for_user(user_model.id, "ocid-2", "Beta", Some(250))
        .await?;

    let service = UserCharacterService::new(&test.db, &test.nexon_client);
    let changed = service
        .change_main(user_model.id, change_main_dto("Beta"))
        .await
        .unwrap();

    assert_eq!(changed.previous_main_character_name, "Alpha");
    assert_eq!(changed.new_main_character_name, "Beta");

    // Verify main character was actually changed
    let (updated_user_model, _) = UserRepository::new(&test.db)
        .get(user_model.id)
        .await?
        .unwrap();
    assert_eq!(
        updated_user_model.main_character_id,
        second_character_model.id
    );

    Ok(())
}

/// Expect Ok but no change when changing main to the current main character
#[tokio::test]
async fn handles_changing_to_current_main() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let service = UserCharacterService::new(&test.db, &test.nexon_client);
    let changed = service
        .change_main(user_model.id, change_main_dto("Alpha"))
        .await
        .unwrap();

    assert_eq!(changed.previous_main_character_name, "Alpha");
    assert_eq!(changed.new_main_character_name, "Alpha");

    let (updated_user_model, _) = UserRepository::new(&test.db)
        .get(user_model.id)
        .await?
        .unwrap();
    assert_eq!(updated_user_model, user_model);

    Ok(())
}

/// Expect CharacterNotOwned when the character belongs to another user
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
    let result = service
        .change_main(user_model.id, change_main_dto("Beta"))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::CharacterNotOwned(_, _)))
    ));

    Ok(())
}
