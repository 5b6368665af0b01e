use crate::{
    model::user::{ChangePasswordDto, LoginDto, ValidationError},
    server::{
        error::{auth::AuthError, Error},
        service::{auth::AuthService, user::UserService},
    },
};

use super::*;

const NEW_PASSWORD: &str = "a much better password";

fn change_dto(current: &str) -> ChangePasswordDto {
    ChangePasswordDto {
        current_password: current.to_string(),
        new_password: NEW_PASSWORD.to_string(),
        new_password_confirm: NEW_PASSWORD.to_string(),
    }
}

/// Expect login to work with the new password and fail with the old one
#[tokio::test]
async fn changes_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let result = UserService::new(&test.db)
        .change_password(user_model.id, change_dto(TEST_PASSWORD))
        .await;
    assert!(result.is_ok());

    let auth_service = AuthService::new(&test.db, &test.nexon_client);
    let login = |password: &str| LoginDto {
        main_character_name: "Alpha".to_string(),
        password: password.to_string(),
    };
    assert!(auth_service.login(login(NEW_PASSWORD)).await.is_ok());
    assert!(auth_service.login(login(TEST_PASSWORD)).await.is_err());

    Ok(())
}

/// Expect CurrentPasswordIncorrect when the current password is wrong
#[tokio::test]
async fn fails_for_wrong_current_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let result = UserService::new(&test.db)
        .change_password(user_model.id, change_dto("not the password"))
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::CurrentPasswordIncorrect(_)))
    ));

    Ok(())
}

/// Expect a validation error when the new password is too short
#[tokio::test]
async fn fails_for_short_new_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;

    let dto = ChangePasswordDto {
        current_password: TEST_PASSWORD.to_string(),
        new_password: "short".to_string(),
        new_password_confirm: "short".to_string(),
    };
    let result = UserService::new(&test.db)
        .change_password(user_model.id, dto)
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::PasswordTooShort))
    ));

    Ok(())
}
