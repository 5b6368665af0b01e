use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub main_character_id: i32,
    pub main_character_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserSettingsDto {
    pub main_character_name: String,
    pub data_collection_agreed: bool,
    pub weekly_reset_enabled: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NexonApiKeyDto {
    pub nexon_api_key: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RegisterDto {
    pub nexon_api_key: String,
    pub main_character_name: String,
    #[serde(default)]
    pub sub_character_names: Vec<String>,
    pub password: String,
    pub password_confirm: String,
    /// Consent to the terms and to character data collection
    pub data_collection_agreed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub main_character_name: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ResetPasswordDto {
    pub main_character_name: String,
    pub nexon_api_key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TemporaryPasswordDto {
    pub temporary_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChangeMainDto {
    pub new_main_character_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MainCharacterChangedDto {
    pub previous_main_character_name: String,
    pub new_main_character_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PrivacySettingsDto {
    pub data_collection_agreed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct WeeklyResetSettingsDto {
    pub weekly_reset_enabled: bool,
}

/// Input rejected before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nexon API key is required")]
    MissingApiKey,
    #[error("Main character name is required")]
    MissingMainCharacter,
    #[error("Password must be at least 10 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must agree to the terms before registering")]
    TermsNotAccepted,
    #[error("Character {0} was selected more than once")]
    DuplicateCharacter(String),
    #[error("New password must differ from the current password")]
    PasswordUnchanged,
}

fn validate_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

impl RegisterDto {
    /// Checks the form before any upstream lookups are made.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nexon_api_key.trim().is_empty() {
            return Err(ValidationError::MissingApiKey);
        }
        if self.main_character_name.trim().is_empty() {
            return Err(ValidationError::MissingMainCharacter);
        }

        let mut seen = vec![self.main_character_name.trim()];
        for name in &self.sub_character_names {
            let name = name.trim();
            if seen.contains(&name) {
                return Err(ValidationError::DuplicateCharacter(name.to_string()));
            }
            seen.push(name);
        }

        validate_new_password(&self.password, &self.password_confirm)?;

        if !self.data_collection_agreed {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(())
    }

    /// Main character followed by sub characters, trimmed.
    pub fn character_names(&self) -> Vec<String> {
        std::iter::once(&self.main_character_name)
            .chain(self.sub_character_names.iter())
            .map(|name| name.trim().to_string())
            .collect()
    }
}

impl LoginDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.main_character_name.trim().is_empty() {
            return Err(ValidationError::MissingMainCharacter);
        }

        Ok(())
    }
}

impl ResetPasswordDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.main_character_name.trim().is_empty() {
            return Err(ValidationError::MissingMainCharacter);
        }
        if self.nexon_api_key.trim().is_empty() {
            return Err(ValidationError::MissingApiKey);
        }

        Ok(())
    }
}

impl ChangePasswordDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_new_password(&self.new_password, &self.new_password_confirm)?;

        if self.new_password == self.current_password {
            return Err(ValidationError::PasswordUnchanged);
        }

        Ok(())
    }
}
