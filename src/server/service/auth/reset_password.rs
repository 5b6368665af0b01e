use dioxus_logger::tracing;

use crate::{
    model::user::{ResetPasswordDto, TemporaryPasswordDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, nexon::NexonError, Error},
        service::{
            auth::{
                password::{generate_temporary_password, hash_password},
                AuthService,
            },
            character::CharacterService,
        },
    },
};

impl<'a> AuthService<'a> {
    /// Issues a temporary password to whoever can prove they own the main character.
    ///
    /// Proof is an API key whose character list contains the main character's ocid. The key
    /// may differ from the stored one (keys can be reissued by Nexon), in which case the
    /// stored key is replaced.
    pub async fn reset_password(
        &self,
        dto: ResetPasswordDto,
    ) -> Result<TemporaryPasswordDto, Error> {
        dto.validate()?;

        let name = dto.main_character_name.trim();
        let api_key = dto.nexon_api_key.trim();

        let Some((user, Some(main_character))) = UserRepository::new(self.db)
            .get_by_main_character_name(name)
            .await?
        else {
            return Err(AuthError::MainCharacterNotRegistered(name.to_string()).into());
        };

        let list = CharacterService::new(self.db, self.nexon_client)
            .fetch_character_list(api_key)
            .await?;

        if !list
            .characters()
            .any(|entry| entry.ocid == main_character.ocid)
        {
            return Err(NexonError::CharacterNotOnAccount(name.to_string()).into());
        }

        let temporary_password = generate_temporary_password();
        let password_hash = hash_password(&temporary_password)?;

        UserRepository::new(self.db)
            .update_credentials(user.id, password_hash, Some(api_key.to_string()))
            .await?;

        tracing::info!(user_id = %user.id, "Issued temporary password");

        Ok(TemporaryPasswordDto { temporary_password })
    }
}
