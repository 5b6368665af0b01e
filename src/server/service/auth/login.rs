use crate::{
    model::user::{LoginDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::auth::{password::verify_password, user_dto, AuthService},
    },
};

impl<'a> AuthService<'a> {
    /// Checks a main character name and password pair.
    ///
    /// Unknown names and wrong passwords both yield [`AuthError::InvalidCredentials`] so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, dto: LoginDto) -> Result<UserDto, Error> {
        dto.validate()?;

        let name = dto.main_character_name.trim();

        let Some((user, Some(main_character))) = UserRepository::new(self.db)
            .get_by_main_character_name(name)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(name.to_string()).into());
        };

        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(name.to_string()).into());
        }

        Ok(user_dto(&user, main_character))
    }
}
