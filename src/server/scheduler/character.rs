use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::user_character::UserCharacterRepository,
    error::Error,
    scheduler::config::character::{BATCH_LIMIT, CACHE_DURATION},
    service::character::CharacterService,
};

/// Refreshes owned characters whose stored info has expired, oldest first.
///
/// Each character is fetched with its owner's stored API key. A failure is logged and the
/// batch moves on to the next character.
///
/// # Returns
/// - `Ok(usize)` - Number of characters refreshed
/// - `Err(Error::DbErr)` - The stale characters could not be queried
pub async fn refresh_stale_characters(
    db: DatabaseConnection,
    nexon_client: nexon_api::Client,
) -> Result<usize, Error> {
    let cutoff = Utc::now().naive_utc() - CACHE_DURATION;

    let stale = UserCharacterRepository::new(&db)
        .get_stale_owned_characters(cutoff, BATCH_LIMIT)
        .await?;

    let character_service = CharacterService::new(&db, &nexon_client);
    let mut refreshed = 0;

    for (character, api_key) in stale {
        let ocid = character.ocid.clone();

        match character_service
            .refresh_character(&api_key, character)
            .await
        {
            Ok(_) => refreshed += 1,
            Err(e) => tracing::warn!(ocid = %ocid, "Failed to refresh character info: {}", e),
        }
    }

    Ok(refreshed)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use meyoil_test_utils::prelude::*;
    use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

    use crate::server::{
        data::character::CharacterRepository, scheduler::character::refresh_stale_characters,
    };

    async fn expire(
        test: &TestContext,
        character: entity::maple_character::Model,
    ) -> Result<(), TestError> {
        let mut character_am = character.into_active_model();
        character_am.info_updated_at =
            ActiveValue::Set(Utc::now().naive_utc() - Duration::hours(48));
        character_am.update(&test.db).await?;

        Ok(())
    }

    /// Expect expired characters to be refreshed and recently refreshed ones skipped
    #[tokio::test]
    async fn refreshes_only_expired_characters() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_character_basic_endpoint("ocid-1", factory::mock_character_basic("Alpha", 277), 1)
            .build()
            .await?;
        let (user_model, _, expired) = test
            .user()
            .insert_user_with_mock_character("ocid-1", "Alpha")
            .await?;
        test.user()
            .insert_mock_character_for_user(user_model.id, "ocid-2", "Beta", Some(250))
            .await?;
        expire(&test, expired).await?;

        let count = refresh_stale_characters(test.db.clone(), test.nexon_client.clone())
            .await
            .unwrap();

        assert_eq!(count, 1);
        let refreshed = CharacterRepository::new(&test.db)
            .get_by_ocid("ocid-1")
            .await?
            .unwrap();
        assert_eq!(refreshed.level, Some(277));
        test.assert_mocks();

        Ok(())
    }

    /// Expect a failing character to be skipped without aborting the batch
    #[tokio::test]
    async fn continues_after_failure() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_character_basic_error_endpoint("ocid-1", 400, 1)
            .with_character_basic_endpoint("ocid-2", factory::mock_character_basic("Beta", 262), 1)
            .build()
            .await?;
        let (user_model, _, first) = test
            .user()
            .insert_user_with_mock_character("ocid-1", "Alpha")
            .await?;
        let (_, second) = test
            .user()
            .insert_mock_character_for_user(user_model.id, "ocid-2", "Beta", Some(250))
            .await?;
        expire(&test, first).await?;
        expire(&test, second).await?;

        let count = refresh_stale_characters(test.db.clone(), test.nexon_client.clone())
            .await
            .unwrap();

        assert_eq!(count, 1);
        test.assert_mocks();

        Ok(())
    }
}
