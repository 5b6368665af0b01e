use super::*;

/// Expect owned characters sorted by level with only the main character flagged
#[tokio::test]
async fn returns_sorted_characters_with_main_flag() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    test.user()
        .insert_mock_character_for_user(user_model.id, "ocid-2", "Beta", Some(280))
        .await?;
    test.user()
        .insert_user_with_mock_character("ocid-3", "Gamma")
        .await?;

    let service = UserCharacterService::new(&test.db, &test.nexon_client);
    let characters = service.get_user_characters(user_model.id).await.unwrap();

    let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Beta", "Alpha"]);
    assert!(!characters[0].is_main);
    assert!(characters[1].is_main);

    Ok(())
}

/// Expect an incomplete record to be enhanced from the Nexon API
#[tokio::test]
async fn enhances_incomplete_characters() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_character_basic_endpoint("ocid-2", factory::mock_character_basic("Beta", 255), 1)
        .build()
        .await?;
    let (user_model, _, _) = test
        .user()
        .insert_user_with_mock_character("ocid-1", "Alpha")
        .await?;
    test.user()
        .insert_mock_character_for_user(user_model.id, "ocid-2", "Beta", None)
        .await?;

    let service = UserCharacterService::new(&test.db, &test.nexon_client);
    let characters = service.get_user_characters(user_model.id).await.unwrap();

    let beta = characters.iter().find(|c| c.name == "Beta").unwrap();
    assert_eq!(beta.level, Some(255));
    test.assert_mocks();

    Ok(())
}
