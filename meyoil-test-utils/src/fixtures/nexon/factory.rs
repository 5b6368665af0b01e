//! Plain Nexon and entity values for tests that don't need the database.

use chrono::Utc;
use nexon_api::model::character::{Account, CharacterBasic, CharacterList, CharacterListEntry};

use crate::constant::{TEST_CLASS, TEST_WORLD};

pub fn character_image_url(name: &str) -> String {
    format!("https://open.api.nexon.com/static/maplestory/character/look/{name}")
}

/// A character list holding `entries` under a single account.
pub fn mock_character_list(entries: Vec<CharacterListEntry>) -> CharacterList {
    CharacterList {
        account_list: vec![Account {
            account_id: "account-1".to_string(),
            character_list: entries,
        }],
    }
}

pub fn mock_character_list_entry(ocid: &str, name: &str, level: i32) -> CharacterListEntry {
    CharacterListEntry {
        ocid: ocid.to_string(),
        character_name: name.to_string(),
        world_name: TEST_WORLD.to_string(),
        character_class: TEST_CLASS.to_string(),
        character_level: level,
    }
}

pub fn mock_character_basic(name: &str, level: i32) -> CharacterBasic {
    CharacterBasic {
        date: None,
        character_name: name.to_string(),
        world_name: TEST_WORLD.to_string(),
        character_gender: None,
        character_class: TEST_CLASS.to_string(),
        character_class_level: None,
        character_level: level,
        character_exp: None,
        character_exp_rate: None,
        character_guild_name: None,
        character_image: Some(character_image_url(name)),
        character_date_create: None,
        access_flag: None,
    }
}

/// An unsaved, fully populated level 260 character.
pub fn mock_character_model(ocid: &str, name: &str) -> entity::maple_character::Model {
    let now = Utc::now().naive_utc();

    entity::maple_character::Model {
        id: 1,
        ocid: ocid.to_string(),
        name: name.to_string(),
        world_name: Some(TEST_WORLD.to_string()),
        character_class: Some(TEST_CLASS.to_string()),
        level: Some(260),
        image: Some(character_image_url(name)),
        created_at: now,
        info_updated_at: now,
    }
}
