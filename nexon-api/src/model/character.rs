use serde::{Deserialize, Serialize};

/// Every character on every account reachable with an API key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterList {
    #[serde(default)]
    pub account_list: Vec<Account>,
}

impl CharacterList {
    /// Characters across all accounts, in the order the API returned them.
    pub fn characters(&self) -> impl Iterator<Item = &CharacterListEntry> {
        self.account_list
            .iter()
            .flat_map(|account| account.character_list.iter())
    }

    /// Consumes the list, yielding characters across all accounts.
    pub fn into_characters(self) -> impl Iterator<Item = CharacterListEntry> {
        self.account_list
            .into_iter()
            .flat_map(|account| account.character_list.into_iter())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    #[serde(default)]
    pub character_list: Vec<CharacterListEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterListEntry {
    pub ocid: String,
    pub character_name: String,
    pub world_name: String,
    pub character_class: String,
    pub character_level: i32,
}

/// Basic profile of a single character.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterBasic {
    pub date: Option<String>,
    pub character_name: String,
    pub world_name: String,
    pub character_gender: Option<String>,
    pub character_class: String,
    pub character_class_level: Option<String>,
    pub character_level: i32,
    pub character_exp: Option<i64>,
    pub character_exp_rate: Option<String>,
    pub character_guild_name: Option<String>,
    pub character_image: Option<String>,
    pub character_date_create: Option<String>,
    pub access_flag: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterId {
    pub ocid: String,
}
