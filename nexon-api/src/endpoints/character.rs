use crate::{
    model::character::{CharacterBasic, CharacterId, CharacterList},
    Client, Error,
};

impl Client {
    /// Lists every character on the accounts owned by `api_key`.
    ///
    /// `GET /maplestory/v1/character/list`
    pub async fn character_list(&self, api_key: &str) -> Result<CharacterList, Error> {
        self.get(api_key, "/maplestory/v1/character/list", &[])
            .await
    }

    /// Fetches the basic profile of the character identified by `ocid`.
    ///
    /// `GET /maplestory/v1/character/basic?ocid={ocid}`
    pub async fn character_basic(&self, api_key: &str, ocid: &str) -> Result<CharacterBasic, Error> {
        self.get(api_key, "/maplestory/v1/character/basic", &[("ocid", ocid)])
            .await
    }

    /// Resolves a character name to its ocid.
    ///
    /// `GET /maplestory/v1/id?character_name={character_name}`
    pub async fn character_id(&self, api_key: &str, character_name: &str) -> Result<String, Error> {
        let id: CharacterId = self
            .get(
                api_key,
                "/maplestory/v1/id",
                &[("character_name", character_name)],
            )
            .await?;

        Ok(id.ocid)
    }
}
