//! Mock Nexon Open API endpoints.

use mockito::{Matcher, Mock};
use nexon_api::model::character::{CharacterBasic, CharacterList};
use serde_json::json;

use crate::fixtures::nexon::NexonFixtures;

static CHARACTER_LIST_PATH: &str = "/maplestory/v1/character/list";
static CHARACTER_BASIC_PATH: &str = "/maplestory/v1/character/basic";

/// Error name the Nexon Open API uses for an unknown or invalid identifier.
static INVALID_IDENTIFIER: &str = "OPENAPI00004";

fn error_body(name: &str) -> String {
    json!({ "error": { "name": name, "message": "mock error" } }).to_string()
}

impl<'a> NexonFixtures<'a> {
    pub fn create_character_list_endpoint(
        &mut self,
        list: CharacterList,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", CHARACTER_LIST_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&list).unwrap())
            .expect(expected_requests)
            .create()
    }

    pub fn create_character_list_error_endpoint(
        &mut self,
        status: usize,
        error_name: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", CHARACTER_LIST_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body(error_name))
            .expect(expected_requests)
            .create()
    }

    /// Matches only requests for `ocid`, so several characters can be mocked side by side.
    pub fn create_character_basic_endpoint(
        &mut self,
        ocid: &str,
        basic: CharacterBasic,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", CHARACTER_BASIC_PATH)
            .match_query(Matcher::UrlEncoded("ocid".into(), ocid.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&basic).unwrap())
            .expect(expected_requests)
            .create()
    }

    pub fn create_character_basic_error_endpoint(
        &mut self,
        ocid: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", CHARACTER_BASIC_PATH)
            .match_query(Matcher::UrlEncoded("ocid".into(), ocid.into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body(INVALID_IDENTIFIER))
            .expect(expected_requests)
            .create()
    }
}
