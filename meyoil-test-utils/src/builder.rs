//! Declarative test builder.
//!
//! Tables and mock endpoints are queued on the builder and only created when `build()` runs.

use mockito::Mock;
use nexon_api::model::character::{CharacterBasic, CharacterList};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Chain configuration methods and finish with `build()` to get a [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    character_list_endpoints: Vec<(CharacterList, usize)>,
    character_list_error_endpoints: Vec<(usize, String, usize)>, // (status, error name, expected)
    character_basic_endpoints: Vec<(String, CharacterBasic, usize)>,
    character_basic_error_endpoints: Vec<(String, usize, usize)>, // (ocid, status, expected)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            mock_builders: Vec::new(),
            character_list_endpoints: Vec::new(),
            character_list_error_endpoints: Vec::new(),
            character_basic_endpoints: Vec::new(),
            character_basic_error_endpoints: Vec::new(),
        }
    }

    /// Add the character, user and ownership tables.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use meyoil_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), meyoil_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(MapleCharacter)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Mock `GET /maplestory/v1/character/list` returning `list`.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn with_character_list_endpoint(
        mut self,
        list: CharacterList,
        expected_requests: usize,
    ) -> Self {
        self.character_list_endpoints.push((list, expected_requests));
        self
    }

    /// Mock `GET /maplestory/v1/character/list` failing with `status` and a Nexon error body
    /// named `error_name`.
    pub fn with_character_list_error_endpoint(
        mut self,
        status: usize,
        error_name: &str,
        expected_requests: usize,
    ) -> Self {
        self.character_list_error_endpoints
            .push((status, error_name.to_string(), expected_requests));
        self
    }

    /// Mock `GET /maplestory/v1/character/basic?ocid={ocid}` returning `basic`.
    pub fn with_character_basic_endpoint(
        mut self,
        ocid: &str,
        basic: CharacterBasic,
        expected_requests: usize,
    ) -> Self {
        self.character_basic_endpoints
            .push((ocid.to_string(), basic, expected_requests));
        self
    }

    /// Mock `GET /maplestory/v1/character/basic?ocid={ocid}` failing with `status`.
    pub fn with_character_basic_error_endpoint(
        mut self,
        ocid: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.character_basic_error_endpoints
            .push((ocid.to_string(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with direct access to the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Create the configured tables and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    /// - `Err(TestError::NexonApiError)` - Mock Nexon API client could not be built
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables, parents before children
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::MapleCharacter),
                schema.create_table_from_entity(entity::prelude::MeyoilUser),
                schema.create_table_from_entity(entity::prelude::MeyoilUserCharacter),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Create mock endpoints
        // Custom endpoints go first so tests can queue an error before a success on one path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (list, expected) in self.character_list_endpoints {
            mocks.push(setup.nexon().create_character_list_endpoint(list, expected));
        }

        for (status, error_name, expected) in self.character_list_error_endpoints {
            mocks.push(setup.nexon().create_character_list_error_endpoint(
                status,
                &error_name,
                expected,
            ));
        }

        for (ocid, basic, expected) in self.character_basic_endpoints {
            mocks.push(
                setup
                    .nexon()
                    .create_character_basic_endpoint(&ocid, basic, expected),
            );
        }

        for (ocid, status, expected) in self.character_basic_error_endpoints {
            mocks.push(
                setup
                    .nexon()
                    .create_character_basic_error_endpoint(&ocid, status, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
