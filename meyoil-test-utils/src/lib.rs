//! Test utilities shared by Meyoil's unit and integration tests.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the tables to create and the Nexon
//! Open API endpoints to mock; [`TestBuilder::build`] then returns a [`TestContext`] holding an
//! in-memory SQLite database, a Nexon API client pointed at a mockito server, and a session
//! backed by an in-memory store. Fixture helpers on the context insert users and characters.
//!
//! ```ignore
//! use meyoil_test_utils::prelude::*;
//!
//! let test = TestBuilder::new()
//!     .with_user_tables()
//!     .with_character_list_endpoint(factory::mock_character_list(vec![]), 1)
//!     .build()
//!     .await?;
//! let (user, _, character) = test.user().insert_user_with_mock_character("ocid-1", "Alpha").await?;
//! ```

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_API_KEY, TEST_CLASS, TEST_PASSWORD},
        fixtures::nexon::factory,
        test_setup_with_tables, test_setup_with_user_tables, TestBuilder, TestContext, TestError,
    };
}

/// Builds a [`TestContext`] with the given entity tables, or none.
///
/// Expands to an expression of type `Result<TestContext, TestError>`.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Builds a [`TestContext`] with the user and character tables, plus any extra entity tables.
#[macro_export]
macro_rules! test_setup_with_user_tables {
    () => {{
        $crate::TestBuilder::new().with_user_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_user_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
