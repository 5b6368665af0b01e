//! Placeholder values used across tests. None of these are real credentials.

/// User agent for the test Nexon API client.
pub static TEST_USER_AGENT: &str = "meyoil-tests/0.1 (contact@example.com)";

/// API key stored for fixture users and sent to mock endpoints.
pub static TEST_API_KEY: &str = "test_nexon_api_key";

/// Plain-text password of every fixture user.
pub static TEST_PASSWORD: &str = "correct horse battery";

/// World and class given to fixture characters with a known level.
pub static TEST_WORLD: &str = "Scania";
pub static TEST_CLASS: &str = "Hero";
