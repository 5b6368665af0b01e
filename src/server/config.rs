use crate::server::error::config::ConfigError;

/// Runtime configuration read from the environment.
pub struct Config {
    pub contact_email: String,
    pub database_url: String,
    pub valkey_url: String,
    /// Override for the Nexon Open API base URL, mainly for staging or local mocks
    pub nexon_api_url: Option<String>,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let contact_email = required("CONTACT_EMAIL")?;
        if !contact_email.contains('@') {
            return Err(ConfigError::InvalidEnvValue {
                var: "CONTACT_EMAIL".to_string(),
                reason: "expected an email address".to_string(),
            });
        }

        let user_agent = format!(
            "{}/{} ({})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            contact_email
        );

        Ok(Self {
            contact_email,
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            nexon_api_url: std::env::var("NEXON_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            user_agent,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
