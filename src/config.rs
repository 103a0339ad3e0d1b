use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Settings for the recipe sources
///
/// TheMealDB is keyless; Spoonacular and API-Ninjas stay disabled until a
/// key is configured. The base-URL overrides exist for proxies and tests.
#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    /// API key for Spoonacular (sent as a query parameter)
    #[serde(default)]
    pub spoonacular_api_key: Option<String>,
    /// API key for API-Ninjas (sent as the X-Api-Key header)
    #[serde(default)]
    pub api_ninjas_api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Override for TheMealDB endpoint base
    #[serde(default)]
    pub mealdb_base_url: Option<String>,
    /// Override for the Spoonacular endpoint base
    #[serde(default)]
    pub spoonacular_base_url: Option<String>,
    /// Override for the API-Ninjas endpoint base
    #[serde(default)]
    pub api_ninjas_base_url: Option<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            spoonacular_api_key: None,
            api_ninjas_api_key: None,
            timeout: default_timeout(),
            mealdb_base_url: None,
            spoonacular_base_url: None,
            api_ninjas_base_url: None,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl SourcesConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__SPOONACULAR_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SourcesConfig::default();
        assert!(config.spoonacular_api_key.is_none());
        assert!(config.api_ninjas_api_key.is_none());
        assert!(config.mealdb_base_url.is_none());
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_request_timeout_uses_configured_seconds() {
        let config = SourcesConfig {
            timeout: 5,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
