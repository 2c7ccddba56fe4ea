use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Settings for talking to the recipe service
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the recipe service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// User that owns submitted recipes, if not given on the command line
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            user_id: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("recipe-form/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Load configuration from `recipe-form.toml` and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FORM__ prefix
    /// 2. recipe-form.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FORM__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }

    /// Same as [`ClientConfig::load`] but reading the given file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        load_config(Some(path))
    }
}

fn load_config(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-form").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested keys: RECIPE_FORM__BASE_URL
        .add_source(
            Environment::with_prefix("RECIPE_FORM")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
