use std::time::Duration;

use reqwest::Client;

use crate::api::HttpRecipeApi;
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Builder for configuring an HTTP recipe client
#[derive(Debug, Default)]
pub struct RecipeClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RecipeClientBuilder {
    /// Start from loaded configuration
    ///
    /// # Example
    /// ```
    /// use recipe_form::{ClientConfig, RecipeClient};
    ///
    /// let builder = RecipeClient::builder().config(&ClientConfig::default());
    /// ```
    pub fn config(self, config: &ClientConfig) -> Self {
        self.base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.clone())
    }

    /// Set the base URL of the recipe service
    ///
    /// # Example
    /// ```
    /// use recipe_form::RecipeClient;
    ///
    /// let builder = RecipeClient::builder()
    ///     .base_url("https://recipes.example.com");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `ClientError` if no base URL was set or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<HttpRecipeApi, ClientError> {
        let base_url = self.base_url.ok_or_else(|| {
            ClientError::Builder("No base URL specified. Use .base_url() or .config()".to_string())
        })?;

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Builder(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let mut client = Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            client = client.user_agent(user_agent);
        }

        Ok(HttpRecipeApi::with_client(client.build()?, base_url))
    }
}

/// Main entry point for the builder API
pub struct RecipeClient;

impl RecipeClient {
    /// Creates a new builder for an HTTP recipe client
    pub fn builder() -> RecipeClientBuilder {
        RecipeClientBuilder::default()
    }
}
