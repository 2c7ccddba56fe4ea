use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::Deserialize;

use crate::api::RecipeApi;
use crate::error::{ApiError, UploadError};
use crate::model::{CreatedRecipe, RecipeDraft, SelectedFile};

/// Body of a successful image upload: either the bare reference or an object holding it
#[derive(Deserialize)]
#[serde(untagged)]
enum UploadResponse {
    Reference(String),
    Object { url: String },
}

/// `RecipeApi` backed by the recipe service's HTTP endpoints
#[derive(Debug)]
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    /// Create a client for `base_url` with default HTTP settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client for `base_url` reusing a configured `reqwest::Client`
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpRecipeApi { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append `segments` to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, String> {
        let mut url = Url::parse(&self.base_url).map_err(|e| e.to_string())?;
        url.path_segments_mut()
            .map_err(|_| format!("Base URL cannot hold a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn created_recipe(response: Response) -> Result<CreatedRecipe, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Recipe service response: {}", body);
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn upload_image(&self, file: &SelectedFile) -> Result<String, UploadError> {
        let url = self
            .endpoint(&["api", "images"])
            .map_err(UploadError::InvalidUrl)?;

        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part("image", part);

        debug!(
            "Uploading image '{}' ({} bytes)",
            file.file_name,
            file.bytes.len()
        );

        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reference = match serde_json::from_str::<UploadResponse>(&body)
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?
        {
            UploadResponse::Reference(reference) => reference,
            UploadResponse::Object { url } => url,
        };

        if reference.trim().is_empty() {
            return Err(UploadError::InvalidResponse(
                "Empty image reference".to_string(),
            ));
        }

        Ok(reference)
    }

    async fn add_recipe(
        &self,
        user_id: &str,
        draft: &RecipeDraft,
    ) -> Result<CreatedRecipe, ApiError> {
        let url = self
            .endpoint(&["api", "users", user_id, "recipes"])
            .map_err(ApiError::InvalidUrl)?;

        let response = self.client.post(url).json(draft).send().await?;

        Self::created_recipe(response).await
    }

    async fn add_fork(
        &self,
        user_id: &str,
        source_id: &str,
        draft: &RecipeDraft,
    ) -> Result<CreatedRecipe, ApiError> {
        let url = self
            .endpoint(&["api", "users", user_id, "recipes", source_id, "fork"])
            .map_err(ApiError::InvalidUrl)?;

        let response = self.client.post(url).json(draft).send().await?;

        Self::created_recipe(response).await
    }
}
