mod http;

pub use http::HttpRecipeApi;

use async_trait::async_trait;

use crate::error::{ApiError, UploadError};
use crate::model::{CreatedRecipe, RecipeDraft, SelectedFile};

/// Remote operations the recipe form depends on.
///
/// None of these retry; a failure ends the current submit attempt.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Upload an image and return the reference to store in `RecipeDraft::photo`
    async fn upload_image(&self, file: &SelectedFile) -> Result<String, UploadError>;

    /// Create a new recipe owned by `user_id`
    async fn add_recipe(
        &self,
        user_id: &str,
        draft: &RecipeDraft,
    ) -> Result<CreatedRecipe, ApiError>;

    /// Create a new recipe owned by `user_id` derived from `source_id`
    async fn add_fork(
        &self,
        user_id: &str,
        source_id: &str,
        draft: &RecipeDraft,
    ) -> Result<CreatedRecipe, ApiError>;
}
