//! Recipe draft validation and submission for the recipe-sharing service.
//!
//! A [`RecipeForm`] holds an unsaved recipe, validates it, uploads an
//! optional photo and then creates a new recipe or forks an existing one
//! through a [`RecipeApi`].
//!
//! ```no_run
//! # use recipe_form::{RecipeClient, RecipeField, RecipeForm, IngredientField};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = RecipeClient::builder()
//!     .base_url("https://recipes.example.com")
//!     .build()?;
//!
//! let mut form = RecipeForm::new();
//! form.set_field(RecipeField::Title, "Pierogi");
//! form.set_field(RecipeField::Description, "Grandma's dumplings");
//! form.set_field(RecipeField::Instructions, "Fold, boil, fry");
//! form.set_ingredient_field(0, IngredientField::Ingredient, "flour")?;
//! form.set_ingredient_field(0, IngredientField::Amount, "500")?;
//!
//! let outcome = form.submit(&api, "user-1").await?;
//! println!("{}", outcome.route);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod routes;
pub mod shell;
pub mod validation;

pub use api::{HttpRecipeApi, RecipeApi};
pub use builder::{RecipeClient, RecipeClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiError, ClientError, FormError, SubmitError, UploadError};
pub use form::{
    FormErrors, IngredientField, IngredientRow, RecipeField, RecipeForm, SubmissionState,
    SubmitOutcome,
};
pub use model::{CreatedRecipe, IngredientDraft, RecipeDraft, SelectedFile, SourceRecipe};
pub use routes::Route;
pub use shell::{FormShell, HistoryNavigator, Modal, Navigator};
pub use validation::{validate, ValidationOptions};
