mod errors;
mod ingredient;

pub use errors::{FormErrors, IngredientField, RecipeField};
pub use ingredient::IngredientRow;

use log::{debug, error, info};

use crate::api::RecipeApi;
use crate::error::{FormError, SubmitError};
use crate::model::{CreatedRecipe, IngredientDraft, RecipeDraft, SelectedFile, SourceRecipe};
use crate::routes::Route;
use crate::validation::{validate, ValidationOptions};

pub const TITLE_MAX_CHARS: usize = 30;
pub const AMOUNT_MAX_CHARS: usize = 5;
pub const INGREDIENT_MAX_CHARS: usize = 30;

/// Constraints for each top-level field
pub fn recipe_field_rules(field: RecipeField) -> ValidationOptions {
    match field {
        RecipeField::Title => ValidationOptions::max_chars(TITLE_MAX_CHARS),
        RecipeField::Description | RecipeField::Instructions => ValidationOptions::required(),
        RecipeField::Photo => ValidationOptions::optional(),
    }
}

/// Constraints for each ingredient field
pub fn ingredient_field_rules(field: IngredientField) -> ValidationOptions {
    match field {
        IngredientField::Ingredient => ValidationOptions::max_chars(INGREDIENT_MAX_CHARS),
        IngredientField::Amount => ValidationOptions::max_chars(AMOUNT_MAX_CHARS),
        IngredientField::UnitOfMeasure => ValidationOptions::optional(),
    }
}

/// Where a form is in its submit lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// Holds the id of the created or forked recipe
    Succeeded(String),
    Failed,
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub recipe: CreatedRecipe,
    /// Detail page of the new recipe
    pub route: Route,
}

/// Marks a submit as in flight; resets to `Idle` if dropped before `finish`
struct InFlight<'a> {
    state: &'a mut SubmissionState,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Submitting;
        InFlight { state }
    }

    fn finish(self, next: SubmissionState) {
        *self.state = next;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.state == SubmissionState::Submitting {
            *self.state = SubmissionState::Idle;
        }
    }
}

/// State and submit flow for creating or forking a recipe
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    draft: RecipeDraft,
    file: Option<SelectedFile>,
    errors: FormErrors,
    source_id: Option<String>,
    state: SubmissionState,
}

impl RecipeForm {
    /// Blank form that creates a new recipe
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded from `source` that submits a fork of it
    pub fn fork_of(source: &SourceRecipe) -> Self {
        let ingredients = if source.ingredients.is_empty() {
            vec![IngredientDraft::default()]
        } else {
            source.ingredients.clone()
        };

        RecipeForm {
            draft: RecipeDraft {
                title: source.title.clone(),
                description: source.description.clone(),
                instructions: source.instructions.clone(),
                ingredients,
                photo: String::new(),
            },
            source_id: Some(source.id.clone()),
            ..Default::default()
        }
    }

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    pub fn is_fork(&self) -> bool {
        self.source_id.is_some()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn field(&self, field: RecipeField) -> &str {
        match field {
            RecipeField::Title => &self.draft.title,
            RecipeField::Description => &self.draft.description,
            RecipeField::Instructions => &self.draft.instructions,
            RecipeField::Photo => &self.draft.photo,
        }
    }

    /// Replace a text field. Not validated until submit.
    pub fn set_field(&mut self, field: RecipeField, value: impl Into<String>) {
        let slot = match field {
            RecipeField::Title => &mut self.draft.title,
            RecipeField::Description => &mut self.draft.description,
            RecipeField::Instructions => &mut self.draft.instructions,
            RecipeField::Photo => &mut self.draft.photo,
        };
        *slot = value.into();
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        debug!("Selected file '{}'", file.file_name);
        self.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// Append a blank ingredient and return its index
    pub fn add_ingredient(&mut self) -> usize {
        self.draft.ingredients.push(IngredientDraft::default());
        self.draft.ingredients.len() - 1
    }

    pub fn ingredient_count(&self) -> usize {
        self.draft.ingredients.len()
    }

    pub fn ingredient_row(&mut self, index: usize) -> Option<IngredientRow<'_>> {
        IngredientRow::new(&mut self.draft.ingredients, index)
    }

    pub fn set_ingredient_field(
        &mut self,
        index: usize,
        field: IngredientField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let len = self.draft.ingredients.len();
        let mut row = self
            .ingredient_row(index)
            .ok_or(FormError::IngredientIndex { index, len })?;
        row.set(field, value);
        Ok(())
    }

    /// Recompute all field errors. Returns true when the draft is valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        for field in RecipeField::ALL {
            if let Some(message) = validate(self.field(field), &recipe_field_rules(field)) {
                self.errors.set_field(field, message);
            }
        }

        for (index, ingredient) in self.draft.ingredients.iter().enumerate() {
            for field in IngredientField::ALL {
                let value = match field {
                    IngredientField::Ingredient => &ingredient.ingredient,
                    IngredientField::Amount => &ingredient.amount,
                    IngredientField::UnitOfMeasure => &ingredient.unit_of_measure,
                };
                if let Some(message) = validate(value, &ingredient_field_rules(field)) {
                    self.errors.set_ingredient(index, field, message);
                }
            }
        }

        self.errors.is_empty()
    }

    /// Validate, upload the selected file if any, then create or fork.
    ///
    /// Failures are logged and recorded in `errors()`; the draft is kept so
    /// the caller can fix it or retry. Dropping the returned future cancels
    /// the attempt and leaves the form `Idle`.
    pub async fn submit(
        &mut self,
        api: &dyn RecipeApi,
        user_id: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        if !self.validate() {
            debug!("Recipe draft failed validation: {} error(s)", self.errors.len());
            self.state = SubmissionState::Failed;
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let in_flight = InFlight::begin(&mut self.state);

        if let Some(file) = &self.file {
            match api.upload_image(file).await {
                Ok(reference) => {
                    info!("Uploaded '{}' as {}", file.file_name, reference);
                    self.draft.photo = reference;
                    self.file = None;
                }
                Err(e) => {
                    error!("Image upload failed: {}", e);
                    self.errors.set_form(format!("Could not upload photo: {}", e));
                    in_flight.finish(SubmissionState::Failed);
                    return Err(e.into());
                }
            }
        }

        let result = match &self.source_id {
            Some(source_id) => {
                debug!("Forking recipe {} for user {}", source_id, user_id);
                api.add_fork(user_id, source_id, &self.draft).await
            }
            None => {
                debug!("Creating recipe for user {}", user_id);
                api.add_recipe(user_id, &self.draft).await
            }
        };

        match result {
            Ok(recipe) => {
                info!("Saved recipe {}", recipe.id);
                in_flight.finish(SubmissionState::Succeeded(recipe.id.clone()));
                let route = Route::Recipe(recipe.id.clone());
                Ok(SubmitOutcome { recipe, route })
            }
            Err(e) => {
                error!("Recipe submission failed: {}", e);
                self.errors.set_form(format!("Could not save recipe: {}", e));
                in_flight.finish(SubmissionState::Failed);
                Err(e.into())
            }
        }
    }
}
