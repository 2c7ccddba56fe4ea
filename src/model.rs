use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::UploadError;

/// One ingredient line of a recipe draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDraft {
    #[serde(default)]
    pub ingredient: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub unit_of_measure: String,
}

impl IngredientDraft {
    pub fn new(
        ingredient: impl Into<String>,
        amount: impl Into<String>,
        unit_of_measure: impl Into<String>,
    ) -> Self {
        Self {
            ingredient: ingredient.into(),
            amount: amount.into(),
            unit_of_measure: unit_of_measure.into(),
        }
    }
}

/// An unsaved recipe, as sent to the create and fork endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientDraft>,
    /// Uploaded photo reference, empty when there is none
    #[serde(default)]
    pub photo: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            instructions: String::new(),
            ingredients: vec![IngredientDraft::default()],
            photo: String::new(),
        }
    }
}

/// An existing recipe that a new draft is forked from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRecipe {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientDraft>,
}

/// The recipe resource returned by the create and fork endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedRecipe {
    #[serde(rename = "_id")]
    pub id: String,
    /// Every other field the service returned
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An image chosen for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).map(str::to_string);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read an image from disk
    pub async fn from_path(path: &Path) -> Result<Self, UploadError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_draft_has_one_blank_ingredient() {
        let draft = RecipeDraft::default();
        assert_eq!(draft.ingredients, vec![IngredientDraft::default()]);
        assert!(draft.photo.is_empty());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = RecipeDraft {
            title: "Polish Burgers".to_string(),
            ingredients: vec![IngredientDraft::new("beef", "500", "g")],
            ..Default::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["ingredients"][0]["unitOfMeasure"], "g");
        assert_eq!(value["photo"], "");
    }

    #[test]
    fn test_created_recipe_keeps_extra_fields() {
        let created: CreatedRecipe = serde_json::from_value(json!({
            "_id": "abc123",
            "title": "Soup",
            "forkedFrom": "xyz"
        }))
        .unwrap();
        assert_eq!(created.id, "abc123");
        assert_eq!(created.extra["forkedFrom"], "xyz");
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pancakes.png");
        std::fs::write(&path, b"png bytes").unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "pancakes.png");
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
        assert_eq!(file.bytes, b"png bytes".to_vec());
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::from_path(&dir.path().join("missing.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::Io(_)));
        assert!(err.to_string().starts_with("Failed to read image file"));
    }

    #[test]
    fn test_content_type_guess() {
        assert_eq!(
            SelectedFile::new("cake.JPG", vec![]).content_type.as_deref(),
            Some("image/jpeg")
        );
        assert_eq!(SelectedFile::new("notes", vec![]).content_type, None);
    }
}
