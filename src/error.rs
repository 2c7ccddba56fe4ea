use thiserror::Error;

use crate::form::FormErrors;

/// Errors raised while uploading a selected photo
#[derive(Error, Debug)]
pub enum UploadError {
    /// The selected file could not be read from disk
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    /// The upload request could not be sent or its body could not be read
    #[error("Image upload request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upload endpoint could not be built from the base URL
    #[error("Invalid upload URL: {0}")]
    InvalidUrl(String),

    /// The image service answered with a non-success status
    #[error("Image upload rejected ({status}): {body}")]
    Status { status: u16, body: String },

    /// The image service answered without a usable reference
    #[error("Invalid upload response: {0}")]
    InvalidResponse(String),
}

/// Errors raised by the create/fork recipe endpoints
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or its body could not be read
    #[error("Recipe request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The recipe endpoint could not be built from the base URL and ids
    #[error("Invalid recipe URL: {0}")]
    InvalidUrl(String),

    /// The recipe service answered with a non-success status
    #[error("Recipe service error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The recipe service answered with a body we could not interpret
    #[error("Invalid recipe response: {0}")]
    InvalidResponse(String),
}

/// Errors from a single submit attempt
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more fields failed validation; no request was issued
    #[error("Recipe has {} invalid field(s)", .0.len())]
    Invalid(FormErrors),

    /// The selected photo could not be uploaded
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The create or fork request failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors from editing form state
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    /// The ingredient index does not address an existing row
    #[error("Ingredient index {index} out of range (form has {len} ingredients)")]
    IngredientIndex { index: usize, len: usize },
}

/// Errors from building an API client or loading its configuration
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),
}
