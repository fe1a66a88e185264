use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::book::Store;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum ModalError {
    #[error("Failed to fetch book: {0}")]
    Fetch(String),

    #[error("Book has no buy link for {0}")]
    MissingBuyLink(Store),

    #[error("Required element not found: {0}")]
    DomBinding(String),

    #[error("Failed to attach listener: {0}")]
    ListenerBinding(String),

    #[error("Failed to render book modal: {0}")]
    Render(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Book modal is already open")]
    AlreadyOpen,

    #[error("Book modal is not open")]
    NotOpen,
}

impl From<ValidationErrors> for ModalError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for ModalError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModalError>;
