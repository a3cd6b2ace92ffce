use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlateError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(u32),

    #[error("Ingredient with id {0} does not exist")]
    InvalidIngredient(u32),

    #[error("Explanation service not configured")]
    ExplanationUnavailable,

    #[error("Explanation request failed: {0}")]
    Explanation(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlateError>;

impl IntoResponse for PlateError {
    fn into_response(self) -> Response {
        let status = match self {
            PlateError::SessionNotFound(_) | PlateError::IngredientNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            PlateError::InvalidIngredient(_) | PlateError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            PlateError::ExplanationUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            PlateError::Explanation(_) => StatusCode::BAD_GATEWAY,
            PlateError::Io(_) | PlateError::Json(_) | PlateError::Csv(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
