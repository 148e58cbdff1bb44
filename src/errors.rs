use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Generation backend error: {0}")]
    GenerationBackend(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidSelection(_) => "INVALID_SELECTION",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::GenerationBackend(_) => "GENERATION_BACKEND_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidSelection(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationBackend(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::GenerationBackend(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
