//! Errors surfaced to HTTP clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid signup data")]
    InvalidSignupData,
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::InvalidSignupData => "invalid_signup_data",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Both variants are client input problems.
        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
